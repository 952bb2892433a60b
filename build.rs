use std::env;
use std::process::Command;

// First stable release where the AVX-512 target feature and intrinsics are usable.
const AVX512_STABLE_MINOR: u32 = 89;

#[derive(Debug, PartialEq, Eq)]
enum Channel {
    Stable,
    Beta,
    Nightly,
}

#[derive(Debug)]
struct Toolchain {
    minor: u32,
    channel: Channel,
}

impl Toolchain {
    // Parses the first line of `rustc --version --verbose`, e.g.
    // "rustc 1.89.0 (29483883e 2025-08-04)" or "rustc 1.90.0-nightly (...)".
    fn parse(version_info: &str) -> Option<Toolchain> {
        let first_line = version_info.lines().next()?;
        let version = first_line.split_whitespace().nth(1)?;

        let mut parts = version.split(['.', '-']);
        let _major = parts.next()?;
        let minor = parts.next()?.parse().ok()?;

        let channel = if version.contains("nightly") || version.contains("dev") {
            Channel::Nightly
        } else if version.contains("beta") {
            Channel::Beta
        } else {
            Channel::Stable
        };

        Some(Toolchain { minor, channel })
    }

    fn detect() -> Option<Toolchain> {
        let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        let output = Command::new(rustc)
            .args(["--version", "--verbose"])
            .output()
            .ok()?;

        Toolchain::parse(&String::from_utf8_lossy(&output.stdout))
    }

    fn has_stable_avx512(&self) -> bool {
        self.minor >= AVX512_STABLE_MINOR
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Disable flag warnings for build
    println!("cargo::rustc-check-cfg=cfg(avx512)");
    println!("cargo::rustc-check-cfg=cfg(avx512_nightly)");

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if target_arch != "x86_64" && target_arch != "x86" {
        return;
    }

    // Without a readable toolchain version, the AVX-512 tier is left out and
    // dispatch tops out at AVX2.
    let Some(toolchain) = Toolchain::detect() else {
        return;
    };

    if toolchain.has_stable_avx512() {
        println!("cargo:rustc-cfg=avx512");
    } else if toolchain.channel == Channel::Nightly {
        println!("cargo:rustc-cfg=avx512");
        println!("cargo:rustc-cfg=avx512_nightly");
    }
}
