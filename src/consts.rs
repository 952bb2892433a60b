//! Constant tables shared by every vector tier.
//!
//! Each precision gets its own coefficient sets (highest degree first, ready
//! for Horner evaluation), range-reduction splits and special-value
//! thresholds. Kernels are written once against [`MathConsts`] and pick the
//! table that matches their lane type, so an f64 kernel carries more terms
//! than its f32 twin without any change in the algorithm.
//!
//! Sources of the coefficient sets:
//!
//! | Set | f32 | f64 |
//! |-----|-----|-----|
//! | `EXP_POLY` | Cephes `expf` minimax, degree 7 | Taylor, degree 13 |
//! | `LOG_POLY` | `2·atanh` series in `y²`, 5 terms | same, 11 terms |
//! | `SIN_POLY`, `COS_POLY` | Cephes `sinf`/`cosf` | Cephes `sin`/`cos` |
//! | `ATAN_POLY` | Cephes `atanf` | Chebyshev fit on `[0, tan²(π/8)]` |
//! | `ASIN_POLY` | Cephes `asinf` | Chebyshev fit on `[0, ¼]` |
//! | `SINH_POLY` | Taylor to `x¹¹` | Taylor to `x¹⁹` |
//! | `ERF_POLY` | Abramowitz & Stegun 7.1.26 | same |
//! | `ERF_TAYLOR` | Maclaurin to `x⁹` | same |

#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]

use std::fmt::Debug;

use num::Float;

/// Precision-specific constants consumed by the generic kernels.
///
/// Implemented for `f32` and `f64` only.
pub trait MathConsts: Float + Debug + Send + Sync + 'static {
    /// Number of explicit mantissa bits.
    const MANTISSA_BITS: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// `2^MANTISSA_BITS`, used to lift subnormals into the normal range.
    const SUBNORMAL_SCALE: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    const LN2: Self;
    /// High part of `ln 2`; `k·LN2_HI` is exact for every reachable `k`.
    const LN2_HI: Self;
    const LN2_LO: Self;
    const LOG2_E: Self;
    const LOG10_E: Self;
    const LOG10_2: Self;
    const SQRT_2: Self;
    const FRAC_1_SQRT_2: Self;

    /// `ln(MAX)`: `exp(x)` overflows above this.
    const EXP_OVERFLOW: Self;
    /// `ln(min_subnormal / 2)`: `exp(x)` rounds to zero below this.
    const EXP_UNDERFLOW: Self;
    const EXP2_OVERFLOW: Self;
    const EXP2_UNDERFLOW: Self;
    const EXP_POLY: &'static [Self];
    const LOG_POLY: &'static [Self];

    const PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_PI_4: Self;
    const FRAC_2_PI: Self;
    /// Cody–Waite split of `π/2`. The first three parts carry few enough
    /// bits that `k·part` is exact for every `|x| ≤ TRIG_WIDE`, with or
    /// without a fused multiply-add.
    const PIO2_HI: Self;
    const PIO2_MID: Self;
    const PIO2_LO: Self;
    const PIO2_TAIL: Self;
    /// `π/2 − FRAC_PI_2`.
    const FRAC_PI_2_LO: Self;
    /// Largest `|x|` reduced with the Cody–Waite split.
    const TRIG_WIDE: Self;
    /// `2/π` cut into chunks of half the mantissa width, highest first,
    /// each divided by `TRIG_WIDE_SCALE` so the tail stays normal.
    const FRAC_2_PI_CHUNKS: &'static [Self];
    const TRIG_WIDE_SCALE: Self;
    /// Veltkamp factor `2^s + 1` splitting a mantissa into halves that
    /// multiply exactly with one chunk.
    const SPLITTER: Self;
    const SIN_POLY: &'static [Self];
    const COS_POLY: &'static [Self];

    const TAN_PI_8: Self;
    const ATAN_POLY: &'static [Self];
    const ASIN_POLY: &'static [Self];

    const SINH_POLY: &'static [Self];
    /// Above this magnitude `asinh`/`acosh` switch to `ln|x| + ln 2`.
    const ASINH_LARGE: Self;

    const ERF_P: Self;
    const ERF_POLY: &'static [Self];
    /// Below this `|x|`, `erf` uses the Maclaurin series `ERF_TAYLOR` in `x²`.
    const ERF_SMALL: Self;
    const ERF_TAYLOR: &'static [Self];

    /// Clamp range of the sigmoid argument. Lanes outside saturate to 0 / 1.
    const SIGMOID_LO: Self;
    const SIGMOID_HI: Self;
    /// `|x|` from which `tanh` returns exactly `±1`.
    const TANH_SATURATION: Self;
    /// `|x|` below which `tanh(x) == x` to working precision.
    const TANH_LINEAR: Self;

    /// Narrows (or widens) an `f64` literal to this precision.
    fn from_f64(value: f64) -> Self;
}

impl MathConsts for f32 {
    const MANTISSA_BITS: f32 = 23.0;
    const MIN_POSITIVE: f32 = f32::MIN_POSITIVE;
    const SUBNORMAL_SCALE: f32 = 8388608.0;
    const INFINITY: f32 = f32::INFINITY;
    const NEG_INFINITY: f32 = f32::NEG_INFINITY;
    const NAN: f32 = f32::NAN;

    const LN2: f32 = std::f32::consts::LN_2;
    const LN2_HI: f32 = 0.693359375;
    const LN2_LO: f32 = -2.12194440e-4;
    const LOG2_E: f32 = std::f32::consts::LOG2_E;
    const LOG10_E: f32 = std::f32::consts::LOG10_E;
    const LOG10_2: f32 = std::f32::consts::LOG10_2;
    const SQRT_2: f32 = std::f32::consts::SQRT_2;
    const FRAC_1_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

    const EXP_OVERFLOW: f32 = 88.7228317;
    const EXP_UNDERFLOW: f32 = -103.972077083991796;
    const EXP2_OVERFLOW: f32 = 128.0;
    const EXP2_UNDERFLOW: f32 = -150.0;
    const EXP_POLY: &'static [f32] = &[
        1.9875691500e-4,
        1.3981999507e-3,
        8.3334519073e-3,
        4.1665795894e-2,
        1.6666665459e-1,
        5.0000001201e-1,
        1.0,
        1.0,
    ];
    const LOG_POLY: &'static [f32] = &[2.0 / 9.0, 2.0 / 7.0, 2.0 / 5.0, 2.0 / 3.0, 2.0];

    const PI: f32 = std::f32::consts::PI;
    const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;
    const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;
    const FRAC_2_PI: f32 = std::f32::consts::FRAC_2_PI;
    const PIO2_HI: f32 = 1.5703125;
    const PIO2_MID: f32 = 4.837512969970703125e-4;
    const PIO2_LO: f32 = 7.549533620476723e-8;
    const PIO2_TAIL: f32 = 2.5633440682570896e-12;
    const FRAC_PI_2_LO: f32 = -4.371138828673793e-8;
    const TRIG_WIDE: f32 = 8192.0;
    const FRAC_2_PI_CHUNKS: &'static [f32] = &[
        8.068274206042466e+29,
        1.8398339817260138e+26,
        3.254005654602365e+22,
        1.6447145839157051e+19,
        371634930188288.0,
        686121025536.0,
        41222144.0,
        32016.0,
        15.32421875,
        0.0011873245239257812,
        7.182825356721878e-7,
        1.6564172256039456e-10,
        3.3209546224099995e-14,
        8.009543549236664e-18,
        8.94182242169823e-22,
        1.3126645462877636e-26,
        2.0061718895901856e-28,
    ];
    const TRIG_WIDE_SCALE: f32 = 7.888609052210118e-31;
    const SPLITTER: f32 = 4097.0;
    const SIN_POLY: &'static [f32] = &[-1.9515295891e-4, 8.3321608736e-3, -1.6666654611e-1];
    const COS_POLY: &'static [f32] = &[
        2.443315711809948e-5,
        -1.388731625493765e-3,
        4.166664568298827e-2,
    ];

    const TAN_PI_8: f32 = 0.41421356237309504880;
    const ATAN_POLY: &'static [f32] = &[
        8.05374449538e-2,
        -1.38776856032e-1,
        1.99777106478e-1,
        -3.33329491539e-1,
    ];
    const ASIN_POLY: &'static [f32] = &[
        4.2163199048e-2,
        2.4181311049e-2,
        4.5470025998e-2,
        7.4953002686e-2,
        1.6666752422e-1,
    ];

    const SINH_POLY: &'static [f32] = &[
        1.0 / 39916800.0,
        1.0 / 362880.0,
        1.0 / 5040.0,
        1.0 / 120.0,
        1.0 / 6.0,
        1.0,
    ];
    const ASINH_LARGE: f32 = 4096.0;

    const ERF_P: f32 = 0.3275911;
    const ERF_POLY: &'static [f32] = &[
        1.061405429,
        -1.453152027,
        1.421413741,
        -0.284496736,
        0.254829592,
    ];
    const ERF_SMALL: f32 = 0.25;
    const ERF_TAYLOR: &'static [f32] = &[
        0.005223977625442188,
        -0.026866170645131252,
        0.11283791670955126,
        -0.37612638903183754,
        1.1283791670955126,
    ];

    const SIGMOID_LO: f32 = -87.0;
    const SIGMOID_HI: f32 = 20.0;
    const TANH_SATURATION: f32 = 9.0;
    const TANH_LINEAR: f32 = 2.44140625e-4;

    #[inline(always)]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}

impl MathConsts for f64 {
    const MANTISSA_BITS: f64 = 52.0;
    const MIN_POSITIVE: f64 = f64::MIN_POSITIVE;
    const SUBNORMAL_SCALE: f64 = 4503599627370496.0;
    const INFINITY: f64 = f64::INFINITY;
    const NEG_INFINITY: f64 = f64::NEG_INFINITY;
    const NAN: f64 = f64::NAN;

    const LN2: f64 = std::f64::consts::LN_2;
    const LN2_HI: f64 = 6.93147180369123816490e-01;
    const LN2_LO: f64 = 1.90821492927058770002e-10;
    const LOG2_E: f64 = std::f64::consts::LOG2_E;
    const LOG10_E: f64 = std::f64::consts::LOG10_E;
    const LOG10_2: f64 = std::f64::consts::LOG10_2;
    const SQRT_2: f64 = std::f64::consts::SQRT_2;
    const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    const EXP_OVERFLOW: f64 = 7.09782712893383973096e+02;
    const EXP_UNDERFLOW: f64 = -7.45133219101941108420e+02;
    const EXP2_OVERFLOW: f64 = 1024.0;
    const EXP2_UNDERFLOW: f64 = -1075.0;
    const EXP_POLY: &'static [f64] = &[
        1.0 / 6227020800.0,
        1.0 / 479001600.0,
        1.0 / 39916800.0,
        1.0 / 3628800.0,
        1.0 / 362880.0,
        1.0 / 40320.0,
        1.0 / 5040.0,
        1.0 / 720.0,
        1.0 / 120.0,
        1.0 / 24.0,
        1.0 / 6.0,
        0.5,
        1.0,
        1.0,
    ];
    const LOG_POLY: &'static [f64] = &[
        2.0 / 21.0,
        2.0 / 19.0,
        2.0 / 17.0,
        2.0 / 15.0,
        2.0 / 13.0,
        2.0 / 11.0,
        2.0 / 9.0,
        2.0 / 7.0,
        2.0 / 5.0,
        2.0 / 3.0,
        2.0,
    ];

    const PI: f64 = std::f64::consts::PI;
    const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
    const FRAC_PI_4: f64 = std::f64::consts::FRAC_PI_4;
    const FRAC_2_PI: f64 = std::f64::consts::FRAC_2_PI;
    const PIO2_HI: f64 = 1.57079632673412561417e+00;
    const PIO2_MID: f64 = 6.07710050630396597660e-11;
    const PIO2_LO: f64 = 2.02226624871116645580e-21;
    const PIO2_TAIL: f64 = 8.47842766036889956997e-32;
    const FRAC_PI_2_LO: f64 = 6.123233995736766e-17;
    const TRIG_WIDE: f64 = 1.0e6;
    const FRAC_2_PI_CHUNKS: &'static [f64] = &[
        2.6416636121591983e+180,
        4.473755396398119e+172,
        2.973748106092612e+164,
        1.1474672122087409e+157,
        4.2248973588586766e+148,
        1.3044644088886268e+141,
        2.622129163535969e+133,
        4.362534648040072e+124,
        3.927251695255066e+117,
        1.4037479001408836e+110,
        9.998090070469519e+101,
        1.8848416382657083e+94,
        4.352055270832885e+86,
        5.4322946486718525e+78,
        1.0840950971148388e+70,
        8.70829287409932e+62,
        1.6968815912787755e+55,
        3.591425416078619e+47,
        2.0273152711908564e+39,
        6.627587756293737e+31,
        7.387579808812906e+23,
        1.4741694633213952e+16,
        20550100.0,
        2.224660098552704,
        1.3493819395193896e-08,
        6.069069152926887e-17,
        1.15584179878604e-23,
        1.540688207690201e-31,
        2.9372122277192276e-39,
        1.646405443094729e-47,
        6.145422639522993e-55,
        4.960733889607687e-63,
        6.181229475297696e-71,
        5.112693181914562e-79,
        1.9536696731873403e-86,
        2.6938405463710756e-94,
        2.6764978826042154e-102,
        8.841120253208753e-110,
        7.853222147741055e-118,
        8.753749820038938e-126,
        7.975215318056252e-134,
        1.5231577594109698e-141,
        5.8566448117620214e-149,
        3.2724949462484394e-157,
        5.654565357393325e-166,
    ];
    const TRIG_WIDE_SCALE: f64 = 2.409919865102884e-181;
    const SPLITTER: f64 = 134217729.0;
    const SIN_POLY: &'static [f64] = &[
        1.58962301576546568060e-10,
        -2.50507477628578072866e-8,
        2.75573136213857245213e-6,
        -1.98412698295895385996e-4,
        8.33333333332211858878e-3,
        -1.66666666666666307295e-1,
    ];
    const COS_POLY: &'static [f64] = &[
        -1.13585365213876817300e-11,
        2.08757008419747316778e-9,
        -2.75573141792967388112e-7,
        2.48015872888517045348e-5,
        -1.38888888888730564116e-3,
        4.16666666666665929218e-2,
    ];

    const TAN_PI_8: f64 = 0.41421356237309504880;
    const ATAN_POLY: &'static [f64] = &[
        -0.01917688711906226,
        0.03923165829558719,
        -0.0508544973794026,
        0.0585814891280221,
        -0.06664511447381948,
        0.07692183190826087,
        -0.09090904578123903,
        0.11111111015256361,
        -0.14285714284666542,
        0.1999999999999552,
        -0.3333333333333333,
    ];
    const ASIN_POLY: &'static [f64] = &[
        0.028169218060881414,
        -0.010749050339697808,
        0.01603551434914882,
        0.0078029494773533175,
        0.011875494382636922,
        0.013929652902326633,
        0.017355259955786323,
        0.02237204763174451,
        0.03038194736709848,
        0.044642857103423646,
        0.07500000000020764,
        0.1666666666666665,
    ];

    const SINH_POLY: &'static [f64] = &[
        1.0 / 121645100408832000.0,
        1.0 / 355687428096000.0,
        1.0 / 1307674368000.0,
        1.0 / 6227020800.0,
        1.0 / 39916800.0,
        1.0 / 362880.0,
        1.0 / 5040.0,
        1.0 / 120.0,
        1.0 / 6.0,
        1.0,
    ];
    const ASINH_LARGE: f64 = 268435456.0;

    const ERF_P: f64 = 0.3275911;
    const ERF_POLY: &'static [f64] = &[
        1.061405429,
        -1.453152027,
        1.421413741,
        -0.284496736,
        0.254829592,
    ];
    const ERF_SMALL: f64 = 0.25;
    const ERF_TAYLOR: &'static [f64] = &[
        0.005223977625442188,
        -0.026866170645131252,
        0.11283791670955126,
        -0.37612638903183754,
        1.1283791670955126,
    ];

    const SIGMOID_LO: f64 = -708.0;
    const SIGMOID_HI: f64 = 40.0;
    const TANH_SATURATION: f64 = 19.0;
    const TANH_LINEAR: f64 = 1e-8;

    #[inline(always)]
    fn from_f64(value: f64) -> f64 {
        value
    }
}
