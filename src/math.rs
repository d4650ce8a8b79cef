//! Mathematical utilities for the almanac calculations.
//!
//! The 1990 almanac method is written for a calculator in "degree" mode. The
//! `*_deg` helpers take or return degrees and convert to radians only at the
//! boundary of the underlying trig functions.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Maps `x` into `[lo, hi)` by true modular reduction.
///
/// Unlike a bare `%`, negative inputs wrap from the top of the range, and the
/// upper bound is never returned even when rounding would otherwise produce it.
pub fn normalize(x: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    let mut reduced = (x - lo) % span;
    if reduced < 0.0 {
        reduced += span;
    }
    if reduced >= span {
        reduced -= span;
    }
    lo + reduced
}

/// Normalizes an angle in degrees to the range [0, 360).
#[inline]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize(degrees, 0.0, 360.0)
}

/// Normalizes a time in hours to the range [0, 24).
#[inline]
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    normalize(hours, 0.0, 24.0)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees. NaN outside [-1, 1].
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees. NaN outside [-1, 1].
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees, in (-90, 90).
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half away from zero using the appropriate function for the compilation target.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}
