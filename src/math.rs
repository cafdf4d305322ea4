//! Float helpers that dispatch to `std` or `libm` depending on the build.

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

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
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

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
