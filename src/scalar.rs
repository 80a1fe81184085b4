//! Scalar interpolation and remapping utilities.
//!
//! Only the operations the standard library does not already provide live
//! here; `abs`/`signum`/`min`/`max`/`clamp`/`to_radians`/`to_degrees` are
//! covered by the `f32` inherent methods.

/// A linear interpolation between two values. Deliberately unclamped: `t`
/// outside `[0, 1]` extrapolates.
///
/// # Examples
/// ```
/// use pxmath::prelude::*;
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// The inverse of [`lerp`]: the parameter `t` at which `lerp(min, max, t)`
/// would produce `n`. An empty range yields 0.0 rather than dividing by zero.
///
/// # Examples
/// ```
/// use pxmath::prelude::*;
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(0.0, 10.0, 10.0), 1.0);
/// assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0); // empty range
/// ```
pub fn inverse_lerp(min: f32, max: f32, n: f32) -> f32 {
    if max - min == 0.0 {
        0.0
    } else {
        (n - min) / (max - min)
    }
}

/// Remaps `n` from the range `[from_min, from_max]` to `[to_min, to_max]`.
///
/// # Examples
/// ```
/// use pxmath::prelude::*;
/// assert_eq!(remap(0.0, 1.0, -1.0, 1.0, 0.75), 0.5);
/// assert_eq!(remap(0.0, 100.0, 0.0, 1.0, 40.0), 0.4);
/// ```
pub fn remap(from_min: f32, from_max: f32, to_min: f32, to_max: f32, n: f32) -> f32 {
    lerp(to_min, to_max, inverse_lerp(from_min, from_max, n))
}

/// A lerp with a cubic Hermite weight on `t`, giving zero velocity at both
/// endpoints.
///
/// # Examples
/// ```
/// use pxmath::prelude::*;
/// assert_eq!(smooth_lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(smooth_lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(smooth_lerp(0.0, 10.0, 0.5), 5.0);
/// ```
pub fn smooth_lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (t * t * (3.0 - 2.0 * t)) * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(1.0, 2.0, 2.0), 3.0);
        assert_eq!(lerp(1.0, 2.0, -1.0), 0.0);
    }

    #[test]
    fn inverse_lerp_roundtrip() {
        let (min, max) = (-4.0, 12.0);
        for n in [-4.0, 0.0, 3.5, 12.0, 20.0] {
            assert!((lerp(min, max, inverse_lerp(min, max, n)) - n).abs() < EPSILON);
        }
    }

    #[test]
    fn remap_degenerate_input_range() {
        // Empty input range falls back to to_min via the inverse_lerp guard.
        assert_eq!(remap(5.0, 5.0, 0.0, 1.0, 5.0), 0.0);
    }

    #[test]
    fn smooth_lerp_is_slower_near_endpoints() {
        let early = smooth_lerp(0.0, 1.0, 0.1);
        let late = smooth_lerp(0.0, 1.0, 0.9);
        assert!(early < 0.1);
        assert!(late > 0.9);
    }
}
