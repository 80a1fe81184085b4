//! Small floating-point helpers shared by the vector layer.

use crate::mat4::Mat4;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use num_traits::Zero;

/// Finiteness check used by the approximate-equality implementations:
/// a value is finite if every component is zero or a normal float.
pub trait IsFinite {
    fn is_finite(&self) -> bool;
}

impl IsFinite for f32 {
    fn is_finite(&self) -> bool {
        self.is_normal() || self.is_zero()
    }
}

impl IsFinite for Vec2 {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl IsFinite for Vec3 {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl IsFinite for Vec4 {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl IsFinite for Mat4 {
    fn is_finite(&self) -> bool {
        self.rows().into_iter().all(|row| row.is_finite())
    }
}

/// Maps -0.0 to +0.0 and leaves everything else unchanged. Keeps normalized
/// zero vectors bit-identical to [`Vec2::zero()`] and friends.
pub fn force_positive_zero(x: f32) -> f32 {
    if x.is_zero() { 0.0 } else { x }
}

/// Like [`f32::signum`], but returns 0.0 for zero.
pub fn sign_zero(x: f32) -> f32 {
    if x.is_zero() { 0.0 } else { x.signum() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_is_finite() {
        assert!(IsFinite::is_finite(&0.0_f32));
        assert!(IsFinite::is_finite(&-1.5_f32));
        assert!(!IsFinite::is_finite(&f32::NAN));
        assert!(!IsFinite::is_finite(&f32::INFINITY));
    }

    #[test]
    fn vec_is_finite() {
        assert!(Vec3 { x: 1.0, y: 2.0, z: 3.0 }.is_finite());
        assert!(!Vec3 { x: 1.0, y: f32::NAN, z: 3.0 }.is_finite());
        assert!(!Vec2 { x: f32::INFINITY, y: 0.0 }.is_finite());
    }

    #[test]
    fn force_positive_zero_flips_negative_zero() {
        assert_eq!(force_positive_zero(-0.0).to_bits(), 0.0_f32.to_bits());
        assert_eq!(force_positive_zero(-2.5), -2.5);
    }

    #[test]
    fn sign_zero_preserves_zero() {
        assert_eq!(sign_zero(0.0), 0.0);
        assert_eq!(sign_zero(-0.0), 0.0);
        assert_eq!(sign_zero(3.0), 1.0);
        assert_eq!(sign_zero(-0.1), -1.0);
    }
}
