//! The 4x4 matrix and its affine/camera/projection builders.

use crate::vec3::Vec3;
use crate::vec4::Vec4;
use crate::EPSILON;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, DivAssign, Mul, MulAssign};

/// A 4x4 matrix of 32-bit floats for transforming 3D points in homogeneous
/// coordinates.
///
/// Element names are row letter then column letter, with rows and columns
/// both named x, y, z, w:
/// ```text
/// | xx xy xz xw |
/// | yx yy yz yw |
/// | zx zy zz zw |
/// | wx wy wz ww |
/// ```
/// The algebra is column-vector, matrix on the left: `v' = M * v`, so the
/// translation of an affine transform lives in the fourth COLUMN
/// (`xw`, `yw`, `zw`) and transforms compose right-to-left
/// (`projection * view * model`).
///
/// Every builder produces a fully-initialized matrix; there are no runtime
/// error paths. Degenerate input (a zero rotation axis, `far == near`,
/// colinear look-at vectors) either flows through the vector layer's
/// zero-guards or produces `Inf`/`NaN` entries; validation is the caller's
/// responsibility. See the individual builders.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat4 {
    pub xx: f32,
    pub xy: f32,
    pub xz: f32,
    pub xw: f32,
    pub yx: f32,
    pub yy: f32,
    pub yz: f32,
    pub yw: f32,
    pub zx: f32,
    pub zy: f32,
    pub zz: f32,
    pub zw: f32,
    pub wx: f32,
    pub wy: f32,
    pub wz: f32,
    pub ww: f32,
}

impl Mat4 {
    /// Creates an identity matrix.
    pub fn one() -> Mat4 {
        Mat4 {
            xx: 1.0,
            yy: 1.0,
            zz: 1.0,
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// Creates a matrix with all 16 elements set to 0.
    pub fn zero() -> Mat4 {
        Mat4 {
            xx: 0.0,
            xy: 0.0,
            xz: 0.0,
            xw: 0.0,
            yx: 0.0,
            yy: 0.0,
            yz: 0.0,
            yw: 0.0,
            zx: 0.0,
            zy: 0.0,
            zz: 0.0,
            zw: 0.0,
            wx: 0.0,
            wy: 0.0,
            wz: 0.0,
            ww: 0.0,
        }
    }

    /// Creates a translation matrix.
    ///
    /// ```text
    /// | 1 0 0 v.x |
    /// | 0 1 0 v.y |
    /// | 0 0 1 v.z |
    /// | 0 0 0 1   |
    /// ```
    pub fn translation(v: Vec3) -> Mat4 {
        Mat4::one().translated(v)
    }

    /// Creates a diagonal scale matrix from `v`, with 1.0 in the
    /// bottom-right.
    pub fn scaling(v: Vec3) -> Mat4 {
        Mat4 {
            xx: v.x,
            yy: v.y,
            zz: v.z,
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// Creates a rotation matrix of `radians` around `axis` (Rodrigues
    /// form). The axis is normalised internally; a zero axis degenerates
    /// through the normalisation zero-guard to a matrix that collapses the
    /// rotated block rather than erroring.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    ///
    /// let rot = Mat4::rotation(std::f32::consts::FRAC_PI_2, Vec3::up());
    /// let v = rot * Vec3::right();
    /// assert!(v.almost_eq(-Vec3::forward()));
    /// ```
    pub fn rotation(radians: f32, axis: Vec3) -> Mat4 {
        let Vec3 { x, y, z } = axis.normed();
        let c = radians.cos();
        let s = radians.sin();
        let t = 1.0 - c;
        Mat4 {
            xx: t * x * x + c,
            xy: t * x * y - s * z,
            xz: t * x * z + s * y,
            yx: t * x * y + s * z,
            yy: t * y * y + c,
            yz: t * y * z - s * x,
            zx: t * x * z - s * y,
            zy: t * y * z + s * x,
            zz: t * z * z + c,
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// Returns `self` with the translation column (`xw`, `yw`, `zw`)
    /// overwritten by `v`, leaving every other element unchanged.
    ///
    /// This is a direct slot overwrite, NOT a matrix multiply: whatever
    /// translation `self` already carried is discarded, and the linear block
    /// does not act on `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    ///
    /// let v = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    /// assert_eq!(Mat4::one().translated(v) * Vec3::zero(), v);
    /// // A second call discards the first translation entirely.
    /// let m = Mat4::one().translated(v).translated(Vec3::zero());
    /// assert_eq!(m, Mat4::one());
    /// ```
    pub fn translated(mut self, v: Vec3) -> Mat4 {
        self.xw = v.x;
        self.yw = v.y;
        self.zw = v.z;
        self
    }

    /// Builds the diagonal scale matrix from `v` and pre-multiplies it:
    /// `scaling(v) * self`. Repeated calls therefore compose left-to-right
    /// in scale-then-existing order, and any translation already in `self`
    /// gets scaled too.
    pub fn scaled(self, v: Vec3) -> Mat4 {
        Mat4::scaling(v) * self
    }

    /// Pre-multiplies the upper-left 3x3 block of `self` by the Rodrigues
    /// rotation of `radians` around the normalised `axis`, leaving the
    /// translation column and bottom row untouched.
    pub fn rotated(self, radians: f32, axis: Vec3) -> Mat4 {
        let r = Mat4::rotation(radians, axis);
        Mat4 {
            xx: r.xx * self.xx + r.xy * self.yx + r.xz * self.zx,
            xy: r.xx * self.xy + r.xy * self.yy + r.xz * self.zy,
            xz: r.xx * self.xz + r.xy * self.yz + r.xz * self.zz,
            yx: r.yx * self.xx + r.yy * self.yx + r.yz * self.zx,
            yy: r.yx * self.xy + r.yy * self.yy + r.yz * self.zy,
            yz: r.yx * self.xz + r.yy * self.yz + r.yz * self.zz,
            zx: r.zx * self.xx + r.zy * self.yx + r.zz * self.zx,
            zy: r.zx * self.xy + r.zy * self.yy + r.zz * self.zy,
            zz: r.zx * self.xz + r.zy * self.yz + r.zz * self.zz,
            ..self
        }
    }

    /// The canonical TRS model transform: scale, then rotate, then
    /// translate, in exactly that order starting from the identity.
    ///
    /// Equivalent to
    /// `Mat4::one().scaled(scale).rotated(radians, axis).translated(translation)`.
    pub fn model(translation: Vec3, scale: Vec3, axis: Vec3, radians: f32) -> Mat4 {
        Mat4::one()
            .scaled(scale)
            .rotated(radians, axis)
            .translated(translation)
    }

    /// A right-handed perspective projection from a vertical field of view
    /// in radians, an aspect ratio, and near/far clip planes. Looks down
    /// -z; depth maps to [-1, 1].
    ///
    /// `far == near` is undefined: the depth terms divide by `far - near`
    /// and the result carries `Inf`/`NaN` entries. Callers must guarantee
    /// `far != near`.
    pub fn perspective_rh(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fovy / 2.0).tan();
        Mat4 {
            xx: f / aspect,
            yy: f,
            zz: -(far + near) / (far - near),
            zw: -(2.0 * far * near) / (far - near),
            wz: -1.0,
            ..Mat4::zero()
        }
    }

    /// The left-handed counterpart of [`perspective_rh`](Mat4::perspective_rh):
    /// looks down +z, differing only in the sign of the depth-mapping terms
    /// (`zz`, `wz`). The same `far == near` caveat applies.
    pub fn perspective_lh(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fovy / 2.0).tan();
        Mat4 {
            xx: f / aspect,
            yy: f,
            zz: (far + near) / (far - near),
            zw: -(2.0 * far * near) / (far - near),
            wz: 1.0,
            ..Mat4::zero()
        }
    }

    /// Alias for [`perspective_rh`](Mat4::perspective_rh).
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(fovy, aspect, near, far)
    }

    /// A right-handed view matrix from an eye position, a target point, and
    /// an up vector, via Gram-Schmidt basis construction: the camera looks
    /// down -z in view space.
    ///
    /// If `target - eye` is colinear with `up`, the side vector degenerates
    /// to zero through the normalisation zero-guard and the resulting basis
    /// is not usable; callers must supply a non-colinear up vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    ///
    /// let eye = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    /// let view = Mat4::look_at_rh(eye, Vec3::zero(), Vec3::up());
    /// // The eye maps to the view-space origin.
    /// assert!((view * eye).almost_eq(Vec3::zero()));
    /// ```
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let f = (target - eye).normed();
        let s = f.cross(up).normed();
        let u = s.cross(f);
        Mat4 {
            xx: s.x,
            xy: s.y,
            xz: s.z,
            xw: -s.dot(eye),
            yx: u.x,
            yy: u.y,
            yz: u.z,
            yw: -u.dot(eye),
            zx: -f.x,
            zy: -f.y,
            zz: -f.z,
            zw: f.dot(eye),
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// The left-handed counterpart of [`look_at_rh`](Mat4::look_at_rh): the
    /// camera looks down +z in view space, with the side vector taken as
    /// `cross(up, forward)` and true-up as `cross(forward, side)`. The same
    /// colinear-input caveat applies.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let f = (target - eye).normed();
        let s = up.cross(f).normed();
        let u = f.cross(s);
        Mat4 {
            xx: s.x,
            xy: s.y,
            xz: s.z,
            xw: -s.dot(eye),
            yx: u.x,
            yy: u.y,
            yz: u.z,
            yw: -u.dot(eye),
            zx: f.x,
            zy: f.y,
            zz: f.z,
            zw: -f.dot(eye),
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// Alias for [`look_at_rh`](Mat4::look_at_rh).
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(eye, target, up)
    }

    /// An orthographic projection mapping `[left, right] x [bottom, top]`
    /// onto the `[-1, 1]` square. There are deliberately no near/far
    /// parameters: the depth scale is fixed at -1 with no depth translation,
    /// which suffices for 2D/UI rendering where depth is already in
    /// normalized units.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    ///
    /// let m = Mat4::ortho(0.0, 800.0, 0.0, 600.0);
    /// let centre = m * Vec3 { x: 400.0, y: 300.0, z: 0.0 };
    /// assert!(centre.almost_eq(Vec3::zero()));
    /// ```
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
        Mat4 {
            xx: 2.0 / (right - left),
            xw: -(right + left) / (right - left),
            yy: 2.0 / (top - bottom),
            yw: -(top + bottom) / (top - bottom),
            zz: -1.0,
            ww: 1.0,
            ..Mat4::zero()
        }
    }

    /// The rows of the matrix, top to bottom.
    pub fn rows(&self) -> [Vec4; 4] {
        [
            Vec4 { x: self.xx, y: self.xy, z: self.xz, w: self.xw },
            Vec4 { x: self.yx, y: self.yy, z: self.yz, w: self.yw },
            Vec4 { x: self.zx, y: self.zy, z: self.zz, w: self.zw },
            Vec4 { x: self.wx, y: self.wy, z: self.wz, w: self.ww },
        ]
    }

    /// Creates a new matrix that is the transpose of this matrix.
    pub fn transposed(&self) -> Mat4 {
        Mat4 {
            xx: self.xx,
            xy: self.yx,
            xz: self.zx,
            xw: self.wx,
            yx: self.xy,
            yy: self.yy,
            yz: self.zy,
            yw: self.wy,
            zx: self.xz,
            zy: self.yz,
            zz: self.zz,
            zw: self.wz,
            wx: self.xw,
            wy: self.yw,
            wz: self.zw,
            ww: self.ww,
        }
    }

    /// Compares two matrices for approximate equality, element-wise within
    /// [`EPSILON`](crate::EPSILON).
    pub fn almost_eq(&self, rhs: Mat4) -> bool {
        let a = self.rows();
        let b = rhs.rows();
        (0..4).all(|i| {
            f32::abs(a[i].x - b[i].x) < EPSILON
                && f32::abs(a[i].y - b[i].y) < EPSILON
                && f32::abs(a[i].z - b[i].z) < EPSILON
                && f32::abs(a[i].w - b[i].w) < EPSILON
        })
    }
}

impl One for Mat4 {
    fn one() -> Self {
        Self::one()
    }
}

impl Zero for Mat4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl Add<Mat4> for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Self::Output {
        Mat4 {
            xx: self.xx + rhs.xx,
            xy: self.xy + rhs.xy,
            xz: self.xz + rhs.xz,
            xw: self.xw + rhs.xw,
            yx: self.yx + rhs.yx,
            yy: self.yy + rhs.yy,
            yz: self.yz + rhs.yz,
            yw: self.yw + rhs.yw,
            zx: self.zx + rhs.zx,
            zy: self.zy + rhs.zy,
            zz: self.zz + rhs.zz,
            zw: self.zw + rhs.zw,
            wx: self.wx + rhs.wx,
            wy: self.wy + rhs.wy,
            wz: self.wz + rhs.wz,
            ww: self.ww + rhs.ww,
        }
    }
}

impl Mul<f32> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: f32) -> Self::Output {
        Mat4 {
            xx: rhs * self.xx,
            xy: rhs * self.xy,
            xz: rhs * self.xz,
            xw: rhs * self.xw,
            yx: rhs * self.yx,
            yy: rhs * self.yy,
            yz: rhs * self.yz,
            yw: rhs * self.yw,
            zx: rhs * self.zx,
            zy: rhs * self.zy,
            zz: rhs * self.zz,
            zw: rhs * self.zw,
            wx: rhs * self.wx,
            wy: rhs * self.wy,
            wz: rhs * self.wz,
            ww: rhs * self.ww,
        }
    }
}
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Mat4 {
    type Output = Mat4;

    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}
impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Transforms a 3D point in homogeneous coordinates with `w = 1`, returning
/// the x/y/z rows. No perspective divide is applied: use [`Mul<Vec4>`] and
/// divide by the resulting w when transforming through a projection matrix.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.xx * rhs.x + self.xy * rhs.y + self.xz * rhs.z + self.xw * 1.0,
            y: self.yx * rhs.x + self.yy * rhs.y + self.yz * rhs.z + self.yw * 1.0,
            z: self.zx * rhs.x + self.zy * rhs.y + self.zz * rhs.z + self.zw * 1.0,
        }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.xx * rhs.x + self.xy * rhs.y + self.xz * rhs.z + self.xw * rhs.w,
            y: self.yx * rhs.x + self.yy * rhs.y + self.yz * rhs.z + self.yw * rhs.w,
            z: self.zx * rhs.x + self.zy * rhs.y + self.zz * rhs.z + self.zw * rhs.w,
            w: self.wx * rhs.x + self.wy * rhs.y + self.wz * rhs.z + self.ww * rhs.w,
        }
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Mat4 {
            xx: self.xx * rhs.xx + self.xy * rhs.yx + self.xz * rhs.zx + self.xw * rhs.wx,
            xy: self.xx * rhs.xy + self.xy * rhs.yy + self.xz * rhs.zy + self.xw * rhs.wy,
            xz: self.xx * rhs.xz + self.xy * rhs.yz + self.xz * rhs.zz + self.xw * rhs.wz,
            xw: self.xx * rhs.xw + self.xy * rhs.yw + self.xz * rhs.zw + self.xw * rhs.ww,
            yx: self.yx * rhs.xx + self.yy * rhs.yx + self.yz * rhs.zx + self.yw * rhs.wx,
            yy: self.yx * rhs.xy + self.yy * rhs.yy + self.yz * rhs.zy + self.yw * rhs.wy,
            yz: self.yx * rhs.xz + self.yy * rhs.yz + self.yz * rhs.zz + self.yw * rhs.wz,
            yw: self.yx * rhs.xw + self.yy * rhs.yw + self.yz * rhs.zw + self.yw * rhs.ww,
            zx: self.zx * rhs.xx + self.zy * rhs.yx + self.zz * rhs.zx + self.zw * rhs.wx,
            zy: self.zx * rhs.xy + self.zy * rhs.yy + self.zz * rhs.zy + self.zw * rhs.wy,
            zz: self.zx * rhs.xz + self.zy * rhs.yz + self.zz * rhs.zz + self.zw * rhs.wz,
            zw: self.zx * rhs.xw + self.zy * rhs.yw + self.zz * rhs.zw + self.zw * rhs.ww,
            wx: self.wx * rhs.xx + self.wy * rhs.yx + self.wz * rhs.zx + self.ww * rhs.wx,
            wy: self.wx * rhs.xy + self.wy * rhs.yy + self.wz * rhs.zy + self.ww * rhs.wy,
            wz: self.wx * rhs.xz + self.wy * rhs.yz + self.wz * rhs.zz + self.ww * rhs.wz,
            ww: self.wx * rhs.xw + self.wy * rhs.yw + self.wz * rhs.zw + self.ww * rhs.ww,
        }
    }
}
impl MulAssign<Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::IsFinite;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn arbitrary() -> Mat4 {
        Mat4::model(
            Vec3 { x: 1.0, y: -2.0, z: 3.0 },
            Vec3 { x: 2.0, y: 0.5, z: 1.5 },
            Vec3 { x: 1.0, y: 2.0, z: -1.0 },
            0.7,
        )
    }

    // ==================== Construction & Composition ====================

    #[test]
    fn identity_law() {
        let m = arbitrary();
        assert!((Mat4::one() * m).almost_eq(m));
        assert!((m * Mat4::one()).almost_eq(m));
    }

    #[test]
    fn zero_annihilates() {
        let m = arbitrary();
        assert!((Mat4::zero() * m).almost_eq(Mat4::zero()));
        assert!((m + Mat4::zero()).almost_eq(m));
    }

    #[test]
    fn multiply_composes_translations() {
        // Index-convention check: under column-vector algebra, composing two
        // translation matrices adds the offsets.
        let a = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        let b = Vec3 { x: -4.0, y: 0.5, z: 2.0 };
        let composed = Mat4::translation(a) * Mat4::translation(b);
        assert!(composed.almost_eq(Mat4::translation(a + b)));
    }

    #[test]
    fn translated_moves_origin() {
        let v = Vec3 { x: 5.0, y: -6.0, z: 7.0 };
        assert_eq!(Mat4::one().translated(v) * Vec3::zero(), v);
    }

    #[test]
    fn translated_overwrites_previous_slot() {
        let a = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
        let b = Vec3 { x: -2.0, y: 3.0, z: 0.0 };
        let m = Mat4::one().translated(a).translated(b);
        assert_eq!(m * Vec3::zero(), b);
    }

    #[test]
    fn scale_then_translate_scenario() {
        let m = Mat4::one()
            .scaled(Vec3 { x: 2.0, y: 1.0, z: 1.0 })
            .translated(Vec3 { x: 1.0, y: 0.0, z: 0.0 });
        let p = m * Vec3 { x: 1.0, y: 0.0, z: 0.0 };
        assert_eq!(p, Vec3 { x: 3.0, y: 0.0, z: 0.0 });
    }

    #[test]
    fn scaled_premultiplies_existing_translation() {
        // scaling(v) * self scales whatever translation self already has.
        let m = Mat4::one()
            .translated(Vec3 { x: 1.0, y: 0.0, z: 0.0 })
            .scaled(Vec3 { x: 2.0, y: 1.0, z: 1.0 });
        assert_eq!(m * Vec3::zero(), Vec3 { x: 2.0, y: 0.0, z: 0.0 });
    }

    // ==================== Rotation ====================

    #[test]
    fn rotation_quarter_turn_about_y() {
        let rot = Mat4::rotation(FRAC_PI_2, Vec3::up());
        assert!((rot * Vec3::right()).almost_eq(-Vec3::forward()));
        assert!((rot * Vec3::forward()).almost_eq(Vec3::right()));
    }

    #[test]
    fn rotation_fixes_its_axis() {
        let axis = Vec3 { x: 1.0, y: 2.0, z: -0.5 };
        let rot = Mat4::rotation(1.2, axis);
        assert!((rot * axis).almost_eq(axis));
    }

    #[test]
    fn rotation_normalises_axis() {
        let a = Mat4::rotation(0.8, Vec3::up());
        let b = Mat4::rotation(0.8, Vec3::up() * 5.0);
        assert!(a.almost_eq(b));
    }

    #[test]
    fn rotated_leaves_translation_untouched() {
        let v = Vec3 { x: 3.0, y: 4.0, z: 5.0 };
        let m = Mat4::one().translated(v).rotated(1.0, Vec3::forward());
        assert_eq!(m.xw, v.x);
        assert_eq!(m.yw, v.y);
        assert_eq!(m.zw, v.z);
        assert_eq!(m.ww, 1.0);
    }

    #[test]
    fn rotation_preserves_lengths() {
        let rot = Mat4::rotation(2.3, Vec3 { x: 0.3, y: -1.0, z: 0.5 });
        let v = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        assert!(((rot * v).len() - v.len()).abs() < EPSILON * 10.0);
    }

    #[test]
    fn model_is_scale_rotate_translate() {
        let t = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        let s = Vec3 { x: 2.0, y: 1.0, z: 1.0 };
        let axis = Vec3::up();
        let m = Mat4::model(t, s, axis, FRAC_PI_2);
        assert!(m.almost_eq(
            Mat4::one()
                .scaled(s)
                .rotated(FRAC_PI_2, axis)
                .translated(t)
        ));
        // p = (1,0,0): scale -> (2,0,0); rotate about +y -> (0,0,-2);
        // translate -> (1,2,1).
        let p = m * Vec3 { x: 1.0, y: 0.0, z: 0.0 };
        assert!(p.almost_eq(Vec3 { x: 1.0, y: 2.0, z: 1.0 }));
    }

    // ==================== Projection & View ====================

    #[test]
    fn perspective_rh_maps_near_and_far_planes() {
        // fovy = 90 degrees -> focal length 1.
        let m = Mat4::perspective_rh(FRAC_PI_2, 1.0, 1.0, 3.0);
        let near = m * Vec4 { x: 0.0, y: 0.0, z: -1.0, w: 1.0 };
        assert!((near.z / near.w - -1.0).abs() < EPSILON);
        let far = m * Vec4 { x: 0.0, y: 0.0, z: -3.0, w: 1.0 };
        assert!((far.z / far.w - 1.0).abs() < EPSILON);
        // Depth-mapping term sign.
        assert_eq!(m.wz, -1.0);
    }

    #[test]
    fn perspective_lh_flips_depth_sign() {
        let m = Mat4::perspective_lh(FRAC_PI_2, 1.0, 1.0, 3.0);
        let near = m * Vec4 { x: 0.0, y: 0.0, z: 1.0, w: 1.0 };
        assert!((near.z / near.w - -1.0).abs() < EPSILON);
        let far = m * Vec4 { x: 0.0, y: 0.0, z: 3.0, w: 1.0 };
        assert!((far.z / far.w - 1.0).abs() < EPSILON);
        assert_eq!(m.wz, 1.0);
    }

    #[test]
    fn perspective_aspect_scales_x() {
        let m = Mat4::perspective(FRAC_PI_4, 2.0, 0.1, 100.0);
        assert!((m.xx - m.yy / 2.0).abs() < EPSILON);
        assert!(m.almost_eq(Mat4::perspective_rh(FRAC_PI_4, 2.0, 0.1, 100.0)));
    }

    #[test]
    fn perspective_equal_planes_is_non_finite() {
        // far == near divides by zero; the contract is Inf/NaN, not a panic.
        let m = Mat4::perspective_rh(FRAC_PI_2, 1.0, 1.0, 1.0);
        assert!(!m.is_finite());
    }

    #[test]
    fn look_at_rh_maps_eye_to_origin() {
        let eye = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        let m = Mat4::look_at_rh(eye, Vec3::zero(), Vec3::up());
        assert!((m * eye).almost_eq(Vec3::zero()));
    }

    #[test]
    fn look_at_rh_maps_forward_to_negative_z() {
        let eye = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        let fwd = Vec3 { x: 0.0, y: 0.0, z: -1.0 };
        let m = Mat4::look_at_rh(eye, eye + fwd, Vec3::up());
        let target = m * (eye + fwd * 5.0);
        assert!(target.almost_eq(Vec3 { x: 0.0, y: 0.0, z: -5.0 }));
    }

    #[test]
    fn look_at_lh_maps_forward_to_positive_z() {
        let eye = Vec3 { x: -2.0, y: 1.0, z: 0.0 };
        let fwd = Vec3::forward();
        let m = Mat4::look_at_lh(eye, eye + fwd, Vec3::up());
        assert!((m * eye).almost_eq(Vec3::zero()));
        let target = m * (eye + fwd * 4.0);
        assert!(target.almost_eq(Vec3 { x: 0.0, y: 0.0, z: 4.0 }));
    }

    #[test]
    fn look_at_colinear_up_degenerates_to_zero_side() {
        // Forward parallel to up: the side vector normalises to zero rather
        // than NaN. Documented degeneracy, not an error.
        let eye = Vec3::zero();
        let m = Mat4::look_at_rh(eye, Vec3::up(), Vec3::up());
        assert_eq!(m.xx, 0.0);
        assert_eq!(m.xy, 0.0);
        assert_eq!(m.xz, 0.0);
    }

    #[test]
    fn ortho_boundary_and_fixed_depth() {
        let m = Mat4::ortho(-1.0, 1.0, -1.0, 1.0);
        let p = m * Vec3 { x: 1.0, y: 1.0, z: 0.0 };
        assert_eq!(p, Vec3 { x: 1.0, y: 1.0, z: 0.0 });
        // Depth scale is fixed at -1: z just flips sign.
        let q = m * Vec3 { x: 0.3, y: -0.5, z: 2.0 };
        assert!(q.almost_eq(Vec3 { x: 0.3, y: -0.5, z: -2.0 }));
    }

    #[test]
    fn ortho_asymmetric_viewport() {
        let m = Mat4::ortho(0.0, 800.0, 0.0, 600.0);
        assert!((m * Vec3 { x: 0.0, y: 0.0, z: 0.0 })
            .almost_eq(Vec3 { x: -1.0, y: -1.0, z: 0.0 }));
        assert!((m * Vec3 { x: 800.0, y: 600.0, z: 0.0 })
            .almost_eq(Vec3 { x: 1.0, y: 1.0, z: 0.0 }));
    }

    // ==================== Misc ====================

    #[test]
    fn transpose_is_involutive() {
        let m = arbitrary();
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(Mat4::one().transposed(), Mat4::one());
    }

    #[test]
    fn scalar_ops() {
        let m = Mat4::one() * 3.0;
        assert_eq!(m.xx, 3.0);
        assert!((m / 3.0).almost_eq(Mat4::one()));
        assert!((3.0 * Mat4::one()).almost_eq(m));
    }

    #[test]
    fn vec4_transform_matches_vec3_for_affine() {
        let m = arbitrary();
        let p = Vec3 { x: 0.5, y: -1.5, z: 2.0 };
        let q = m * p.extended(1.0);
        assert!(q.xyz().almost_eq(m * p));
        assert!((q.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn num_traits_impls() {
        assert!(<Mat4 as One>::one().almost_eq(Mat4::one()));
        assert!(<Mat4 as Zero>::zero().is_zero());
        assert!(!Mat4::one().is_zero());
    }

    #[test]
    fn mat4_serde_roundtrip() {
        let m = arbitrary();
        let bytes = bincode::serialize(&m).unwrap();
        let back: Mat4 = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, m);
    }
}
