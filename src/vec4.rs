//! 4D floating-point and integer vectors (homogeneous coordinates).

use crate::float::{self, IsFinite};
use crate::scalar::lerp;
use crate::vec3::Vec3;
use crate::EPSILON;
use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 4D vector with 32-bit floating point coordinates, mostly useful as the
/// homogeneous-coordinate representation of 3D points (`w = 1`) and
/// directions (`w = 0`) under [`Mat4`](crate::mat4::Mat4).
///
/// Finite vectors compare equal if their components differ by less than
/// [`EPSILON`](crate::EPSILON); non-finite vectors compare exactly.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
                && (self.w - other.w).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
        }
    }
}
impl Eq for Vec4 {}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
        self.w.to_bits().hash(state);
    }
}

impl Vec4 {
    #[must_use]
    pub fn one() -> Vec4 {
        Vec4 { x: 1.0, y: 1.0, z: 1.0, w: 1.0 }
    }
    #[must_use]
    pub fn zero() -> Vec4 {
        Vec4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 }
    }
    #[must_use]
    pub fn splat(v: f32) -> Vec4 {
        Vec4 { x: v, y: v, z: v, w: v }
    }

    /// The x/y/z components, dropping w.
    #[must_use]
    pub fn xyz(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector. A zero-length vector normalises to the zero vector; -0.0
    /// components are forced to +0.0.
    #[must_use]
    pub fn normed(&self) -> Vec4 {
        let len = self.len();
        let mut rv = if len == 0.0 { Vec4::zero() } else { *self / len };
        rv.x = float::force_positive_zero(rv.x);
        rv.y = float::force_positive_zero(rv.y);
        rv.z = float::force_positive_zero(rv.z);
        rv.w = float::force_positive_zero(rv.w);
        rv
    }

    #[must_use]
    pub fn dot(&self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Performs a component-wise (Hadamard) multiplication of two vectors.
    #[must_use]
    pub fn component_wise(&self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w,
        }
    }

    #[must_use]
    pub fn dist(&self, other: Vec4) -> f32 {
        (*self - other).len()
    }

    #[must_use]
    pub fn dist_squared(&self, other: Vec4) -> f32 {
        (*self - other).len_squared()
    }

    /// A linear interpolation from `self` to `to`; unclamped, so `t` outside
    /// `[0, 1]` extrapolates.
    #[must_use]
    pub fn lerp(&self, to: Vec4, t: f32) -> Vec4 {
        Vec4 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            z: lerp(self.z, to.z, t),
            w: lerp(self.w, to.w, t),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vec4 {
        Vec4 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
            w: self.w.abs(),
        }
    }

    pub fn almost_eq(&self, rhs: Vec4) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Converts to a [`Vec4i`] by truncating each component toward zero.
    #[must_use]
    pub fn as_vec4i(&self) -> Vec4i {
        Vec4i {
            x: self.x as i32,
            y: self.y as i32,
            z: self.z as i32,
            w: self.w as i32,
        }
    }
}

impl Zero for Vec4 {
    fn zero() -> Self {
        Vec4::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Vec4 {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}
impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
            write!(f, ", {0:.1$}", self.w, p)?;
        } else {
            write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        *self = *self + rhs;
    }
}
impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        *self = *self - rhs;
    }
}

impl Sum<Vec4> for Vec4 {
    fn sum<I: Iterator<Item = Vec4>>(iter: I) -> Self {
        iter.fold(Vec4::zero(), Add::add)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Scalar division scales by the reciprocal; dividing by exactly 0.0 returns
/// the zero vector rather than propagating `Inf`/`NaN`.
impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        let recip = if rhs == 0.0 { 0.0 } else { 1.0 / rhs };
        self * recip
    }
}
impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

/// Samples each component uniformly from [0, 1).
impl Distribution<Vec4> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec4 {
        Vec4 {
            x: rng.gen(),
            y: rng.gen(),
            z: rng.gen(),
            w: rng.gen(),
        }
    }
}

/// A 4D vector with integer coordinates.
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec4i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Vec4i {
    #[must_use]
    pub fn one() -> Vec4i {
        Vec4i { x: 1, y: 1, z: 1, w: 1 }
    }
    #[must_use]
    pub fn zero() -> Vec4i {
        Vec4i { x: 0, y: 0, z: 0, w: 0 }
    }
    #[must_use]
    pub fn splat(value: i32) -> Vec4i {
        Vec4i {
            x: value,
            y: value,
            z: value,
            w: value,
        }
    }

    /// Widens each component exactly to a [`Vec4`].
    #[must_use]
    pub fn as_vec4(&self) -> Vec4 {
        Vec4 {
            x: self.x as f32,
            y: self.y as f32,
            z: self.z as f32,
            w: self.w as f32,
        }
    }
}

impl From<Vec4i> for Vec4 {
    fn from(value: Vec4i) -> Self {
        value.as_vec4()
    }
}
impl From<[i32; 4]> for Vec4i {
    fn from(value: [i32; 4]) -> Self {
        Vec4i {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}
impl From<Vec4i> for [i32; 4] {
    fn from(value: Vec4i) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl Zero for Vec4i {
    fn zero() -> Self {
        Vec4i::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vec4i::zero()
    }
}

impl fmt::Display for Vec4i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Add<Vec4i> for Vec4i {
    type Output = Vec4i;

    fn add(self, rhs: Vec4i) -> Self::Output {
        Vec4i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl Sub<Vec4i> for Vec4i {
    type Output = Vec4i;

    fn sub(self, rhs: Vec4i) -> Self::Output {
        Vec4i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl Mul<i32> for Vec4i {
    type Output = Vec4i;

    fn mul(self, rhs: i32) -> Self::Output {
        Vec4i {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Neg for Vec4i {
    type Output = Vec4i;

    fn neg(self) -> Self::Output {
        Vec4i {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
