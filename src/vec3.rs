//! 3D floating-point and integer vectors.

use crate::float::{self, IsFinite};
use crate::scalar::lerp;
use crate::vec4::Vec4;
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

/// A 3D vector with 32-bit floating point coordinates.
///
/// The axes follow the usual 3D convention: x right, y up, z forward. Which
/// direction "forward" points relative to the screen is a handedness choice
/// made by the camera builders on [`Mat4`](crate::mat4::Mat4), not by the
/// vector type.
///
/// Finite vectors compare equal if their components differ by less than
/// [`EPSILON`](crate::EPSILON); non-finite vectors compare exactly.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z
        }
    }
}
impl Eq for Vec3 {}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

impl Vec3 {
    /// Returns a unit vector along the positive x-axis.
    #[must_use]
    pub fn right() -> Vec3 {
        Vec3 { x: 1.0, y: 0.0, z: 0.0 }
    }
    /// Returns a unit vector along the positive y-axis.
    #[must_use]
    pub fn up() -> Vec3 {
        Vec3 { x: 0.0, y: 1.0, z: 0.0 }
    }
    /// Returns a unit vector along the positive z-axis.
    #[must_use]
    pub fn forward() -> Vec3 {
        Vec3 { x: 0.0, y: 0.0, z: 1.0 }
    }
    #[must_use]
    pub fn one() -> Vec3 {
        Vec3 { x: 1.0, y: 1.0, z: 1.0 }
    }
    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3 { x: 0.0, y: 0.0, z: 0.0 }
    }
    /// Creates a new vector with all components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
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
    pub fn normed(&self) -> Vec3 {
        let len = self.len();
        let mut rv = if len == 0.0 { Vec3::zero() } else { *self / len };
        rv.x = float::force_positive_zero(rv.x);
        rv.y = float::force_positive_zero(rv.y);
        rv.z = float::force_positive_zero(rv.z);
        rv
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the 3D cross product, perpendicular to both operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::forward());
    /// let a = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    /// let b = Vec3 { x: -2.0, y: 0.5, z: 4.0 };
    /// assert!(a.cross(b).dot(a).abs() < EPSILON);
    /// assert!(a.cross(b).dot(b).abs() < EPSILON);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - other.y * self.z,
            y: self.z * other.x - other.z * self.x,
            z: self.x * other.y - other.x * self.y,
        }
    }

    /// Performs a component-wise (Hadamard) multiplication of two vectors.
    #[must_use]
    pub fn component_wise(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    #[must_use]
    pub fn dist(&self, other: Vec3) -> f32 {
        (*self - other).len()
    }

    #[must_use]
    pub fn dist_squared(&self, other: Vec3) -> f32 {
        (*self - other).len_squared()
    }

    /// A linear interpolation from `self` to `to`; unclamped, so `t` outside
    /// `[0, 1]` extrapolates.
    #[must_use]
    pub fn lerp(&self, to: Vec3, t: f32) -> Vec3 {
        Vec3 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            z: lerp(self.z, to.z, t),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vec3 {
        Vec3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`](crate::EPSILON).
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Extends to a [`Vec4`] with the given w component.
    #[must_use]
    pub fn extended(&self, w: f32) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }

    /// Converts to a [`Vec3i`] by truncating each component toward zero.
    #[must_use]
    pub fn as_vec3i(&self) -> Vec3i {
        Vec3i {
            x: self.x as i32,
            y: self.y as i32,
            z: self.z as i32,
        }
    }

    /// Converts to a [`Vec3i`] by rounding each component to the nearest
    /// integer.
    #[must_use]
    pub fn as_vec3i_lossy(&self) -> Vec3i {
        Vec3i {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            z: self.z.round() as i32,
        }
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
impl From<[i32; 3]> for Vec3 {
    fn from(value: [i32; 3]) -> Self {
        Vec3 {
            x: value[0] as f32,
            y: value[1] as f32,
            z: value[2] as f32,
        }
    }
}
impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Add::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// Scalar division scales by the reciprocal; dividing by exactly 0.0 returns
/// the zero vector rather than propagating `Inf`/`NaN`.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        let recip = if rhs == 0.0 { 0.0 } else { 1.0 / rhs };
        Vec3 {
            x: self.x * recip,
            y: self.y * recip,
            z: self.z * recip,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Samples each component uniformly from [0, 1).
impl Distribution<Vec3> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3 {
            x: rng.gen(),
            y: rng.gen(),
            z: rng.gen(),
        }
    }
}

/// A 3D vector with integer coordinates, for voxel/grid addressing.
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    #[must_use]
    pub fn one() -> Vec3i {
        Vec3i { x: 1, y: 1, z: 1 }
    }
    #[must_use]
    pub fn zero() -> Vec3i {
        Vec3i { x: 0, y: 0, z: 0 }
    }
    #[must_use]
    pub fn splat(value: i32) -> Vec3i {
        Vec3i {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Widens each component exactly to a [`Vec3`].
    #[must_use]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3 {
            x: self.x as f32,
            y: self.y as f32,
            z: self.z as f32,
        }
    }
}

impl From<Vec3i> for Vec3 {
    fn from(value: Vec3i) -> Self {
        value.as_vec3()
    }
}
impl From<[i32; 3]> for Vec3i {
    fn from(value: [i32; 3]) -> Self {
        Vec3i {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
impl From<Vec3i> for [i32; 3] {
    fn from(value: Vec3i) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Zero for Vec3i {
    fn zero() -> Self {
        Vec3i::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vec3i::zero()
    }
}

impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl Sub<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Mul<i32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: i32) -> Self::Output {
        Vec3i {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Neg for Vec3i {
    type Output = Vec3i;

    fn neg(self) -> Self::Output {
        Vec3i {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
