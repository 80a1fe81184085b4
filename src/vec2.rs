//! 2D floating-point and integer vectors.

use crate::float::{self, IsFinite};
use crate::scalar::lerp;
use crate::EPSILON;
use itertools::{Itertools, Product};
use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::Range;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use tracing::warn;

/// A 2D vector with 32-bit floating point coordinates.
///
/// [`Vec2`] is a pure value type: every operation returns a new vector.
/// It provides the usual arithmetic operators plus normalisation, dot
/// product, interpolation, and distance utilities.
///
/// # Examples
///
/// ```
/// use pxmath::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality and ordering
/// Two finite vectors compare equal if their components differ by less than
/// [`EPSILON`](crate::EPSILON); non-finite vectors compare exactly. The [`Ord`]
/// implementation provides a stable, deterministic ordering (x first, then y,
/// with a [`total_cmp`](f32::total_cmp) fallback for `NaN`) so vectors can
/// live in `BTreeMap`/`BTreeSet`; it has no particular geometric meaning.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if (self.x - other.x).abs() < EPSILON {
            return self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            });
        }
        if let Some(o) = self.x.partial_cmp(&other.x) {
            o
        } else {
            warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
            match self.x.total_cmp(&other.x) {
                Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                    warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                    self.y.total_cmp(&other.y)
                }),
                o => o,
            }
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    ///
    /// Note: [`Vec2`] follows the pixel-space convention where y increases
    /// downward. The 3D [`Vec3`](crate::vec3::Vec3) axes are y-up.
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// The unit vector at the given angle in radians, measured
    /// counterclockwise from the positive x-axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// assert!(Vec2::from_angle(0.0).almost_eq(Vec2::right()));
    /// let diag = Vec2::from_angle(std::f32::consts::FRAC_PI_4);
    /// assert!((diag.x - diag.y).abs() < EPSILON);
    /// ```
    #[must_use]
    pub fn from_angle(radians: f32) -> Vec2 {
        Vec2 {
            x: radians.cos(),
            y: radians.sin(),
        }
    }

    /// The angle of this vector in radians, via `atan2(y, x)`.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths, to
    /// avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector.
    ///
    /// A zero-length vector normalises to the zero vector rather than
    /// dividing by zero; -0.0 components are forced to +0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let v = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
    /// assert_eq!(Vec2::zero().normed(), Vec2::zero());
    /// ```
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let len = self.len();
        let mut rv = if len == 0.0 { Vec2::zero() } else { *self / len };
        rv.x = float::force_positive_zero(rv.x);
        rv.y = float::force_positive_zero(rv.y);
        rv
    }

    /// Returns the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns an orthogonal vector, rotated 90 degrees clockwise from this
    /// one (components swapped, new y negated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let v = Vec2 { x: 3.0, y: 2.0 };
    /// assert_eq!(v.orthog(), Vec2 { x: 2.0, y: -3.0 });
    /// assert_eq!(v.dot(v.orthog()), 0.0);
    /// ```
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    /// Returns the perpendicular of the difference `self - other`:
    /// `(-(self.y - other.y), self.x - other.x)`.
    ///
    /// NOTE: this is NOT the scalar 2D cross product (see
    /// [`wedge`](Vec2::wedge)). Given two points of an edge it produces the
    /// edge's normal direction, which is what 2D normal/tangent construction
    /// wants.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let p = Vec2 { x: 2.0, y: 1.0 };
    /// let q = Vec2 { x: 0.0, y: 0.0 };
    /// let n = p.cross(q);
    /// // Perpendicular to the edge direction p - q.
    /// assert_eq!(n.dot(p - q), 0.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: -(self.y - other.y),
            y: self.x - other.x,
        }
    }

    /// Returns the scalar 2D cross product (wedge product) of two vectors:
    /// positive if `other` is counterclockwise from `self` in y-down pixel
    /// space.
    #[must_use]
    pub fn wedge(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Performs a component-wise (Hadamard) multiplication of two vectors.
    /// Distinct from [`dot`](Vec2::dot).
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.component_wise(v2), Vec2 { x: 8.0, y: 15.0 });
    /// ```
    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Returns the distance between two points.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (*self - other).len()
    }

    /// Returns the squared distance between two points.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (*self - other).len_squared()
    }

    /// A linear interpolation from `self` to `to`. Deliberately unclamped:
    /// `t` outside `[0, 1]` extrapolates along the same line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let a = Vec2::zero();
    /// let b = Vec2 { x: 10.0, y: 20.0 };
    /// assert_eq!(a.lerp(b, 0.5), Vec2 { x: 5.0, y: 10.0 });
    /// assert_eq!(a.lerp(b, 2.0), Vec2 { x: 20.0, y: 40.0 });
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`](crate::EPSILON).
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Converts to a [`Vec2i`] by truncating each component toward zero
    /// (C-style cast semantics).
    #[must_use]
    pub fn as_vec2i(&self) -> Vec2i {
        Vec2i {
            x: self.x as i32,
            y: self.y as i32,
        }
    }

    /// Converts to a [`Vec2i`] by rounding each component to the nearest
    /// integer.
    #[must_use]
    pub fn as_vec2i_lossy(&self) -> Vec2i {
        Vec2i {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }

    /// Compares two vectors based on their squared length, falling back to
    /// [`total_cmp`](f32::total_cmp) (with a warning) if a `NaN` component
    /// defeats [`partial_cmp`](f32::partial_cmp).
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }

    /// Compares two vectors based on their distance from a given origin
    /// point, with the same `NaN` fallback as [`cmp_by_length`](Vec2::cmp_by_length).
    #[must_use]
    pub fn cmp_by_dist(&self, other: &Vec2, origin: Vec2) -> Ordering {
        let self_len = (*self - origin).len_squared();
        let other_len = (*other - origin).len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_dist() to {}: partial_cmp() failed: {} vs. {}",
                origin, self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<[i32; 2]> for Vec2 {
    fn from(value: [i32; 2]) -> Self {
        Vec2 {
            x: value[0] as f32,
            y: value[1] as f32,
        }
    }
}
impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Add::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Scalar division scales by the reciprocal; dividing by exactly 0.0 returns
/// the zero vector rather than propagating `Inf`/`NaN`. This is what makes
/// the degenerate cases of [`normed`](Vec2::normed) well-defined.
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        let recip = if rhs == 0.0 { 0.0 } else { 1.0 / rhs };
        Vec2 {
            x: self.x * recip,
            y: self.y * recip,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Samples each component uniformly from [0, 1).
impl Distribution<Vec2> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2 {
            x: rng.gen(),
            y: rng.gen(),
        }
    }
}

/// A 2D vector with integer coordinates, for pixel/grid addressing.
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[must_use]
    pub fn right() -> Vec2i {
        Vec2i { x: 1, y: 0 }
    }
    #[must_use]
    pub fn up() -> Vec2i {
        Vec2i { x: 0, y: -1 }
    }
    #[must_use]
    pub fn left() -> Vec2i {
        Vec2i { x: -1, y: 0 }
    }
    #[must_use]
    pub fn down() -> Vec2i {
        Vec2i { x: 0, y: 1 }
    }
    #[must_use]
    pub fn one() -> Vec2i {
        Vec2i { x: 1, y: 1 }
    }
    #[must_use]
    pub fn zero() -> Vec2i {
        Vec2i { x: 0, y: 0 }
    }
    #[must_use]
    pub fn splat(value: i32) -> Vec2i {
        Vec2i { x: value, y: value }
    }

    /// Widens each component exactly to a [`Vec2`].
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2 {
            x: self.x as f32,
            y: self.y as f32,
        }
    }

    /// Iterates the half-open rectangle `[start, end)` in column-major order
    /// (`(x, y)` pairs, x outermost).
    ///
    /// # Examples
    ///
    /// ```
    /// use pxmath::prelude::*;
    /// let cells: Vec<_> = Vec2i::range(Vec2i::zero(), Vec2i { x: 2, y: 2 }).collect();
    /// assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    pub fn range(start: Vec2i, end: Vec2i) -> Product<Range<i32>, Range<i32>> {
        (start.x..end.x).cartesian_product(start.y..end.y)
    }

    /// Iterates `[0, end)` in column-major order.
    pub fn range_from_zero(end: impl Into<Vec2i>) -> Product<Range<i32>, Range<i32>> {
        Self::range(Vec2i::zero(), end.into())
    }

    /// Index into a row-major grid of the given width. Both components must
    /// be non-negative and `x` must be less than `width`.
    #[must_use]
    pub fn as_index(&self, width: u32) -> usize {
        debug_assert!(self.x >= 0 && self.y >= 0);
        debug_assert!((self.x as u32) < width);
        self.y as usize * width as usize + self.x as usize
    }
}

impl From<Vec2i> for Vec2 {
    fn from(value: Vec2i) -> Self {
        value.as_vec2()
    }
}
impl From<[i32; 2]> for Vec2i {
    fn from(value: [i32; 2]) -> Self {
        Vec2i {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<Vec2i> for [i32; 2] {
    fn from(value: Vec2i) -> Self {
        [value.x, value.y]
    }
}

impl Zero for Vec2i {
    fn zero() -> Self {
        Vec2i::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vec2i::zero()
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {})", self.x, self.y)
    }
}

impl Add<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2i> for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2i> for Vec2i {
    fn sub_assign(&mut self, rhs: Vec2i) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Self::Output {
        Vec2i {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ==================== Vec2 Basic Operations ====================

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
        assert_eq!(b - a, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(b / 2.0, Vec2 { x: 1.5, y: 2.0 });
        assert_eq!(-a, Vec2 { x: -1.0, y: -2.0 });
        assert_eq!(-&a, Vec2 { x: -1.0, y: -2.0 });
    }

    #[test]
    fn vec2_assign_ops() {
        let mut a = Vec2 { x: 1.0, y: 2.0 };
        a += Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a, Vec2 { x: 4.0, y: 6.0 });
        a -= Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(a, Vec2 { x: 3.0, y: 5.0 });
        a *= 2.0;
        assert_eq!(a, Vec2 { x: 6.0, y: 10.0 });
        a /= 2.0;
        assert_eq!(a, Vec2 { x: 3.0, y: 5.0 });
    }

    #[test]
    fn vec2_div_by_zero_is_zero() {
        let a = Vec2 { x: 3.0, y: -4.0 };
        assert_eq!(a / 0.0, Vec2::zero());
        let mut b = a;
        b /= 0.0;
        assert_eq!(b, Vec2::zero());
    }

    #[test]
    fn vec2_sum() {
        let vecs = vec![
            Vec2 { x: 1.0, y: 2.0 },
            Vec2 { x: 3.0, y: -4.0 },
            Vec2 { x: 5.0, y: 6.0 },
        ];
        let sum: Vec2 = vecs.into_iter().sum();
        assert_eq!(sum, Vec2 { x: 9.0, y: 4.0 });
    }

    #[test]
    fn vec2_cardinal_directions() {
        assert_eq!(Vec2::right(), Vec2 { x: 1.0, y: 0.0 });
        assert_eq!(Vec2::left(), Vec2 { x: -1.0, y: 0.0 });
        assert_eq!(Vec2::up(), Vec2 { x: 0.0, y: -1.0 });
        assert_eq!(Vec2::down(), Vec2 { x: 0.0, y: 1.0 });
        assert_eq!(Vec2::splat(3.0), Vec2 { x: 3.0, y: 3.0 });
    }

    #[test]
    fn vec2_display() {
        let v = Vec2 { x: 1.5, y: 2.5 };
        assert_eq!(format!("{}", v), "vec(1.5, 2.5)");
        let v2 = Vec2 { x: 1.23456, y: 7.89012 };
        assert_eq!(format!("{:.2}", v2), "vec(1.23, 7.89)");
    }

    // ==================== Vec2 Geometric Operations ====================

    #[test]
    fn vec2_len_and_len_squared() {
        let v = Vec2 { x: 3.0, y: -4.0 };
        assert_eq!(v.len_squared(), 25.0);
        assert_eq!(v.len(), 5.0);
    }

    #[test]
    fn vec2_normed() {
        let v = Vec2 { x: 3.0, y: 4.0 };
        let n = v.normed();
        assert!((n.len() - 1.0).abs() < EPSILON);
        assert_eq!(n, Vec2 { x: 0.6, y: 0.8 });

        // Zero vector normalises to zero, not NaN.
        assert_eq!(Vec2::zero().normed(), Vec2::zero());
        // No negative zero components.
        let n = Vec2 { x: -0.0, y: -3.0 }.normed();
        assert_eq!(n.x.to_bits(), 0.0_f32.to_bits());
    }

    #[test]
    fn vec2_dot() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dot(b), 23.0);
    }

    #[test]
    fn vec2_cross_is_rotated_difference() {
        let p = Vec2 { x: 2.0, y: 3.0 };
        let q = Vec2 { x: 4.0, y: 5.0 };
        // (-(p.y - q.y), p.x - q.x)
        assert_eq!(p.cross(q), Vec2 { x: 2.0, y: -2.0 });
        // Perpendicular to the difference.
        assert_eq!(p.cross(q).dot(p - q), 0.0);
    }

    #[test]
    fn vec2_wedge() {
        let a = Vec2 { x: 2.0, y: 0.0 };
        let b = Vec2 { x: 0.0, y: 3.0 };
        assert_eq!(a.wedge(b), 6.0);
        assert_eq!(b.wedge(a), -6.0);
    }

    #[test]
    fn vec2_component_wise() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: -5.0 };
        assert_eq!(a.component_wise(b), Vec2 { x: 8.0, y: -15.0 });
    }

    #[test]
    fn vec2_dist() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.dist_squared(b), 25.0);
    }

    #[test]
    fn vec2_lerp_endpoints_and_extrapolation() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 6.0 };
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(a.lerp(b, 2.0), Vec2 { x: 5.0, y: 10.0 });
    }

    #[test]
    fn vec2_polar() {
        let v = Vec2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(v.almost_eq(Vec2 { x: 0.0, y: 1.0 }));
        assert!((v.angle() - std::f32::consts::FRAC_PI_2).abs() < EPSILON);
        assert!((Vec2::from_angle(0.3).len() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn vec2_ordering_helpers() {
        let short = Vec2 { x: 1.0, y: 0.0 };
        let long = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(short.cmp_by_length(&long), Ordering::Less);
        let origin = Vec2 { x: 3.0, y: 0.0 };
        assert_eq!(short.cmp_by_dist(&long, origin), Ordering::Less);
        // NaN falls back to total_cmp without panicking.
        let nan = Vec2 { x: f32::NAN, y: 0.0 };
        let _ = nan.cmp_by_length(&short);
    }

    #[test]
    fn vec2_random_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..100 {
            let v: Vec2 = rng.gen();
            assert!((0.0..1.0).contains(&v.x));
            assert!((0.0..1.0).contains(&v.y));
        }
    }

    // ==================== Vec2i ====================

    #[test]
    fn vec2i_arithmetic() {
        let a = Vec2i { x: 1, y: 2 };
        let b = Vec2i { x: 3, y: -4 };
        assert_eq!(a + b, Vec2i { x: 4, y: -2 });
        assert_eq!(a - b, Vec2i { x: -2, y: 6 });
        assert_eq!(a * 3, Vec2i { x: 3, y: 6 });
        assert_eq!(-a, Vec2i { x: -1, y: -2 });
    }

    #[test]
    fn vec2_int_conversion_truncates_toward_zero() {
        assert_eq!(Vec2 { x: 1.9, y: -1.9 }.as_vec2i(), Vec2i { x: 1, y: -1 });
        assert_eq!(Vec2 { x: 1.9, y: -1.9 }.as_vec2i_lossy(), Vec2i { x: 2, y: -2 });
    }

    #[test]
    fn vec2_int_roundtrip_exact() {
        for p in [
            Vec2i { x: 0, y: 0 },
            Vec2i { x: -37, y: 41 },
            Vec2i { x: 1 << 20, y: -(1 << 20) },
        ] {
            assert_eq!(p.as_vec2().as_vec2i(), p);
        }
    }

    #[test]
    fn vec2i_range() {
        let cells: Vec<_> = Vec2i::range_from_zero([2, 3]).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[5], (1, 2));
        assert_eq!(Vec2i { x: 2, y: 1 }.as_index(4), 6);
        assert_eq!(Vec2i { x: 0, y: 0 }.as_index(4), 0);
    }

    #[test]
    #[should_panic]
    fn vec2i_as_index_rejects_negative() {
        let _ = Vec2i { x: -1, y: 0 }.as_index(4);
    }
}
