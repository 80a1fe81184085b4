//! `pxmath`: a small linear-algebra toolkit for graphics and physics code.
//!
//! Supplies value-type 2D/3D/4D vectors ([`Vec2`](vec2::Vec2),
//! [`Vec3`](vec3::Vec3), [`Vec4`](vec4::Vec4)), integer counterparts for
//! pixel/grid coordinates, scalar interpolation helpers, and a 4x4 matrix
//! ([`Mat4`](mat4::Mat4)) with affine transform and camera/projection
//! builders.
//!
//! Everything is a pure value type: no allocation, no shared state, no error
//! channels. Numeric degeneracies are either zero-guarded (scalar division,
//! normalization) or propagate IEEE-754 `Inf`/`NaN` unmodified; see the
//! individual builder docs.
//!
//! # Examples
//!
//! ```
//! use pxmath::prelude::*;
//!
//! let model = Mat4::one()
//!     .scaled(Vec3::splat(2.0))
//!     .rotated(std::f32::consts::FRAC_PI_2, Vec3::up())
//!     .translated(Vec3 { x: 1.0, y: 0.0, z: 0.0 });
//! let view = Mat4::look_at(
//!     Vec3 { x: 0.0, y: 0.0, z: 5.0 },
//!     Vec3::zero(),
//!     Vec3::up(),
//! );
//! let clip = Mat4::perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
//! let mvp = clip * view * model;
//! let p = mvp * Vec3 { x: 0.5, y: 0.5, z: 0.0 };
//! assert!(p.is_finite());
//! ```

pub mod float;
pub mod mat4;
pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vec4;

/// Tolerance used by the approximate equality of the floating vector types
/// and by `almost_eq` throughout the crate.
pub const EPSILON: f32 = 1e-5;

pub mod prelude {
    pub use crate::EPSILON;
    pub use crate::float::IsFinite;
    pub use crate::mat4::Mat4;
    pub use crate::scalar::{inverse_lerp, lerp, remap, smooth_lerp};
    pub use crate::vec2::{Vec2, Vec2i};
    pub use crate::vec3::{Vec3, Vec3i};
    pub use crate::vec4::{Vec4, Vec4i};
}
