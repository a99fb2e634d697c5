#![warn(missing_docs)]

//! Math types for lathe.
//!
//! Thin wrappers around nalgebra providing the geometry the revolve
//! pipeline needs: points, vectors, axes of revolution, rigid
//! transforms, and tolerance constants.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Numerical failures in geometry primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// Axis direction has (near) zero length.
    #[error("axis direction is zero")]
    ZeroAxis,

    /// The two points defining an axis coincide.
    #[error("axis points coincide")]
    CoincidentAxisPoints,

    /// A coordinate is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Compose: `self` then `other` (self * other).
    ///
    /// Applying the result to a point applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Linear distance tolerance (model units).
    ///
    /// Also used as the minimum cross-product magnitude of an accepted
    /// triangle.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An infinite line used as an axis of revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// A point on the axis.
    pub origin: Point3,
    /// Unit direction of the axis.
    pub direction: Dir3,
}

impl Axis {
    /// Create an axis through `origin` along `direction`.
    ///
    /// Fails if the direction is zero or any coordinate is non-finite.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(MathError::NonFinite("axis origin"));
        }
        if !direction.iter().all(|c| c.is_finite()) {
            return Err(MathError::NonFinite("axis direction"));
        }
        if direction.norm() < 1e-12 {
            return Err(MathError::ZeroAxis);
        }
        Ok(Self {
            origin,
            direction: Dir3::new_normalize(direction),
        })
    }

    /// Create an axis through two points, directed from `a` to `b`.
    pub fn from_points(a: Point3, b: Point3) -> Result<Self> {
        let d = b - a;
        if d.iter().all(|c| c.is_finite()) && d.norm() < 1e-12 {
            return Err(MathError::CoincidentAxisPoints);
        }
        Self::new(a, d)
    }

    /// The Z axis through the origin.
    pub fn z() -> Self {
        Self {
            origin: Point3::origin(),
            direction: Vec3::z_axis(),
        }
    }

    /// Perpendicular projection of `p` onto the axis line.
    pub fn closest_point(&self, p: &Point3) -> Point3 {
        let d = self.direction.as_ref();
        self.origin + (p - self.origin).dot(d) * d
    }

    /// Perpendicular distance from `p` to the axis line.
    pub fn distance_to(&self, p: &Point3) -> f64 {
        self.radial(p).norm()
    }

    /// Vector from the axis to `p`, perpendicular to the axis.
    pub fn radial(&self, p: &Point3) -> Vec3 {
        p - self.closest_point(p)
    }

    /// Rigid transform rotating space by `angle` radians about this axis.
    pub fn rotation(&self, angle: f64) -> Transform {
        let o = self.origin;
        Transform::translation(o.x, o.y, o.z)
            .then(&Transform::rotation_about_axis(&self.direction, angle))
            .then(&Transform::translation(-o.x, -o.y, -o.z))
    }

    /// Rotate a single point by `angle` radians about this axis.
    pub fn rotate_point(&self, p: &Point3, angle: f64) -> Point3 {
        self.rotation(angle).apply_point(p)
    }
}
