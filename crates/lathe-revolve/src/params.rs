//! Revolve parameters and the derived sweep plan.

use lathe_math::{Axis, MathError, Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

use crate::{Result, RevolveError};

/// Fewest angular segments a sweep may use.
pub const MIN_SEGMENTS: u32 = 3;

/// Most angular segments a sweep may use.
pub const MAX_SEGMENTS: u32 = 360;

/// How the caller defines the axis of revolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpec {
    /// A point on the axis and its direction.
    Direction {
        /// Point on the axis.
        origin: Point3,
        /// Axis direction (need not be normalized).
        direction: Vec3,
    },
    /// Two distinct points on the axis.
    Points {
        /// First point.
        from: Point3,
        /// Second point.
        to: Point3,
    },
}

impl AxisSpec {
    /// Resolve into a normalized [`Axis`].
    pub fn resolve(&self) -> std::result::Result<Axis, MathError> {
        match *self {
            AxisSpec::Direction { origin, direction } => Axis::new(origin, direction),
            AxisSpec::Points { from, to } => Axis::from_points(from, to),
        }
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        AxisSpec::Direction {
            origin: Point3::origin(),
            direction: Vec3::z(),
        }
    }
}

/// Parameters of a revolve operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevolveParams {
    /// Axis of revolution.
    pub axis: AxisSpec,
    /// Sweep angle in degrees, in (0, 360].
    pub angle: f64,
    /// Number of angular segments; clamped to [`MIN_SEGMENTS`, `MAX_SEGMENTS`].
    pub segments: u32,
    /// Geometric tolerances.
    pub tolerance: Tolerance,
}

impl Default for RevolveParams {
    fn default() -> Self {
        Self {
            axis: AxisSpec::default(),
            angle: 360.0,
            segments: 24,
            tolerance: Tolerance::DEFAULT,
        }
    }
}

impl RevolveParams {
    /// Parameters for a sweep about `axis`.
    pub fn new(axis: AxisSpec, angle: f64, segments: u32) -> Self {
        Self {
            axis,
            angle,
            segments,
            ..Self::default()
        }
    }

    /// Segment count after clamping.
    pub fn segment_count(&self) -> u32 {
        self.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
    }

    /// Check the angle and the axis.
    pub fn validate(&self) -> Result<()> {
        Sweep::new(self).map(|_| ())
    }
}

/// A validated sweep: resolved axis, angular stepping, and tolerances.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    /// Axis of revolution.
    pub axis: Axis,
    /// Total sweep angle in radians.
    pub angle: f64,
    /// Number of angular segments.
    pub segments: usize,
    /// Whether the sweep closes on itself.
    pub full: bool,
    /// Geometric tolerances.
    pub tolerance: Tolerance,
}

impl Sweep {
    /// Validate `params` and derive the sweep.
    pub fn new(params: &RevolveParams) -> Result<Self> {
        if !params.angle.is_finite() || params.angle <= 0.0 || params.angle > 360.0 {
            return Err(RevolveError::InvalidAngle(params.angle));
        }
        let axis = params.axis.resolve()?;
        let tolerance = params.tolerance;
        let angle = params.angle.to_radians();
        let full = tolerance.angles_equal(angle, std::f64::consts::TAU);
        Ok(Self {
            axis,
            angle,
            segments: params.segment_count() as usize,
            full,
            tolerance,
        })
    }

    /// Angle between consecutive profiles, in radians.
    pub fn angle_step(&self) -> f64 {
        self.angle / self.segments as f64
    }

    /// Number of distinct rotated profiles.
    ///
    /// A full sweep reuses the first profile as the last.
    pub fn step_count(&self) -> usize {
        if self.full {
            self.segments
        } else {
            self.segments + 1
        }
    }

    /// Profile index following `step`.
    pub fn next_step(&self, step: usize) -> usize {
        if self.full {
            (step + 1) % self.step_count()
        } else {
            (step + 1).min(self.step_count() - 1)
        }
    }
}
