//! Quantized point identity.

use lathe_math::Point3;

/// Decimal places kept when quantizing coordinates.
pub const QUANTIZE_DECIMALS: i32 = 4;

/// Quantized identity of a point.
///
/// Each coordinate is scaled by `10^QUANTIZE_DECIMALS` and rounded, so
/// two points that agree to four decimal places share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(pub [i64; 3]);

impl PointKey {
    /// Quantize a point.
    pub fn from_point(p: &Point3) -> Self {
        let scale = 10f64.powi(QUANTIZE_DECIMALS);
        Self([
            (p.x * scale).round() as i64,
            (p.y * scale).round() as i64,
            (p.z * scale).round() as i64,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_points_share_key() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.00001, 2.00001, 3.00001);
        assert_eq!(PointKey::from_point(&a), PointKey::from_point(&b));
    }

    #[test]
    fn test_distant_points_differ() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.001, 2.0, 3.0);
        assert_ne!(PointKey::from_point(&a), PointKey::from_point(&b));
    }

    #[test]
    fn test_negative_rounding() {
        let k = PointKey::from_point(&Point3::new(-0.00004, -1.23456, 0.0));
        assert_eq!(k, PointKey([0, -12346, 0]));
    }
}
