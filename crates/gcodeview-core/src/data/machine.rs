//! Machine envelope description
//!
//! The safety scanner only needs the maximum X/Y/Z extents measured from the
//! machine origin. Only the upper bound is checked; travel below an axis
//! origin is the stock side and is handled by the crash heuristics instead.

use crate::error::{Error, Result};
use crate::geom::Point3D;
use serde::{Deserialize, Serialize};

/// Maximum travel from the origin along each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineLimits {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for MachineLimits {
    fn default() -> Self {
        Self {
            x: 300.0,
            y: 200.0,
            z: 100.0,
        }
    }
}

impl MachineLimits {
    /// Create limits from explicit axis extents
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether a position stays within the envelope (upper bounds only)
    pub fn contains(&self, point: &Point3D) -> bool {
        point.x <= self.x && point.y <= self.y && point.z <= self.z
    }
}

impl TryFrom<&[f64]> for MachineLimits {
    type Error = Error;

    /// Build limits from a caller-supplied `[x, y, z]` slice
    ///
    /// Any other length is a collaborator bug and fails fast.
    fn try_from(extents: &[f64]) -> Result<Self> {
        match extents {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            other => Err(Error::InvalidMachineLimits { count: other.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_checks_upper_bounds_only() {
        let limits = MachineLimits::new(100.0, 100.0, 50.0);
        assert!(limits.contains(&Point3D::new(100.0, 50.0, 0.0)));
        assert!(!limits.contains(&Point3D::new(100.1, 50.0, 0.0)));
        // No lower bound: negative travel is a crash-check concern
        assert!(limits.contains(&Point3D::new(-500.0, -500.0, -500.0)));
    }

    #[test]
    fn test_try_from_slice() {
        let limits = MachineLimits::try_from([300.0, 200.0, 100.0].as_slice()).unwrap();
        assert_eq!(limits, MachineLimits::default());

        let err = MachineLimits::try_from([300.0, 200.0].as_slice()).unwrap_err();
        assert_eq!(err, Error::InvalidMachineLimits { count: 2 });
    }
}
