//! Geometry primitives shared across the toolpath engine
//!
//! Machine coordinates are `f64` millimeters (or whatever unit the program
//! uses; the engine is unit-agnostic). All types are plain data with serde
//! derives so collaborators can persist or transfer them.

use serde::{Deserialize, Serialize};

/// A point in 3D machine space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The machine origin (0, 0, 0)
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linear interpolation towards `other`, with `t` in [0, 1]
    pub fn lerp(&self, other: &Point3D, t: f64) -> Point3D {
        Point3D {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Axis-aligned bounding box over visited machine positions
///
/// The default box is collapsed onto the origin: every interpretation run
/// starts at the machine origin, so the origin is always part of the extent
/// even for programs that never move an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3D,
    pub max: Point3D,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Point3D::origin(),
            max: Point3D::origin(),
        }
    }
}

impl BoundingBox {
    /// Construct from explicit corners
    pub fn new(min: Point3D, max: Point3D) -> Self {
        Self { min, max }
    }

    /// Grow the box to contain `point`
    pub fn include(&mut self, point: &Point3D) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Extent along each axis
    pub fn size(&self) -> Point3D {
        Point3D::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Geometric center of the box
    pub fn center(&self) -> Point3D {
        self.min.lerp(&self.max, 0.5)
    }
}
