//! # GCodeView Core
//!
//! Core types for the GCodeView toolpath engine: geometry primitives,
//! the tool library, machine envelope limits, and error types.

pub mod data;
pub mod error;
pub mod geom;

pub use data::{MachineLimits, ToolLibrary, DEFAULT_TOOL_DIAMETER};
pub use error::{Error, Result};
pub use geom::{BoundingBox, Point3D};
