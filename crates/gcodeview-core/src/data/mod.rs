//! Data models shared between the engine and its collaborators

pub mod machine;
pub mod tools;

pub use machine::MachineLimits;
pub use tools::{ToolLibrary, DEFAULT_TOOL_DIAMETER};
