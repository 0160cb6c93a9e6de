//! Tool library - tool number to diameter mapping
//!
//! Settings files historically stored tool numbers as strings ("1", "T2"),
//! so the constructor normalizes keys to integers at the boundary. The rest
//! of the engine only ever sees `u32` tool numbers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Diameter assumed for tools not present in the library
pub const DEFAULT_TOOL_DIAMETER: f64 = 10.0;

/// Mapping from tool number to cutter diameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolLibrary {
    tools: HashMap<u32, f64>,
}

impl ToolLibrary {
    /// Create an empty tool library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from externally supplied entries
    ///
    /// Keys may be plain numbers ("3") or carry the T address ("T3");
    /// anything else is a caller bug and fails fast.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut tools = HashMap::new();
        for (key, diameter) in entries {
            let raw = key.as_ref().trim();
            let digits = raw.strip_prefix(['T', 't']).unwrap_or(raw);
            let number: u32 = digits.parse().map_err(|_| Error::InvalidToolNumber {
                key: raw.to_string(),
            })?;
            tools.insert(number, diameter);
        }
        Ok(Self { tools })
    }

    /// Add or replace a tool
    pub fn insert(&mut self, number: u32, diameter: f64) {
        self.tools.insert(number, diameter);
    }

    /// Remove a tool, returning its diameter if present
    pub fn remove(&mut self, number: u32) -> Option<f64> {
        self.tools.remove(&number)
    }

    /// Whether the given tool number is defined
    pub fn contains(&self, number: u32) -> bool {
        self.tools.contains_key(&number)
    }

    /// Diameter for a tool, falling back to [`DEFAULT_TOOL_DIAMETER`]
    pub fn diameter(&self, number: u32) -> f64 {
        self.tools
            .get(&number)
            .copied()
            .unwrap_or(DEFAULT_TOOL_DIAMETER)
    }

    /// Number of tools defined
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
