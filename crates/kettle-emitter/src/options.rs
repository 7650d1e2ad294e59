//! Emit configuration and per-node rendering flags.

use kettle_common::limits::MAX_EMIT_RECURSION_DEPTH;
use serde::{Deserialize, Serialize};

use crate::error::EmitError;

/// Flags passed down to each node's render call.
///
/// Values are never mutated in place: a parent builds the record it hands to
/// each child, so siblings cannot observe each other's flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// The node is the tail of a block whose value must be returned.
    pub require_return: bool,
    /// The surrounding syntax already groups the node (call argument,
    /// `if (...)` condition), so outer parentheses can be dropped.
    pub suppress_parens: bool,
}

impl EmitOptions {
    #[must_use]
    pub const fn with_return(self) -> Self {
        Self {
            require_return: true,
            ..self
        }
    }

    #[must_use]
    pub const fn without_parens(self) -> Self {
        Self {
            suppress_parens: true,
            ..self
        }
    }
}

/// Program-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitConfig {
    /// Wrap the program in `(function(){ ... })();`. When false the program
    /// body is emitted bare at the top level.
    pub wrap: bool,
    /// Maximum node nesting depth before the printer gives up.
    pub max_depth: u32,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            max_depth: MAX_EMIT_RECURSION_DEPTH,
        }
    }
}

impl EmitConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(text: &str) -> Result<Self, EmitError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Configuration for bare (unwrapped) output.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            wrap: false,
            ..Self::default()
        }
    }
}
