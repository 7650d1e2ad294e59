use thiserror::Error;

/// Defects reported by the emitter.
///
/// A well-formed tree always renders; these only surface for trees the
/// front end should never have produced, or for a bad configuration.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Node nesting exceeded `EmitConfig::max_depth`.
    #[error("node nesting depth {depth} exceeds the emit limit of {limit}")]
    RecursionLimit { depth: u32, limit: u32 },

    /// Configuration JSON could not be parsed.
    #[error("invalid emit configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
