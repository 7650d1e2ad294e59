//! Centralized limits and thresholds for the kettle emitter.
//!
//! Node trees handed to the emitter come from an external front end, so the
//! emitter cannot assume a sane nesting depth. The constants here bound the
//! recursive walks so that a pathological tree is reported as a defect
//! instead of overflowing the stack.

// =============================================================================
// Recursion Depth Limits (Emitter)
// =============================================================================

/// Maximum depth for emitter recursion.
///
/// Every node the printer descends into adds a frame to the call stack. When
/// the depth passes this limit the printer stops and returns
/// `EmitError::RecursionLimit` rather than emitting partial output.
///
/// # Source example
///
/// ```text
/// # Deeply nested groupings:
/// x = ((((((((((((((1 + 2) + 3) + 4) # ... 1000 levels ...
///
/// # Deeply nested conditionals:
/// if a then (if b then (if c then # ... 1000 levels ...
/// ```
pub const MAX_EMIT_RECURSION_DEPTH: u32 = 1_000;

/// Remaining stack below which the emitter switches to a fresh segment.
///
/// One counted nesting level spans several printer frames (dispatch, block,
/// sequence, braced block), so the depth limit alone does not keep a
/// default 2 MiB thread from overflowing. Each `emit_node` call checks the
/// remaining stack and grows it on demand.
pub const EMIT_STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated when the red zone is reached.
pub const EMIT_STACK_GROWTH: usize = 2 * 1024 * 1024;

/// Indentation unit used by the emitter (two spaces).
pub const INDENT_UNIT: &str = "  ";

// =============================================================================
// Capacity Limits
// =============================================================================

/// Initial capacity of the string interner.
///
/// Programs handed to the emitter rarely declare more than a few hundred
/// distinct names, so this avoids rehashing for the common case.
pub const INTERNER_INITIAL_CAPACITY: usize = 256;
