//! JavaScript emitter for the kettle compiler backend.
//!
//! This crate turns a tree of expression-oriented source nodes into
//! statement-oriented JavaScript text:
//! - Node tree and construction helpers (`node`)
//! - Scope chain for `var` hoisting decisions (`scope`)
//! - Operator translation tables (`operators`)
//! - Rendering flags and program configuration (`options`)
//! - Printer with return-pushing and statement/expression selection (`printer`)

pub mod error;
pub mod node;
pub mod operators;
pub mod options;
pub mod printer;
pub mod scope;

pub use error::EmitError;
pub use node::{AssignContext, CatchClause, Node, Property};
pub use options::{EmitConfig, EmitOptions};
pub use printer::Printer;
pub use scope::{Declaration, ScopeArena, ScopeId};
