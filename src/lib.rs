//! kettle: JavaScript code generation for an expression-oriented language.
//!
//! The front end hands over a [`Node`] tree; this crate renders it as
//! statement-oriented JavaScript. The heavy lifting lives in the
//! `kettle-emitter` crate, re-exported here together with the shared
//! interner from `kettle-common`.
//!
//! ```
//! use kettle::{Node, compile_program};
//!
//! let program = Node::sequence(vec![Node::assign(Node::value("x"), Node::number(1))]);
//! let js = compile_program(&program).unwrap();
//! assert_eq!(js, "(function(){\n  var x = 1;\n  return x;\n})();");
//! ```

pub mod tracing_config;

pub use kettle_common::{Atom, Interner, limits};
pub use kettle_emitter::{
    AssignContext, CatchClause, Declaration, EmitConfig, EmitError, EmitOptions, Node, Printer,
    Property, ScopeArena, ScopeId, operators,
};

/// Compile a program with the default configuration: wrapped in
/// `(function(){ ... })();`, last value returned.
pub fn compile_program(program: &Node) -> Result<String, EmitError> {
    compile_program_with(program, &EmitConfig::default())
}

/// Compile a program with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all, fields(wrap = config.wrap))]
pub fn compile_program_with(program: &Node, config: &EmitConfig) -> Result<String, EmitError> {
    let mut printer = Printer::new(config.clone());
    let output = printer.emit_program(program)?;
    tracing::debug!(bytes = output.len(), "compiled program");
    Ok(output)
}
