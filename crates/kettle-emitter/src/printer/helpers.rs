//! Helper methods for the printer.
//!
//! Contains indentation, comma-separated list emission, and terminator
//! handling shared by the node emitters.

use kettle_common::limits::INDENT_UNIT;

use super::Printer;
use crate::error::EmitError;
use crate::node::Node;
use crate::options::EmitOptions;
use crate::scope::ScopeId;

/// Indentation one level deeper than `indent`.
pub(super) fn indented(indent: &str) -> String {
    let mut inner = String::with_capacity(indent.len() + INDENT_UNIT.len());
    inner.push_str(indent);
    inner.push_str(INDENT_UNIT);
    inner
}

/// Drop one trailing statement terminator.
pub(super) fn strip_statement_terminator(text: &str) -> &str {
    text.strip_suffix(';').unwrap_or(text)
}

impl Printer {
    /// Emit `nodes` joined by `, `, each rendered with `opts`.
    pub(super) fn emit_comma_separated(
        &mut self,
        nodes: &[Node],
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let mut out = String::new();
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.emit_node(node, indent, scope, opts)?);
        }
        Ok(out)
    }

    pub(super) fn emit_parameters(params: &[String]) -> String {
        params.join(", ")
    }
}
