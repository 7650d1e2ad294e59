use super::Printer;
use crate::error::EmitError;
use crate::node::{AssignContext, Node};
use crate::options::EmitOptions;
use crate::scope::{Declaration, ScopeId};

impl Printer {
    // =========================================================================
    // Assignment
    // =========================================================================

    /// Emit an assignment.
    ///
    /// A bare name is resolved against the scope chain before the value is
    /// rendered: the first assignment in the chain gets `var`, later ones do
    /// not. `var` has no expression value, so when the block needs a result
    /// the name is returned on a line of its own.
    pub(super) fn emit_assign(
        &mut self,
        target: &Node,
        value: &Node,
        context: AssignContext,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let name = self.emit_node(target, indent, scope, EmitOptions::default())?;

        if context == AssignContext::Object {
            let value = self.emit_node(value, indent, scope, EmitOptions::default())?;
            return Ok(format!("{name}: {value}"));
        }

        if target.has_properties() {
            let value = self.emit_assigned_value(value, indent, scope)?;
            return Ok(returning(format!("{name} = {value}"), opts));
        }

        let declaration = self.scopes.find(scope, &name);
        let value = self.emit_assigned_value(value, indent, scope)?;
        Ok(match declaration {
            Declaration::AlreadyDeclared => returning(format!("{name} = {value}"), opts),
            Declaration::NewlyDeclared if opts.require_return => {
                format!("var {name} = {value};\n{indent}return {name}")
            }
            Declaration::NewlyDeclared => format!("var {name} = {value}"),
        })
    }

    fn emit_assigned_value(
        &mut self,
        value: &Node,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        // Assignment binds looser than every operator the printer emits.
        self.emit_node(value, indent, scope, EmitOptions::default().without_parens())
    }

    // =========================================================================
    // Return
    // =========================================================================

    pub(super) fn emit_return(
        &mut self,
        expr: &Node,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        if matches!(expr, Node::Sequence(nodes) if nodes.is_empty()) {
            return Ok("return;".to_string());
        }
        if expr.is_statement() || expr.has_custom_return() {
            let text = self.emit_node(expr, indent, scope, EmitOptions::default().with_return())?;
            // Blocks come back with their first line already indented.
            return Ok(match expr {
                Node::Sequence(_) => text.strip_prefix(indent).unwrap_or(&text).to_string(),
                _ => text,
            });
        }
        let text = self.emit_node(expr, indent, scope, EmitOptions::default().without_parens())?;
        Ok(format!("return {text}"))
    }
}

/// Prefix `return` when the assignment is the value of its block.
fn returning(assignment: String, opts: EmitOptions) -> String {
    if opts.require_return {
        format!("return {assignment}")
    } else {
        assignment
    }
}
