use super::Printer;
use super::helpers::{indented, strip_statement_terminator};
use crate::error::EmitError;
use crate::node::{Node, Property};
use crate::operators;
use crate::options::EmitOptions;
use crate::scope::ScopeId;

impl Printer {
    // =========================================================================
    // Values and calls
    // =========================================================================

    pub(super) fn emit_value(
        &mut self,
        base: &Node,
        properties: &[Property],
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let mut out = self.emit_node(base, indent, scope, EmitOptions::default())?;
        for property in properties {
            match property {
                Property::Accessor(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                Property::Index(index) => {
                    let index =
                        self.emit_node(index, indent, scope, EmitOptions::default().without_parens())?;
                    out.push('[');
                    out.push_str(&index);
                    out.push(']');
                }
            }
        }
        Ok(out)
    }

    pub(super) fn emit_call(
        &mut self,
        callee: &Node,
        arguments: &[Node],
        is_new: bool,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let callee = self.emit_node(callee, indent, scope, EmitOptions::default())?;
        // The call's own parentheses group each argument.
        let args = self.emit_comma_separated(
            arguments,
            indent,
            scope,
            EmitOptions::default().without_parens(),
        )?;
        let prefix = if is_new { "new " } else { "" };
        Ok(format!("{prefix}{callee}({args})"))
    }

    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn emit_op(
        &mut self,
        operator: &str,
        first: &Node,
        second: Option<&Node>,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let first = self.emit_node(first, indent, scope, EmitOptions::default())?;
        let Some(second) = second else {
            let operator = operators::translate(operator);
            let separator = if operators::needs_operand_space(operator, &first) {
                " "
            } else {
                ""
            };
            return Ok(format!("{operator}{separator}{first}"));
        };
        let second = self.emit_node(second, indent, scope, EmitOptions::default())?;

        if let Some(logical) = operators::conditional_assignment(operator) {
            return Ok(format!("({first} = {first} {logical} {second})"));
        }

        let operator = operators::translate(operator);
        if opts.suppress_parens {
            Ok(format!("{first} {operator} {second}"))
        } else {
            Ok(format!("({first} {operator} {second})"))
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_array(
        &mut self,
        elements: &[Node],
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let elements = self.emit_comma_separated(elements, indent, scope, EmitOptions::default())?;
        Ok(format!("[{elements}]"))
    }

    /// `{`, one entry per line one level deeper, `}` at `indent`.
    pub(super) fn emit_object(
        &mut self,
        entries: &[Node],
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        if entries.is_empty() {
            return Ok("{}".to_string());
        }
        let inner = indented(indent);
        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            let text = self.emit_node(entry, &inner, scope, EmitOptions::default())?;
            lines.push(format!("{inner}{text}"));
        }
        Ok(format!("{{\n{}\n{indent}}}", lines.join(",\n")))
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    pub(super) fn emit_parenthetical(
        &mut self,
        inner: &Node,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let text = match inner {
            Node::Sequence(nodes) if nodes.is_empty() => "void 0".to_string(),
            Node::Sequence(nodes) if nodes.len() == 1 => {
                self.emit_node(&nodes[0], indent, scope, EmitOptions::default().without_parens())?
            }
            // A grouped block is a comma expression; its value is the last member.
            Node::Sequence(nodes) => {
                self.emit_comma_separated(nodes, indent, scope, EmitOptions::default())?
            }
            other => self.emit_node(other, indent, scope, EmitOptions::default().without_parens())?,
        };
        let text = strip_statement_terminator(&text);
        // Comma expressions keep their parens so an argument list cannot split them.
        if opts.suppress_parens && !matches!(inner, Node::Sequence(nodes) if nodes.len() > 1) {
            Ok(text.to_string())
        } else {
            Ok(format!("({text})"))
        }
    }
}
