//! Printer: walks a `Node` tree and emits JavaScript text.
//!
//! Every render call receives the current indentation, the enclosing scope
//! and an `EmitOptions` record, and returns the rendered text. The printer
//! owns the `ScopeArena` for the duration of one program render; a fresh
//! arena is created for every call to [`Printer::emit_program`], so the same
//! tree always renders to the same text.
//!
//! # Return-pushing
//!
//! Source blocks evaluate to their last expression, JavaScript blocks do not.
//! When a block must produce a value (function bodies, the program wrapper)
//! the sequence emitter either prefixes its last node with `return`, or, when
//! that node is a statement or manages its own return, hands the obligation
//! down so the node places the `return` inside itself.

use kettle_common::limits::{EMIT_STACK_GROWTH, EMIT_STACK_RED_ZONE, INDENT_UNIT};

use crate::error::EmitError;
use crate::node::Node;
use crate::options::{EmitConfig, EmitOptions};
use crate::scope::{ScopeArena, ScopeId};

mod assignment;
mod control_flow;
mod expressions;
mod functions;
mod helpers;

/// JavaScript printer for `Node` trees.
pub struct Printer {
    scopes: ScopeArena,
    config: EmitConfig,
    depth: u32,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(EmitConfig::default())
    }
}

impl Printer {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            scopes: ScopeArena::new(),
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Scope frames of the last render.
    pub fn scopes(&self) -> &ScopeArena {
        &self.scopes
    }

    /// Emit a whole program.
    ///
    /// By default the program is wrapped in `(function(){ ... })();` and its
    /// last value becomes the wrapper's return value.
    #[tracing::instrument(level = "trace", skip(self, program), fields(wrap = self.config.wrap))]
    pub fn emit_program(&mut self, program: &Node) -> Result<String, EmitError> {
        self.scopes = ScopeArena::new();
        self.depth = 0;
        let root = self.scopes.create_root();

        let output = if self.config.wrap {
            let body =
                self.emit_block(program, INDENT_UNIT, root, EmitOptions::default().with_return())?;
            format!("(function(){{\n{body}\n}})();")
        } else {
            self.emit_block(program, "", root, EmitOptions::default())?
        };

        tracing::debug!(
            bytes = output.len(),
            scopes = self.scopes.len(),
            "emitted program"
        );
        Ok(output)
    }

    /// Emit a single node at the top level with a fresh scope and default
    /// options (no wrapper, no return-pushing).
    pub fn emit_to_string(node: &Node) -> Result<String, EmitError> {
        let mut printer = Self::default();
        let root = printer.scopes.create_root();
        printer.emit_node(node, "", root, EmitOptions::default())
    }

    /// Render `node` at `indent` within `scope`.
    ///
    /// The stack is grown on demand, so any tree within `max_depth` renders
    /// on a default-sized thread.
    pub(crate) fn emit_node(
        &mut self,
        node: &Node,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        self.enter()?;
        let result = stacker::maybe_grow(EMIT_STACK_RED_ZONE, EMIT_STACK_GROWTH, || {
            self.emit_node_inner(node, indent, scope, opts)
        });
        self.depth -= 1;
        result
    }

    fn emit_node_inner(
        &mut self,
        node: &Node,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        match node {
            Node::Sequence(nodes) => self.emit_sequence(nodes, indent, scope, opts),
            Node::Comment(lines) => Ok(Self::emit_comment(lines, indent)),
            Node::Literal(text) => Ok(text.clone()),
            Node::Value { base, properties } => self.emit_value(base, properties, indent, scope),
            Node::Call {
                callee,
                arguments,
                is_new,
            } => self.emit_call(callee, arguments, *is_new, indent, scope),
            Node::Assign {
                target,
                value,
                context,
            } => self.emit_assign(target, value, *context, indent, scope, opts),
            Node::Op {
                operator,
                first,
                second,
            } => self.emit_op(operator, first, second.as_deref(), indent, scope, opts),
            Node::Code { params, body } => self.emit_code(params, body, indent, scope),
            Node::Object(entries) => self.emit_object(entries, indent, scope),
            Node::Array(elements) => self.emit_array(elements, indent, scope),
            Node::Parenthetical(inner) => self.emit_parenthetical(inner, indent, scope, opts),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if node.is_statement() {
                    self.emit_if_statement(
                        condition,
                        then_branch,
                        else_branch.as_deref(),
                        indent,
                        scope,
                        opts,
                    )
                } else {
                    self.emit_ternary(
                        condition,
                        then_branch,
                        else_branch.as_deref(),
                        indent,
                        scope,
                        opts,
                    )
                }
            }
            Node::While { condition, body } => self.emit_while(condition, body, indent, scope),
            Node::For {
                body,
                name,
                source,
                index,
            } => self.emit_for(body, name, source, index.as_deref(), indent, scope),
            Node::Try {
                body,
                catch_clause,
                finally_block,
            } => self.emit_try(
                body,
                catch_clause.as_ref(),
                finally_block.as_deref(),
                indent,
                scope,
                opts,
            ),
            Node::Throw(expr) => {
                let expr = self.emit_node(expr, indent, scope, EmitOptions::default())?;
                Ok(format!("throw {expr}"))
            }
            Node::Return(expr) => self.emit_return(expr, indent, scope),
        }
    }

    fn enter(&mut self) -> Result<(), EmitError> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(EmitError::RecursionLimit {
                depth: self.depth,
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Emit a block: each node on its own line at `indent`, with its line
    /// terminator. When `opts.require_return` is set the last node delivers
    /// the block's value.
    pub(crate) fn emit_sequence(
        &mut self,
        nodes: &[Node],
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let mut lines = Vec::with_capacity(nodes.len());
        let last = nodes.len().saturating_sub(1);

        for (i, node) in nodes.iter().enumerate() {
            let is_tail = opts.require_return && i == last;
            let child_opts = if is_tail {
                EmitOptions::default().with_return()
            } else {
                EmitOptions::default()
            };

            // Nested blocks are spliced in place; their lines are already indented.
            if let Node::Sequence(inner) = node {
                let text = self.emit_node(node, indent, scope, child_opts)?;
                if !inner.is_empty() && !text.is_empty() {
                    lines.push(text);
                }
                continue;
            }

            let line = if !is_tail || node.is_statement() || node.has_custom_return() {
                let text = self.emit_node(node, indent, scope, child_opts)?;
                if text.is_empty() && node.line_ending().is_empty() {
                    continue;
                }
                format!("{indent}{text}{}", node.line_ending())
            } else {
                let text = self.emit_node(node, indent, scope, EmitOptions::default())?;
                format!("{indent}return {text}{}", node.line_ending())
            };
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }

    /// Emit `node` as a block, lifting a single node into a one-line block.
    pub(crate) fn emit_block(
        &mut self,
        node: &Node,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        match node {
            Node::Sequence(nodes) => self.emit_sequence(nodes, indent, scope, opts),
            other => self.emit_sequence(std::slice::from_ref(other), indent, scope, opts),
        }
    }

    /// Emit `{`, the block one level deeper, and `}` at `indent`.
    /// Empty blocks render as `{ }`.
    pub(crate) fn emit_braced_block(
        &mut self,
        node: &Node,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let inner = helpers::indented(indent);
        let body = self.emit_block(node, &inner, scope, opts)?;
        if body.is_empty() {
            return Ok("{ }".to_string());
        }
        Ok(format!("{{\n{body}\n{indent}}}"))
    }

    fn emit_comment(lines: &[String], indent: &str) -> String {
        lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    "//".to_string()
                } else {
                    format!("// {line}")
                }
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{indent}"))
    }
}

#[cfg(test)]
#[path = "../../tests/printer.rs"]
mod tests;
