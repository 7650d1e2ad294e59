use super::Printer;
use super::helpers::indented;
use crate::error::EmitError;
use crate::node::{CatchClause, Node};
use crate::options::EmitOptions;
use crate::scope::{Declaration, ScopeId};

impl Printer {
    // =========================================================================
    // Conditionals
    // =========================================================================

    /// `if (cond) { ... } else { ... }`. Both branches inherit `opts`, so a
    /// required return lands in the tail of each branch.
    pub(super) fn emit_if_statement(
        &mut self,
        condition: &Node,
        then_branch: &Node,
        else_branch: Option<&Node>,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let branch_opts = EmitOptions {
            require_return: opts.require_return,
            suppress_parens: false,
        };

        let condition =
            self.emit_node(condition, indent, scope, EmitOptions::default().without_parens())?;
        let then_block = self.emit_braced_block(then_branch, indent, scope, branch_opts)?;
        let mut out = format!("if ({condition}) {then_block}");

        match else_branch {
            None => {}
            Some(nested @ Node::If { .. }) if nested.is_statement() => {
                let nested = self.emit_node(nested, indent, scope, branch_opts)?;
                out.push_str(" else ");
                out.push_str(&nested);
            }
            Some(else_branch) => {
                let else_block = self.emit_braced_block(else_branch, indent, scope, branch_opts)?;
                out.push_str(" else ");
                out.push_str(&else_block);
            }
        }
        Ok(out)
    }

    /// `(cond ? then : else)`, with `null` for a missing else branch.
    pub(super) fn emit_ternary(
        &mut self,
        condition: &Node,
        then_branch: &Node,
        else_branch: Option<&Node>,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let condition = self.emit_node(condition, indent, scope, EmitOptions::default())?;
        let then_part = self.emit_node(then_branch, indent, scope, EmitOptions::default())?;
        let else_part = match else_branch {
            Some(branch) => self.emit_node(branch, indent, scope, EmitOptions::default())?,
            None => "null".to_string(),
        };
        let text = format!("{condition} ? {then_part} : {else_part}");
        if opts.suppress_parens {
            Ok(text)
        } else {
            Ok(format!("({text})"))
        }
    }

    // =========================================================================
    // Loops
    // =========================================================================

    pub(super) fn emit_while(
        &mut self,
        condition: &Node,
        body: &Node,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let condition =
            self.emit_node(condition, indent, scope, EmitOptions::default().without_parens())?;
        let body = self.emit_braced_block(body, indent, scope, EmitOptions::default())?;
        Ok(format!("while ({condition}) {body}"))
    }

    /// Index-based loop over `source`. The source is stored in a temporary
    /// before the loop so it is evaluated exactly once.
    pub(super) fn emit_for(
        &mut self,
        body: &Node,
        name: &str,
        source: &Node,
        index: Option<&str>,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let source = self.emit_node(source, indent, scope, EmitOptions::default().without_parens())?;
        let source_var = self.scopes.free_variable(scope);
        let index_var = self.scopes.free_variable(scope);
        let length_var = self.scopes.free_variable(scope);
        let inner = indented(indent);
        let binding = self.declare_binding(scope, name);

        let mut out = format!(
            "var {source_var} = {source};\n\
             {indent}for (var {index_var} = 0, {length_var} = {source_var}.length; \
             {index_var} < {length_var}; {index_var}++) {{\n\
             {inner}{binding} = {source_var}[{index_var}];"
        );
        if let Some(index) = index {
            let binding = self.declare_binding(scope, index);
            out.push_str(&format!("\n{inner}{binding} = {index_var};"));
        }

        let body = self.emit_block(body, &inner, scope, EmitOptions::default())?;
        if !body.is_empty() {
            out.push('\n');
            out.push_str(&body);
        }
        out.push('\n');
        out.push_str(indent);
        out.push('}');
        Ok(out)
    }

    /// `var name` on first use in the scope chain, `name` afterwards.
    fn declare_binding(&mut self, scope: ScopeId, name: &str) -> String {
        match self.scopes.find(scope, name) {
            Declaration::NewlyDeclared => format!("var {name}"),
            Declaration::AlreadyDeclared => name.to_string(),
        }
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    /// `try { } catch (e) { } finally { }`. The try and catch blocks inherit
    /// a required return; the finally block never returns.
    pub(super) fn emit_try(
        &mut self,
        body: &Node,
        catch_clause: Option<&CatchClause>,
        finally_block: Option<&Node>,
        indent: &str,
        scope: ScopeId,
        opts: EmitOptions,
    ) -> Result<String, EmitError> {
        let block_opts = EmitOptions {
            require_return: opts.require_return,
            suppress_parens: false,
        };
        let mut out = format!(
            "try {}",
            self.emit_braced_block(body, indent, scope, block_opts)?
        );
        if let Some(clause) = catch_clause {
            let recovery = self.emit_braced_block(&clause.body, indent, scope, block_opts)?;
            out.push_str(&format!(" catch ({}) {recovery}", clause.param));
        }
        if let Some(finally_block) = finally_block {
            let finally_block =
                self.emit_braced_block(finally_block, indent, scope, EmitOptions::default())?;
            out.push_str(&format!(" finally {finally_block}"));
        }
        Ok(out)
    }
}
