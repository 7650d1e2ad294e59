use super::Printer;
use super::helpers::indented;
use crate::error::EmitError;
use crate::node::Node;
use crate::options::EmitOptions;
use crate::scope::ScopeId;

impl Printer {
    // =========================================================================
    // Functions
    // =========================================================================

    /// `function(params) { body }` in a child scope of `scope`.
    ///
    /// Parameters are declared in the child frame so the body never emits
    /// `var` for them, and the body's last value is always returned.
    #[tracing::instrument(level = "trace", skip(self, params, body), fields(param_count = params.len()))]
    pub(super) fn emit_code(
        &mut self,
        params: &[String],
        body: &Node,
        indent: &str,
        scope: ScopeId,
    ) -> Result<String, EmitError> {
        let function_scope = self.scopes.create_child(scope);
        for param in params {
            self.scopes.find(function_scope, param);
        }

        let inner = indented(indent);
        let body = self.emit_block(
            body,
            &inner,
            function_scope,
            EmitOptions::default().with_return(),
        )?;
        let params = Self::emit_parameters(params);
        if body.is_empty() {
            return Ok(format!("function({params}) {{ }}"));
        }
        Ok(format!("function({params}) {{\n{body}\n{indent}}}"))
    }
}
