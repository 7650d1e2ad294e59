//! Node tree consumed by the printer.
//!
//! The external front end builds a tree of `Node` values and hands it to the
//! printer, which walks it and emits JavaScript text.
//!
//! # Architecture
//!
//! Every source construct is a variant of one closed enum. The three
//! capabilities the printer needs from a node are plain methods with an
//! exhaustive match:
//!
//! - [`Node::is_statement`]: the node must render as a JavaScript statement.
//! - [`Node::has_custom_return`]: the node emits its own `return` and must not
//!   have one injected around it.
//! - [`Node::line_ending`]: the terminator appended when the node is emitted
//!   as a line of a block.
//!
//! Nodes never hold a scope. The enclosing scope is passed in at render time.

/// A node of the source tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // =========================================================================
    // Blocks
    // =========================================================================
    /// Ordered block of expressions/statements. The last one is the block's value.
    Sequence(Vec<Self>),

    /// Line comment block: each entry becomes one `// text` line.
    Comment(Vec<String>),

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Raw literal text: `42`, `"hello"`, `true`, `null`, `this`
    Literal(String),

    /// Value chain: `base.prop[index].other`
    Value {
        base: Box<Self>,
        properties: Vec<Property>,
    },

    /// Call expression: `callee(args)` or `new callee(args)`
    Call {
        callee: Box<Self>,
        arguments: Vec<Self>,
        is_new: bool,
    },

    /// Assignment to a name or a property path, or an object literal entry.
    Assign {
        target: Box<Self>,
        value: Box<Self>,
        context: AssignContext,
    },

    /// Operator expression. `second` is `None` for unary operators.
    Op {
        operator: String,
        first: Box<Self>,
        second: Option<Box<Self>>,
    },

    /// Function definition: `function(params) { body }`
    Code { params: Vec<String>, body: Box<Self> },

    /// Object literal. Entries are object-context assignments.
    Object(Vec<Self>),

    /// Array literal: `[a, b, c]`
    Array(Vec<Self>),

    /// Grouping: `(expr)`
    Parenthetical(Box<Self>),

    // =========================================================================
    // Control flow
    // =========================================================================
    /// Conditional. Renders as an `if` statement or a ternary expression.
    If {
        condition: Box<Self>,
        then_branch: Box<Self>,
        else_branch: Option<Box<Self>>,
    },

    /// While loop: `while (cond) { body }`
    While { condition: Box<Self>, body: Box<Self> },

    /// Index-based iteration over a source evaluated once.
    For {
        body: Box<Self>,
        name: String,
        source: Box<Self>,
        index: Option<String>,
    },

    /// `try { } catch (e) { } finally { }`. Both clauses are optional.
    Try {
        body: Box<Self>,
        catch_clause: Option<CatchClause>,
        finally_block: Option<Box<Self>>,
    },

    /// Throw statement: `throw expr`
    Throw(Box<Self>),

    /// Explicit return: `return expr`
    Return(Box<Self>),
}

/// Accessor or indexer in a value chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// `.name`
    Accessor(String),
    /// `[expr]`
    Index(Box<Node>),
}

/// Where an assignment appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignContext {
    /// Ordinary assignment statement or expression.
    #[default]
    Plain,
    /// `key: value` entry of an object literal.
    Object,
}

/// Catch clause of a `Try` node.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: String,
    pub body: Box<Node>,
}

// =========================================================================
// Capabilities
// =========================================================================

impl Node {
    /// Whether this node must render as a JavaScript statement.
    pub fn is_statement(&self) -> bool {
        match self {
            Self::Sequence(_)
            | Self::Comment(_)
            | Self::While { .. }
            | Self::For { .. }
            | Self::Try { .. }
            | Self::Throw(_)
            | Self::Return(_) => true,
            Self::If {
                then_branch,
                else_branch,
                ..
            } => {
                forces_statement(then_branch)
                    || else_branch.as_deref().is_some_and(forces_statement)
            }
            Self::Literal(_)
            | Self::Value { .. }
            | Self::Call { .. }
            | Self::Assign { .. }
            | Self::Op { .. }
            | Self::Code { .. }
            | Self::Object(_)
            | Self::Array(_)
            | Self::Parenthetical(_) => false,
        }
    }

    /// Whether this node emits its own `return` when its block needs a value.
    pub fn has_custom_return(&self) -> bool {
        match self {
            Self::Sequence(_) | Self::Assign { .. } | Self::Return(_) => true,
            Self::Comment(_)
            | Self::Literal(_)
            | Self::Value { .. }
            | Self::Call { .. }
            | Self::Op { .. }
            | Self::Code { .. }
            | Self::Object(_)
            | Self::Array(_)
            | Self::Parenthetical(_)
            | Self::If { .. }
            | Self::While { .. }
            | Self::For { .. }
            | Self::Try { .. }
            | Self::Throw(_) => false,
        }
    }

    /// Terminator appended after the node when it is a line of a block.
    pub fn line_ending(&self) -> &'static str {
        match self {
            Self::Sequence(_)
            | Self::Comment(_)
            | Self::While { .. }
            | Self::For { .. }
            | Self::Try { .. } => "",
            Self::If { .. } if self.is_statement() => "",
            Self::Return(expr) => expr.line_ending(),
            _ => ";",
        }
    }

    /// Whether this is a value chain with at least one accessor or indexer.
    pub fn has_properties(&self) -> bool {
        matches!(self, Self::Value { properties, .. } if !properties.is_empty())
    }

    /// Collapse a one-element sequence to its sole member.
    pub fn flatten(self) -> Self {
        match self {
            Self::Sequence(mut nodes) if nodes.len() == 1 => nodes.remove(0),
            other => other,
        }
    }

    /// Lift a node into a sequence, leaving sequences untouched.
    pub fn wrap(self) -> Self {
        match self {
            Self::Sequence(_) => self,
            other => Self::Sequence(vec![other]),
        }
    }
}

/// A branch that cannot live inside a ternary expression.
fn forces_statement(branch: &Node) -> bool {
    matches!(branch, Node::Assign { .. }) || branch.is_statement()
}

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl Node {
    /// Create a raw literal
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl ToString) -> Self {
        Self::Literal(n.to_string())
    }

    /// Create a double-quoted string literal from unquoted text
    pub fn string(s: &str) -> Self {
        let mut quoted = String::with_capacity(s.len() + 2);
        quoted.push('"');
        for ch in s.chars() {
            match ch {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                _ => quoted.push(ch),
            }
        }
        quoted.push('"');
        Self::Literal(quoted)
    }

    /// Create a bare name reference
    pub fn value(name: impl Into<String>) -> Self {
        Self::Value {
            base: Box::new(Self::Literal(name.into())),
            properties: Vec::new(),
        }
    }

    /// Create a value chain over an arbitrary base expression
    pub fn chain(base: Self, properties: Vec<Property>) -> Self {
        Self::Value {
            base: Box::new(base),
            properties,
        }
    }

    /// Append an accessor to a value chain (or start one)
    pub fn access(self, name: impl Into<String>) -> Self {
        self.push_property(Property::Accessor(name.into()))
    }

    /// Append an indexer to a value chain (or start one)
    pub fn index(self, index: Self) -> Self {
        self.push_property(Property::Index(Box::new(index)))
    }

    fn push_property(self, property: Property) -> Self {
        match self {
            Self::Value {
                base,
                mut properties,
            } => {
                properties.push(property);
                Self::Value { base, properties }
            }
            other => Self::chain(other, vec![property]),
        }
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            arguments: args,
            is_new: false,
        }
    }

    /// Create a constructor call: `new Callee(args)`
    pub fn new_instance(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            arguments: args,
            is_new: true,
        }
    }

    /// Create an assignment
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assign {
            target: Box::new(target),
            value: Box::new(value),
            context: AssignContext::Plain,
        }
    }

    /// Create an object literal entry: `key: value`
    pub fn property(key: impl Into<String>, value: Self) -> Self {
        Self::Assign {
            target: Box::new(Self::value(key)),
            value: Box::new(value),
            context: AssignContext::Object,
        }
    }

    /// Create a binary operator expression
    pub fn op(operator: impl Into<String>, first: Self, second: Self) -> Self {
        Self::Op {
            operator: operator.into(),
            first: Box::new(first),
            second: Some(Box::new(second)),
        }
    }

    /// Create a unary operator expression
    pub fn unary(operator: impl Into<String>, operand: Self) -> Self {
        Self::Op {
            operator: operator.into(),
            first: Box::new(operand),
            second: None,
        }
    }

    /// Create a function definition
    pub fn code(params: Vec<String>, body: Self) -> Self {
        Self::Code {
            params,
            body: Box::new(body.wrap()),
        }
    }

    /// Create an object literal
    pub const fn object(entries: Vec<Self>) -> Self {
        Self::Object(entries)
    }

    /// Create an array literal
    pub const fn array(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }

    /// Create a sequence
    pub const fn sequence(nodes: Vec<Self>) -> Self {
        Self::Sequence(nodes)
    }

    /// Create a comment block
    pub fn comment(lines: Vec<String>) -> Self {
        Self::Comment(lines)
    }

    /// Wrap in parentheses (the inner sequence is flattened)
    pub fn paren(self) -> Self {
        Self::Parenthetical(Box::new(self.flatten()))
    }

    /// Create a conditional without an else branch
    pub fn if_then(condition: Self, then_branch: Self) -> Self {
        Self::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch.flatten()),
            else_branch: None,
        }
    }

    /// Create a conditional with both branches
    pub fn if_else(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch.flatten()),
            else_branch: Some(Box::new(else_branch.flatten())),
        }
    }

    /// Create an inverted conditional: the condition is negated with `!`
    pub fn unless(condition: Self, then_branch: Self, else_branch: Option<Self>) -> Self {
        Self::If {
            condition: Box::new(Self::unary("!", condition)),
            then_branch: Box::new(then_branch.flatten()),
            else_branch: else_branch.map(|branch| Box::new(branch.flatten())),
        }
    }

    /// Attach an else branch to the innermost `if` of an else-if chain.
    ///
    /// Non-`If` nodes are returned unchanged.
    pub fn add_else(self, else_body: Self) -> Self {
        let (condition, then_branch, else_branch) = match self {
            Self::If {
                condition,
                then_branch,
                else_branch,
            } => (condition, then_branch, else_branch),
            other => return other,
        };
        let else_body = else_body.flatten();
        let else_branch = match else_branch.map(|branch| *branch) {
            None => else_body,
            Some(nested @ Self::If { .. }) => nested.add_else(else_body),
            Some(Self::Sequence(mut nodes)) => {
                nodes.push(else_body);
                Self::Sequence(nodes)
            }
            Some(existing) => Self::Sequence(vec![existing, else_body]),
        };
        Self::If {
            condition,
            then_branch,
            else_branch: Some(Box::new(else_branch)),
        }
    }

    /// Create a while loop
    pub fn while_loop(condition: Self, body: Self) -> Self {
        Self::While {
            condition: Box::new(condition),
            body: Box::new(body.wrap()),
        }
    }

    /// Create a for loop binding `name` to each element of `source`
    pub fn for_in(body: Self, name: impl Into<String>, source: Self) -> Self {
        Self::For {
            body: Box::new(body.wrap()),
            name: name.into(),
            source: Box::new(source),
            index: None,
        }
    }

    /// Create a for loop that also binds the element index
    pub fn for_in_indexed(
        body: Self,
        name: impl Into<String>,
        index: impl Into<String>,
        source: Self,
    ) -> Self {
        Self::For {
            body: Box::new(body.wrap()),
            name: name.into(),
            source: Box::new(source),
            index: Some(index.into()),
        }
    }

    /// Create a try statement
    pub fn try_catch(body: Self, catch_clause: Option<CatchClause>, finally: Option<Self>) -> Self {
        Self::Try {
            body: Box::new(body.wrap()),
            catch_clause,
            finally_block: finally.map(|block| Box::new(block.wrap())),
        }
    }

    /// Create a throw statement
    pub fn throw(expr: Self) -> Self {
        Self::Throw(Box::new(expr))
    }

    /// Create a return statement
    pub fn ret(expr: Self) -> Self {
        Self::Return(Box::new(expr))
    }
}

impl CatchClause {
    pub fn new(param: impl Into<String>, body: Node) -> Self {
        Self {
            param: param.into(),
            body: Box::new(body.wrap()),
        }
    }
}
