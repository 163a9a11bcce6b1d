use std::collections::HashMap;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// The AST is the internal representation of a program after parsing.
/// It captures the structure and meaning of the source for evaluation.
/// Every expression is one of four kinds; parenthetical grouping never
/// appears here, it is fully resolved during parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value
    ///
    /// # Examples
    /// ```text
    /// 42
    /// "hello"
    /// [1, 2, 3]
    /// {"name": fetch_name}
    /// ```
    Literal(Literal),

    /// Reference path
    ///
    /// An ordered, never-empty list of name segments identifying a value
    /// to look up. The first segment may be the root marker `@`; later
    /// segments never are. Resolution against the call stack is the
    /// evaluator's job.
    ///
    /// # Examples
    /// ```text
    /// somefn          // ["somefn"]
    /// @               // ["@"]
    /// @.hello.there   // ["@", "hello", "there"]
    /// ```
    Reference { path: Vec<String> },

    /// Function application by juxtaposition
    ///
    /// The function position is usually a reference, but any expression
    /// is legal there after parenthetical grouping. Always carries at
    /// least one argument; a lone primary is never wrapped.
    ///
    /// # Examples
    /// ```text
    /// sup nernd hi
    /// (compose f g) x
    /// ```
    Application {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// Left-to-right pipeline
    ///
    /// Each stage consumes the prior stage's result. Always carries at
    /// least two stages; a single-stage pipe degenerates to the stage
    /// itself.
    ///
    /// # Examples
    /// ```text
    /// fetch | parse | render
    /// hello | (there | hi) | whatup
    /// ```
    Pipeline { stages: Vec<Expr> },
}

/// The payload of a literal expression.
///
/// Scalar variants hold their value directly; arrays and objects hold
/// expressions, since their elements are only reduced to values at
/// evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Literal null
    Null,

    /// Boolean literal
    Boolean(bool),

    /// Numeric literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// ```
    String(String),

    /// Array literal: an ordered sequence of element expressions
    ///
    /// # Example
    /// ```text
    /// [1, fetch_two, 3]
    /// ```
    Array(Vec<Expr>),

    /// Object literal: string keys mapped to value expressions
    ///
    /// Insertion order is not significant.
    ///
    /// # Example
    /// ```text
    /// {"name": @.name, "total": sum @.items}
    /// ```
    Object(HashMap<String, Expr>),
}

impl Literal {
    /// The value-type tag for this literal, as used in the JSON
    /// description of the AST.
    pub fn value_type(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Boolean(_) => "boolean",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
            Literal::Array(_) => "array",
            Literal::Object(_) => "object",
        }
    }
}

impl Expr {
    /// Build a reference from path segments. Convenience for tests and
    /// host tooling; the path must be non-empty.
    pub fn reference<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Expr {
        Expr::Reference {
            path: path.into_iter().map(Into::into).collect(),
        }
    }
}
