use std::fmt;

use crate::lexer::Position;

/// The classification of a single lexical unit.
///
/// Tokens fall into three families:
///
/// - **Value literals** - [`Number`](TokenKind::Number),
///   [`String`](TokenKind::String), [`Boolean`](TokenKind::Boolean),
///   [`Null`](TokenKind::Null). These carry the literal value itself.
/// - **Reference atoms** - [`Identifier`](TokenKind::Identifier) and the
///   standalone root marker [`At`](TokenKind::At). The parser assembles
///   dot-separated runs of these into reference paths.
/// - **Special symbols** - the structural characters of the grammar:
///   parentheses, brackets, braces, pipe, dot, comma, and colon.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Value literals
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Number(f64),

    /// String literal enclosed in double quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "item #1"
    /// ```
    String(String),

    /// Boolean values
    ///
    /// # Examples
    /// ```text
    /// true
    /// false
    /// ```
    Boolean(bool),

    /// Null value
    Null,

    // Reference atoms
    /// Bare identifier: a reference path segment
    ///
    /// Must start with a letter or underscore, followed by letters,
    /// digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// user
    /// item_count
    /// _internal
    /// ```
    Identifier(String),

    /// The root marker `@`
    ///
    /// References the current/root value handed to the evaluator.
    /// Only legal as the first segment of a reference path.
    ///
    /// # Examples
    /// ```text
    /// @
    /// @.items.name
    /// ```
    At,

    // Special symbols
    /// Pipeline operator
    ///
    /// Chains stages together and terminates the argument list of the
    /// application to its left.
    ///
    /// # Examples
    /// ```text
    /// fetch | parse | render
    /// ```
    Pipe,

    /// Dot for reference path chaining
    Dot,

    /// Comma for separating array elements or object entries
    Comma,

    /// Colon for object literal key-value pairs
    Colon,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Left bracket for array literals
    LBracket,

    /// Right bracket
    RBracket,

    /// Left brace for object literals
    LBrace,

    /// Right brace
    RBrace,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Whether a token of this kind can begin a primary expression.
    ///
    /// This is the single tie-break rule for greedy argument collection:
    /// an application keeps consuming arguments exactly as long as the
    /// next token starts a primary. Pipes, closing delimiters, commas,
    /// colons, dots, and end of input all say no.
    pub fn starts_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::String(_)
                | TokenKind::Boolean(_)
                | TokenKind::Null
                | TokenKind::Identifier(_)
                | TokenKind::At
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::String(s) => write!(f, "string \"{}\"", s),
            TokenKind::Boolean(b) => write!(f, "{}", b),
            TokenKind::Null => write!(f, "null"),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::At => write!(f, "'@'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// One lexical unit: a [`TokenKind`] plus the offset it was read at.
///
/// Tokens are immutable once produced. The lexer emits them in source
/// order, terminated by a single [`TokenKind::Eof`]; the parser reads the
/// sequence through a cursor and never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }
}
