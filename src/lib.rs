//! Front end for the flume expression language.
//!
//! Turns source text into a typed AST of four node kinds (literals,
//! references, applications, pipelines) for a separate evaluator to
//! walk. Parsing is a pure function of the input: no I/O, no shared
//! state between calls, first error aborts.
//!
//! ```
//! use flume_lang::{parse, Expr};
//!
//! let expr = parse("load | filter active | count").unwrap();
//! assert!(matches!(expr, Expr::Pipeline { .. }));
//! ```

pub mod ast;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Expr, Literal, Token, TokenKind};
pub use lexer::{LexError, Lexer, Position};
pub use output::{to_json, to_json_pretty, to_source};
pub use parser::{ParseError, Parser};

/// Errors that can occur while parsing source text
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Lexer error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "Lex error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

/// Parse source text into an AST, surfacing failure as a value.
///
/// Never panics; lex and parse failures come back as [`Error`].
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    let expr = Parser::new(tokens).parse()?;
    Ok(expr)
}

/// Parse source text into an AST, panicking on failure.
///
/// Same error classification as [`parse`]; the panic message is the
/// error's display form. Intended for tests and tooling that treat a
/// malformed program as a bug.
pub fn parse_or_panic(source: &str) -> Expr {
    match parse(source) {
        Ok(expr) => expr,
        Err(err) => panic!("{}", err),
    }
}
