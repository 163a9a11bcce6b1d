use std::collections::HashMap;
use std::fmt;

use crate::ast::{Expr, Literal, Token, TokenKind};
use crate::lexer::Position;

/// A structural violation found while reducing tokens to an AST.
///
/// Always fatal to the current parse call; no partial AST is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at position {})", self.message, self.position)
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a finished token sequence.
///
/// Grammar levels, tightest binding first:
///
/// 1. **Primary** - literals, references, array/object literals,
///    parenthesized groups
/// 2. **Application** - a primary juxtaposed with further primaries
/// 3. **Pipeline** - applications separated by `|`
///
/// Each grammar rule is a pure function of the cursor position: it
/// takes the index of the token it starts at and returns the built node
/// together with the index just past it. No rule mutates the parser, so
/// individual rules can be exercised in isolation and a `Parser` can be
/// shared freely.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // Every grammar rule reads through the Eof sentinel instead of
        // bounds-checking; the lexer always supplies one, but a caller
        // building token sequences by hand might not.
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let position = tokens.last().map(|t| t.position + 1).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, position));
        }
        Parser { tokens }
    }

    /// Parse the whole token sequence into a single expression.
    ///
    /// Fails on empty input and on any tokens left over after the
    /// top-level pipeline rule returns.
    pub fn parse(&self) -> Result<Expr, ParseError> {
        if *self.kind(0) == TokenKind::Eof {
            return Err(self.error(0, "empty input"));
        }

        let (expr, pos) = self.pipeline(0)?;

        match self.kind(pos) {
            TokenKind::Eof => Ok(expr),
            kind => Err(self.error(pos, format!("unexpected {} after expression", kind))),
        }
    }

    /// Pipeline level: one or more applications separated by `|`.
    ///
    /// A single stage yields that stage directly; `Pipeline` nodes never
    /// carry fewer than two stages.
    fn pipeline(&self, pos: usize) -> Result<(Expr, usize), ParseError> {
        let (first, mut pos) = self.application(pos)?;
        let mut stages = vec![first];

        while *self.kind(pos) == TokenKind::Pipe {
            let (stage, next) = self.application(pos + 1)?;
            stages.push(stage);
            pos = next;
        }

        let expr = if stages.len() == 1 {
            stages.remove(0)
        } else {
            Expr::Pipeline { stages }
        };
        Ok((expr, pos))
    }

    /// Application level: a primary juxtaposed with zero or more further
    /// primaries.
    ///
    /// Arguments are collected greedily and left-associatively: as long
    /// as the next token can start a primary, it is another argument. A
    /// pipe, a closing delimiter, or end of input stops collection. With
    /// no arguments the lone primary is returned unwrapped.
    fn application(&self, pos: usize) -> Result<(Expr, usize), ParseError> {
        let (function, mut pos) = self.primary(pos)?;
        let mut arguments = Vec::new();

        while self.kind(pos).starts_expression() {
            let (argument, next) = self.primary(pos)?;
            arguments.push(argument);
            pos = next;
        }

        let expr = if arguments.is_empty() {
            function
        } else {
            Expr::Application {
                function: Box::new(function),
                arguments,
            }
        };
        Ok((expr, pos))
    }

    /// Primary level: literal values, references, array and object
    /// literals, and parenthesized groups.
    fn primary(&self, pos: usize) -> Result<(Expr, usize), ParseError> {
        match self.kind(pos) {
            // Literals
            TokenKind::Number(n) => Ok((Expr::Literal(Literal::Number(*n)), pos + 1)),
            TokenKind::String(s) => Ok((Expr::Literal(Literal::String(s.clone())), pos + 1)),
            TokenKind::Boolean(b) => Ok((Expr::Literal(Literal::Boolean(*b)), pos + 1)),
            TokenKind::Null => Ok((Expr::Literal(Literal::Null), pos + 1)),

            // References
            TokenKind::Identifier(name) => self.reference(name.clone(), pos + 1),
            TokenKind::At => self.reference("@".to_string(), pos + 1),

            // Grouping resolves to the inner expression; no node of its
            // own ever reaches the AST.
            TokenKind::LParen => {
                if *self.kind(pos + 1) == TokenKind::RParen {
                    return Err(self.error(pos, "empty parentheses"));
                }
                let (expr, next) = self.pipeline(pos + 1)?;
                let next = self.expect(next, &TokenKind::RParen)?;
                Ok((expr, next))
            }

            // Array literals
            TokenKind::LBracket => self.array_literal(pos + 1),
            // Object literals
            TokenKind::LBrace => self.object_literal(pos + 1),

            kind => Err(self.error(pos, format!("expected an expression, found {}", kind))),
        }
    }

    /// Reference path assembly: the first segment plus a greedy run of
    /// `.`-separated identifiers. `a.b.c` is one reference, never nested
    /// applications; a trailing dot is an error.
    fn reference(&self, first: String, mut pos: usize) -> Result<(Expr, usize), ParseError> {
        let mut path = vec![first];

        while *self.kind(pos) == TokenKind::Dot {
            match self.kind(pos + 1) {
                TokenKind::Identifier(name) => {
                    path.push(name.clone());
                    pos += 2;
                }
                kind => {
                    return Err(
                        self.error(pos + 1, format!("expected identifier after '.', found {}", kind))
                    );
                }
            }
        }

        Ok((Expr::Reference { path }, pos))
    }

    fn array_literal(&self, mut pos: usize) -> Result<(Expr, usize), ParseError> {
        let mut elements = Vec::new();

        while *self.kind(pos) != TokenKind::RBracket {
            if *self.kind(pos) == TokenKind::Eof {
                return Err(self.error(pos, "unterminated array literal"));
            }

            let (element, next) = self.pipeline(pos)?;
            elements.push(element);
            pos = next;

            if *self.kind(pos) != TokenKind::RBracket {
                pos = self.expect(pos, &TokenKind::Comma)?;
            }
        }

        Ok((Expr::Literal(Literal::Array(elements)), pos + 1))
    }

    fn object_literal(&self, mut pos: usize) -> Result<(Expr, usize), ParseError> {
        let mut entries = HashMap::new();

        while *self.kind(pos) != TokenKind::RBrace {
            if *self.kind(pos) == TokenKind::Eof {
                return Err(self.error(pos, "unterminated object literal"));
            }

            let key = match self.kind(pos) {
                TokenKind::String(s) => s.clone(),
                TokenKind::Identifier(s) => s.clone(),
                kind => {
                    return Err(
                        self.error(pos, format!("expected object key, found {}", kind))
                    );
                }
            };

            pos = self.expect(pos + 1, &TokenKind::Colon)?;

            let (value, next) = self.pipeline(pos)?;
            entries.insert(key, value);
            pos = next;

            if *self.kind(pos) != TokenKind::RBrace {
                pos = self.expect(pos, &TokenKind::Comma)?;
            }
        }

        Ok((Expr::Literal(Literal::Object(entries)), pos + 1))
    }

    fn expect(&self, pos: usize, expected: &TokenKind) -> Result<usize, ParseError> {
        if self.kind(pos) == expected {
            Ok(pos + 1)
        } else {
            Err(self.error(
                pos,
                format!("expected {}, found {}", expected, self.kind(pos)),
            ))
        }
    }

    /// Token kind at the cursor; positions past the end read as the Eof
    /// sentinel, so no rule needs a bounds check.
    fn kind(&self, pos: usize) -> &TokenKind {
        &self.tokens[pos.min(self.tokens.len() - 1)].kind
    }

    fn error(&self, pos: usize, message: impl Into<String>) -> ParseError {
        let position = self.tokens[pos.min(self.tokens.len() - 1)].position;
        ParseError {
            message: message.into(),
            position,
        }
    }
}
