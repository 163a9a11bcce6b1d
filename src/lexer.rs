use std::fmt;

use crate::ast::{Token, TokenKind};

/// Offset of a token or character in the source, counted in characters.
pub type Position = usize;

/// Errors produced while turning source text into tokens.
///
/// Lexing never recovers: the first bad character aborts the whole
/// parse call.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that cannot begin any token.
    UnexpectedCharacter { character: char, position: Position },
    /// A string literal with no closing quote before end of input.
    UnterminatedString { position: Position },
    /// A backslash escape the language does not define.
    InvalidEscape { character: char, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unexpected character '{}' at position {}",
                    character, position
                )
            }
            LexError::UnterminatedString { position } => {
                write!(
                    f,
                    "Unterminated string starting at position {}: missing closing quote",
                    position
                )
            }
            LexError::InvalidEscape {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid escape sequence '\\{}' at position {}",
                    character, position
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(LexError::InvalidEscape {
                                character: ch,
                                position: self.position,
                            });
                        }
                        None => return Err(LexError::UnterminatedString { position: start }),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self) -> f64 {
        let mut number = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !seen_dot
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Digits with at most one interior dot always parse.
        number.parse::<f64>().expect("valid numeric literal")
    }

    /// Produce the next token, skipping leading whitespace.
    ///
    /// Greedy: every token consumes the longest valid run starting at
    /// the cursor, and the cursor always advances.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.position;

        let kind = match self.current_char() {
            None => TokenKind::Eof,
            Some('@') => {
                self.advance();
                TokenKind::At
            }
            Some('|') => {
                self.advance();
                TokenKind::Pipe
            }
            Some('.') => {
                self.advance();
                TokenKind::Dot
            }
            Some(',') => {
                self.advance();
                TokenKind::Comma
            }
            Some(':') => {
                self.advance();
                TokenKind::Colon
            }
            Some('(') => {
                self.advance();
                TokenKind::LParen
            }
            Some(')') => {
                self.advance();
                TokenKind::RParen
            }
            Some('[') => {
                self.advance();
                TokenKind::LBracket
            }
            Some(']') => {
                self.advance();
                TokenKind::RBracket
            }
            Some('{') => {
                self.advance();
                TokenKind::LBrace
            }
            Some('}') => {
                self.advance();
                TokenKind::RBrace
            }
            Some('"') => TokenKind::String(self.read_string()?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "true" => TokenKind::Boolean(true),
                    "false" => TokenKind::Boolean(false),
                    "null" => TokenKind::Null,
                    _ => TokenKind::Identifier(ident),
                }
            }
            Some(ch) if ch.is_ascii_digit() => TokenKind::Number(self.read_number()),
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    position: self.position,
                });
            }
        };

        Ok(Token::new(kind, start))
    }

    /// Run the lexer to completion, returning the full token sequence.
    ///
    /// The sequence always ends with exactly one [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true false null truthy");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(false));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Null);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("truthy".to_string())
    );
}

#[test]
fn test_pipe() {
    let mut lexer = Lexer::new("@.items | take 2");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::At);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("items".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pipe);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("take".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(2.0));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}
