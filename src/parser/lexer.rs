//! Lexer (tokenizer) for VSL source text
//!
//! Converts raw source characters into [`Token`]s, one at a time. The lexer
//! is pull-based: the parser requests the next token on demand and keeps a
//! single token of lookahead. Reserved keywords (`IF`, `WHILE`, `VAR`, ...)
//! are recognized here for forward compatibility even though no grammar rule
//! consumes them yet.
//!
//! A single `/` starts a line comment, so `/` can never reach the parser as
//! an operator token. This is a long-standing VSL grammar limitation and is
//! kept as-is.

use std::fmt;

/// Source position for error reporting (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token variants produced by the lexer.
///
/// An explicit kind discriminant with owned payloads. Identifier and number
/// payloads are carried in the token itself, so they stay valid for as long
/// as the caller holds the token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Func,
    Print,
    Return,
    Continue,

    // Control keywords, reserved but not yet consumed by any grammar rule
    If,
    Then,
    Else,
    Fi,
    While,
    Do,
    Done,

    // Reserved for user-defined operators
    Binary,
    Unary,

    // Variable declaration and assignment, reserved
    Var,
    Assign,

    /// Identifier run that matched no keyword
    Ident(String),
    /// Numeric literal
    Number(f64),
    /// Any other single character: operators and punctuation
    Char(char),

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Func => write!(f, "'FUNC'"),
            Token::Print => write!(f, "'PRINT'"),
            Token::Return => write!(f, "'RETURN'"),
            Token::Continue => write!(f, "'CONTINUE'"),
            Token::If => write!(f, "'IF'"),
            Token::Then => write!(f, "'THEN'"),
            Token::Else => write!(f, "'ELSE'"),
            Token::Fi => write!(f, "'FI'"),
            Token::While => write!(f, "'WHILE'"),
            Token::Do => write!(f, "'DO'"),
            Token::Done => write!(f, "'DONE'"),
            Token::Binary => write!(f, "'binary'"),
            Token::Unary => write!(f, "'unary'"),
            Token::Var => write!(f, "'VAR'"),
            Token::Assign => write!(f, "':='"),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Char(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Pull-based lexer over a VSL source buffer.
///
/// Holds the input cursor and line/column counters; the unconsumed character
/// at the cursor is the one character of pushback the tokenizer rules need.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    token_start: SourceLocation,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            token_start: SourceLocation::new(1, 1),
        }
    }

    /// Return the next token, consuming input as needed.
    pub fn next_token(&mut self) -> Token {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }

        self.token_start = self.current_location();

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => self.identifier_or_keyword(),
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some('/') => {
                // Comment until end of line, then produce the next real token.
                while let Some(c) = self.peek() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    self.advance();
                }
                if self.is_at_end() {
                    Token::Eof
                } else {
                    self.next_token()
                }
            }
            // Don't consume past the end of input.
            None => Token::Eof,
            Some(c) => {
                self.advance();
                Token::Char(c)
            }
        }
    }

    /// Where the most recently returned token started.
    pub fn token_location(&self) -> SourceLocation {
        self.token_start
    }

    /// Lex an identifier run `[a-zA-Z][a-zA-Z0-9]*` and classify it against
    /// the keyword set (case-sensitive).
    fn identifier_or_keyword(&mut self) -> Token {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() {
                ident.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "FUNC" => Token::Func,
            "PRINT" => Token::Print,
            "RETURN" => Token::Return,
            "CONTINUE" => Token::Continue,
            "IF" => Token::If,
            "THEN" => Token::Then,
            "ELSE" => Token::Else,
            "FI" => Token::Fi,
            "WHILE" => Token::While,
            "DO" => Token::Do,
            "DONE" => Token::Done,
            "binary" => Token::Binary,
            "unary" => Token::Unary,
            "VAR" => Token::Var,
            // An alphanumeric run can never equal ":=", so Assign stays
            // unreachable from source text. Kept to mirror the full reserved
            // keyword table.
            ":=" => Token::Assign,
            _ => Token::Ident(ident),
        }
    }

    /// Lex a number `[0-9.]+`. The run is maximal and unvalidated; the value
    /// is the longest prefix that parses, as `strtod` would read it.
    fn number(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token::Number(numeric_value(&text))
    }

    /// Peek at the current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Value of the longest numeric prefix of `text`, or 0.0 when no prefix
/// parses. Matches `strtod` on degenerate runs like `1.2.3` or `.`.
fn numeric_value(text: &str) -> f64 {
    let mut end = text.len();
    while end > 0 {
        if let Ok(value) = text[..end].parse() {
            return value;
        }
        end -= 1;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token == Token::Eof;
            out.push(token);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            tokens("FUNC IF THEN ELSE FI WHILE DO DONE"),
            vec![
                Token::Func,
                Token::If,
                Token::Then,
                Token::Else,
                Token::Fi,
                Token::While,
                Token::Do,
                Token::Done,
                Token::Eof,
            ]
        );
        assert_eq!(
            tokens("PRINT RETURN CONTINUE VAR binary unary"),
            vec![
                Token::Print,
                Token::Return,
                Token::Continue,
                Token::Var,
                Token::Binary,
                Token::Unary,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            tokens("func Binary"),
            vec![
                Token::Ident("func".to_string()),
                Token::Ident("Binary".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_payload() {
        assert_eq!(
            tokens("foo bar2"),
            vec![
                Token::Ident("foo".to_string()),
                Token::Ident("bar2".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("3.14 42 .5"),
            vec![
                Token::Number(3.14),
                Token::Number(42.0),
                Token::Number(0.5),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_multi_dot_number_takes_longest_valid_prefix() {
        assert_eq!(tokens("1.2.3"), vec![Token::Number(1.2), Token::Eof]);
        assert_eq!(tokens("."), vec![Token::Number(0.0), Token::Eof]);
    }

    #[test]
    fn test_operator_and_punctuation_chars() {
        assert_eq!(
            tokens("a+b*(c,d);{}"),
            vec![
                Token::Ident("a".to_string()),
                Token::Char('+'),
                Token::Ident("b".to_string()),
                Token::Char('*'),
                Token::Char('('),
                Token::Ident("c".to_string()),
                Token::Char(','),
                Token::Ident("d".to_string()),
                Token::Char(')'),
                Token::Char(';'),
                Token::Char('{'),
                Token::Char('}'),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_slash_starts_a_comment() {
        // A lone '/' discards the rest of the line; it is never an operator.
        assert_eq!(
            tokens("1 / this is all comment\n2"),
            vec![Token::Number(1.0), Token::Number(2.0), Token::Eof]
        );
        assert_eq!(tokens("/ only a comment"), vec![Token::Eof]);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), Token::Ident("x".to_string()));
        assert_eq!(lexer.next_token(), Token::Eof);
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn test_token_location_tracks_lines() {
        let mut lexer = Lexer::new("a\n  b");
        lexer.next_token();
        assert_eq!(lexer.token_location(), SourceLocation::new(1, 1));
        lexer.next_token();
        assert_eq!(lexer.token_location(), SourceLocation::new(2, 3));
    }
}
