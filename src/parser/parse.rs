//! Parser session and core infrastructure
//!
//! This module provides the [`Parser`] struct, the [`SyntaxError`] type, the
//! binary operator precedence table, and the helper methods shared by the
//! grammar implementations:
//! - `expressions`: expression parsing with precedence climbing
//! - `declarations`: function prototypes and definitions
//!
//! # Parser Architecture
//!
//! A hand-written recursive descent parser. Grammar methods are split across
//! files using `impl Parser` blocks, so each module extends the parser with
//! related rules while sharing the session state: the lexer, the single
//! current token of lookahead, and the precedence table.

use crate::parser::lexer::{Lexer, SourceLocation, Token};
use rustc_hash::FxHashMap;
use std::fmt;

/// The single parse error kind: a grammar violation with a human-readable
/// message and the position of the offending token.
#[derive(Debug)]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Precedence table for single-character binary operators. Higher binds
/// tighter; an absent or non-positive entry means "not a binary operator".
pub fn binop_precedence() -> FxHashMap<char, i32> {
    let mut table = FxHashMap::default();
    table.insert('<', 10);
    table.insert('+', 20);
    table.insert('-', 20);
    table.insert('*', 40);
    table
}

/// Recursive descent parser for VSL.
///
/// One `Parser` is one parsing session: it owns the lexer cursor and the
/// current token, so independent sessions never share state.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    precedence: FxHashMap<char, i32>,
}

impl Parser {
    /// Create a session over `source` and prime the first token.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            precedence: binop_precedence(),
        }
    }

    /// The current lookahead token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Advance to the next token, discarding the current one.
    pub fn bump(&mut self) {
        self.current = self.lexer.next_token();
    }

    pub fn at_eof(&self) -> bool {
        matches!(self.current, Token::Eof)
    }

    // ===== Helper methods =====

    /// The pending binary operator and its precedence, if the current token
    /// is one.
    pub(crate) fn pending_binop(&self) -> Option<(char, i32)> {
        let Token::Char(c) = self.current else {
            return None;
        };
        match self.precedence.get(&c) {
            Some(&prec) if prec > 0 => Some((c, prec)),
            _ => None,
        }
    }

    pub(crate) fn check_char(&self, c: char) -> bool {
        matches!(self.current, Token::Char(x) if x == c)
    }

    pub(crate) fn expect_char(
        &mut self,
        c: char,
        message: &str,
    ) -> Result<(), SyntaxError> {
        if self.check_char(c) {
            self.bump();
            Ok(())
        } else {
            Err(self.syntax_error(format!("{}, found {}", message, self.current)))
        }
    }

    pub(crate) fn expect_identifier(
        &mut self,
        message: &str,
    ) -> Result<String, SyntaxError> {
        if let Token::Ident(name) = &self.current {
            let name = name.clone();
            self.bump();
            Ok(name)
        } else {
            Err(self.syntax_error(format!("{}, found {}", message, self.current)))
        }
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            message: message.into(),
            location: self.lexer.token_location(),
        }
    }
}
