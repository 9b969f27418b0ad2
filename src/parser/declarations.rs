//! Declaration parsing implementation
//!
//! Function prototypes and definitions, plus the anonymous wrapping of bare
//! top-level expressions.
//!
//! # Grammar
//!
//! ```text
//! definition   ::= 'FUNC' prototype '{' expression '}'
//! prototype    ::= identifier '(' param_list ')'
//! toplevelexpr ::= expression
//! ```
//!
//! The parameter list is deliberately lenient: identifiers and commas are
//! accepted in any order and count, so `(a,,b)` and `(a b)` both declare the
//! parameters `a` and `b`. Existing VSL sources rely on this.
//!
//! All parsing methods are implemented as methods on the [`Parser`] struct.

use crate::parser::ast::{Function, Prototype};
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a prototype: the function name and its parameter names.
    pub(crate) fn parse_prototype(&mut self) -> Result<Prototype, SyntaxError> {
        let name = self.expect_identifier("Expected function name in prototype")?;

        if !self.check_char('(') {
            return Err(self.syntax_error("Expected '(' in prototype"));
        }
        self.bump(); // eat '('

        // Lenient list: collect identifiers, skip commas, stop on anything
        // else.
        let mut params = Vec::new();
        loop {
            match self.current() {
                Token::Ident(param) => {
                    params.push(param.clone());
                    self.bump();
                }
                Token::Char(',') => self.bump(),
                _ => break,
            }
        }

        self.expect_char(')', "Expected ')' in prototype")?;

        Ok(Prototype::new(name, params))
    }

    /// Parse a function definition. The body is a single expression; there
    /// is no statement sequencing.
    pub fn parse_definition(&mut self) -> Result<Function, SyntaxError> {
        self.bump(); // eat FUNC

        let proto = self.parse_prototype()?;

        self.expect_char('{', "Expected '{' in function body")?;
        let body = self.parse_expression()?;
        self.expect_char('}', "Expected '}' in function body")?;

        Ok(Function::new(proto, body))
    }

    /// Parse a bare top-level expression as an anonymous function.
    pub fn parse_top_level_expr(&mut self) -> Result<Function, SyntaxError> {
        let body = self.parse_expression()?;
        Ok(Function::new(Prototype::anonymous(), body))
    }
}
