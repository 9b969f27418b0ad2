//! Expression parsing implementation
//!
//! Recursive descent for primary expressions plus precedence climbing for
//! binary operators.
//!
//! # Grammar
//!
//! ```text
//! expression ::= primary binoprhs
//! binoprhs   ::= (binop primary)*
//! primary    ::= identifierexpr | numberexpr | parenexpr
//! identifierexpr ::= identifier
//!                  | identifier '(' (expression (',' expression)*)? ')'
//! parenexpr  ::= '(' expression ')'
//! ```
//!
//! Binary operators come from the precedence table in [`super::parse`];
//! equal-precedence chains associate to the left.
//!
//! All parsing methods are implemented as methods on the [`Parser`] struct.

use crate::parser::ast::Expr;
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a full expression: a primary followed by any binary operator
    /// tail.
    pub fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let lhs = self.parse_primary()?;
        self.parse_binop_rhs(0, lhs)
    }

    /// Precedence climbing over the operator tail.
    ///
    /// Consumes operators while their precedence is at least `min_prec`. A
    /// tentative right-hand side is re-absorbed recursively whenever the
    /// operator after it binds tighter than the one just consumed, which
    /// yields left associativity for equal precedence and correct grouping
    /// for mixed precedence.
    fn parse_binop_rhs(
        &mut self,
        min_prec: i32,
        mut lhs: Expr,
    ) -> Result<Expr, SyntaxError> {
        loop {
            let (op, prec) = match self.pending_binop() {
                Some((op, prec)) if prec >= min_prec => (op, prec),
                _ => return Ok(lhs),
            };
            self.bump(); // eat the operator

            let mut rhs = self.parse_primary()?;

            // If the next operator binds tighter than `op`, it takes `rhs`
            // as its left-hand side first.
            if let Some((_, next_prec)) = self.pending_binop() {
                if prec < next_prec {
                    rhs = self.parse_binop_rhs(prec + 1, rhs)?;
                }
            }

            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    /// Dispatch on the current token to a primary expression form.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.current() {
            Token::Ident(_) => self.parse_identifier_expr(),
            Token::Number(_) => self.parse_number_expr(),
            Token::Char('(') => self.parse_paren_expr(),
            _ => Err(self.syntax_error(format!(
                "unknown token when expecting an expression, found {}",
                self.current()
            ))),
        }
    }

    /// Variable reference, or a call when the identifier is immediately
    /// followed by `(`.
    fn parse_identifier_expr(&mut self) -> Result<Expr, SyntaxError> {
        let name = self.expect_identifier("Expected identifier")?;

        if !self.check_char('(') {
            return Ok(Expr::Variable(name));
        }

        self.bump(); // eat '('
        let args = self.parse_argument_list()?;
        self.bump(); // eat ')'

        Ok(Expr::Call { callee: name, args })
    }

    /// Comma-separated, possibly empty argument list; the closing `)` is
    /// left for the caller.
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();

        if self.check_char(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if self.check_char(')') {
                break;
            }
            if !self.check_char(',') {
                return Err(
                    self.syntax_error("Expected ')' or ',' in argument list")
                );
            }
            self.bump();
        }

        Ok(args)
    }

    fn parse_number_expr(&mut self) -> Result<Expr, SyntaxError> {
        let value = match *self.current() {
            Token::Number(value) => value,
            _ => return Err(self.syntax_error("Expected number")),
        };
        self.bump(); // consume the number
        Ok(Expr::Number(value))
    }

    fn parse_paren_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.bump(); // eat '('
        let expr = self.parse_expression()?;
        self.expect_char(')', "expected ')'")?;
        Ok(expr)
    }
}
