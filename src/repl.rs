//! Read-parse-dump driver loop
//!
//! Drives the parser over whole sources or interactive lines and reports on
//! two independent text channels: prompts, success notices, and syntax
//! errors go to the diagnostic channel; rendered trees go to the result
//! channel. Both channels are injected writers so tests can capture them.
//!
//! Error recovery is best-effort: after a failed construct the driver skips
//! exactly one token and resumes, which can desynchronize on deeply
//! malformed input.

use std::io::{self, BufRead, Write};

use crate::dump;
use crate::parser::lexer::Token;
use crate::parser::parse::Parser;

/// Driver over a result channel `out` and a diagnostic channel `err`.
pub struct Driver<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> Driver<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Parse every top-level construct in `source`, dumping each tree as it
    /// is recognized.
    pub fn run_source(&mut self, source: &str) -> io::Result<()> {
        let mut parser = Parser::new(source);
        loop {
            match parser.current() {
                Token::Eof => break,
                // Ignore top-level semicolons.
                Token::Char(';') => parser.bump(),
                Token::Func => self.handle_definition(&mut parser)?,
                _ => self.handle_top_level_expression(&mut parser)?,
            }
        }
        Ok(())
    }

    /// Interactive loop: prompt, read a line, parse it, repeat until end of
    /// input.
    pub fn run_repl<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        loop {
            write!(self.err, "ready> ")?;
            self.err.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            self.run_source(&line)?;
        }
        Ok(())
    }

    fn handle_definition(&mut self, parser: &mut Parser) -> io::Result<()> {
        match parser.parse_definition() {
            Ok(func) => {
                writeln!(self.err, "Parsed a function definition.")?;
                write!(self.out, "{}", dump::render_function(&func))?;
            }
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                // Skip one token for error recovery.
                parser.bump();
            }
        }
        Ok(())
    }

    fn handle_top_level_expression(
        &mut self,
        parser: &mut Parser,
    ) -> io::Result<()> {
        match parser.parse_top_level_expr() {
            Ok(func) => {
                writeln!(self.err, "Parsed a top-level expr")?;
                write!(self.out, "{}", dump::render_expr(&func.body))?;
            }
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                // Skip one token for error recovery.
                parser.bump();
            }
        }
        Ok(())
    }
}
