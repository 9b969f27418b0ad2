//! VSL source code parser
//!
//! This module transforms VSL source text into an Abstract Syntax Tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The parser session, errors, and the precedence table
//! - [`expressions`]: Expression grammar (precedence climbing)
//! - [`declarations`]: Function prototypes and definitions
//! - [`ast`]: AST node definitions
//!
//! # Supported VSL Subset
//!
//! - Expressions: numeric literals, variable references, calls,
//!   parenthesized groups, and the binary operators `<`, `+`, `-`, `*`
//! - Definitions: `FUNC name(params) { expression }`
//! - Control-flow keywords (`IF`, `WHILE`, `VAR`, ...) are lexed but
//!   reserved; no grammar rule consumes them
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary
//! operators. No external parser generator dependencies.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
