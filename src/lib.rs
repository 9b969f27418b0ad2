//! # Introduction
//!
//! vslfront is a front-end for VSL, a minimal expression-oriented language.
//! It turns a stream of source characters into an abstract syntax tree and
//! renders the result as an indented diagnostic tree. There is no type
//! checking, no semantic analysis, and no code generation.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Tree dump
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST.
//! 2. [`dump`] — renders a parsed tree as indented text, one node per line,
//!    indentation proportional to structural depth.
//! 3. [`repl`] — the driver loop: reads input, dispatches each top-level
//!    construct to the parser, and reports on two text channels (diagnostics
//!    and tree dumps).
//!
//! ## Supported VSL subset
//!
//! Expressions: numeric literals, variable references, calls, parenthesized
//! groups, and the binary operators `<`, `+`, `-`, `*`.
//! Definitions: `FUNC name(params) { expression }`.
//! The control-flow keywords (`IF`, `WHILE`, `VAR`, ...) are recognized by
//! the lexer but reserved for future use.

pub mod dump;
pub mod parser;
pub mod repl;
