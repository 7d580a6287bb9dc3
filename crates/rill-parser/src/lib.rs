//! Parser for Rill.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into an arena-allocated expression tree. A top-level
//! `let name = expr` without a following `in` parses as a
//! declaration; everything else parses as an expression.

mod parser;

pub use parser::Parser;

use rill_diagnostic::Diagnostic;
use rill_lexer::Lexer;
use rill_syntax::Program;

/// Parse source code into a program.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    diagnostics.extend(parser.diagnostics());
    (program, diagnostics)
}
