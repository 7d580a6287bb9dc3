//! The `rill eval` command.

use crate::commands::{Outcome, Session};
use crate::output;
use rill_diagnostic::emit;
use std::rc::Rc;

pub fn run(expr: &str, verbose: bool) -> Result<(), String> {
    let (program, diagnostics) = rill_parser::parse(expr);

    for diag in &diagnostics {
        emit(expr, "<eval>", diag);
    }

    if !diagnostics.is_empty() {
        return Err("parse error".to_string());
    }

    let arena = Rc::new(program.arena);
    let mut session = Session::new();

    for item in &program.items {
        match session.run_item(&arena, item) {
            Ok(Outcome::Declared { name, ty }) => {
                if verbose {
                    output::info(&format!("{} : {}", name, ty));
                }
            }
            Ok(Outcome::Evaluated { value, ty, trace }) => {
                if verbose {
                    for equation in &trace.equations {
                        println!("{}", equation);
                    }
                    print!("{}", trace.substitution);
                }
                output::success(&format!("{} :: {}", value, ty));
            }
            Err(err) => {
                err.emit(expr, "<eval>");
                return Err(err.describe().to_string());
            }
        }
    }

    Ok(())
}
