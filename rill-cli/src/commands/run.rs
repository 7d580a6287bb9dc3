//! The `rill run` command.

use crate::commands::{Outcome, Session};
use crate::output;
use rill_diagnostic::emit;
use std::fs;
use std::rc::Rc;

pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (program, diagnostics) = rill_parser::parse(&source);

    for diag in &diagnostics {
        emit(&source, file, diag);
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
            Ok(Outcome::Evaluated { value, ty, .. }) => {
                println!("{} :: {}", value, ty);
            }
            Err(err) => {
                err.emit(&source, file);
                return Err(err.describe().to_string());
            }
        }
    }

    Ok(())
}
