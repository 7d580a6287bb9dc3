//! The `rill repl` command.

use crate::commands::{Outcome, Session};
use rill_diagnostic::emit;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::rc::Rc;

pub fn run() -> Result<(), String> {
    println!("Rill REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    // One session for the whole REPL: declarations extend the shared
    // environments, and fresh type variables never collide between
    // lines because the annotator is threaded through as well
    let mut session = Session::new();
    let mut verbose = false;

    loop {
        let readline = rl.readline("rill> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Handle REPL commands
                if line.starts_with(':') {
                    match line {
                        ":quit" | ":q" => break,
                        ":help" | ":h" => {
                            println!("Commands:");
                            println!("  :help, :h     Show this help");
                            println!("  :quit, :q     Exit the REPL");
                            println!("  :env          Show current bindings");
                            println!("  :verbose, :v  Toggle printing equations and substitutions");
                        }
                        ":env" => {
                            for (name, ty) in session.type_env().visible_bindings() {
                                println!("{}: {}", name, ty);
                            }
                        }
                        ":verbose" | ":v" => {
                            verbose = !verbose;
                            println!("Turned {} verbose mode.", if verbose { "on" } else { "off" });
                        }
                        _ => {
                            println!("Unknown command: {}", line);
                        }
                    }
                    continue;
                }

                // Parse the input
                let (program, diagnostics) = rill_parser::parse(line);

                if !diagnostics.is_empty() {
                    for diag in &diagnostics {
                        emit(line, "<repl>", diag);
                    }
                    continue;
                }

                let arena = Rc::new(program.arena);

                for item in &program.items {
                    match session.run_item(&arena, item) {
                        Ok(Outcome::Declared { name, ty }) => {
                            println!("{} : {}", name, ty);
                        }
                        Ok(Outcome::Evaluated { value, ty, trace }) => {
                            if verbose {
                                for equation in &trace.equations {
                                    println!("{}", equation);
                                }
                                print!("{}", trace.substitution);
                            }
                            println!("{} :: {}", value, ty);
                        }
                        Err(err) => {
                            err.emit(line, "<repl>");
                            break;
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
