//! CLI subcommands.

pub mod check;
pub mod eval;
pub mod repl;
pub mod run;
mod session;

pub use session::{Outcome, Session, SessionError};
