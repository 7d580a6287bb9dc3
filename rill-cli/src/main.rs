//! Rill CLI - The Rill language command line interface.
//! Rill CLI - Rill 语言的命令行界面。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "rill")]
#[command(author, version, about = "Rill - A tiny typed lambda calculus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Infer the type of an expression and evaluate it. / 推断表达式类型并求值。
    Eval {
        /// The expression to evaluate. / 要求值的表达式。
        expr: String,
    },

    /// Run a Rill file. / 运行 Rill 文件。
    Run {
        /// The file to run. / 要运行的文件。
        file: String,
    },

    /// Type check a file. / 类型检查文件。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { expr } => commands::eval::run(&expr, cli.verbose),
        Commands::Run { file } => commands::run::run(&file, cli.verbose),
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
        Commands::Repl => commands::repl::run(),
    };

    if let Err(message) = result {
        output::error(&message);
        std::process::exit(1);
    }
}
