//! The `rill check` command.
//! `rill check` 命令。

use crate::output;
use rill_diagnostic::emit;
use rill_syntax::ItemKind;
use rill_typeck::{Inference, TypeEnv};
use std::fs;

/// Run type inference over a Rill file without evaluating it.
/// 对 Rill 文件运行类型推断，但不求值。
pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    // Parse
    // 解析
    let (program, diagnostics) = rill_parser::parse(&source);

    for diag in &diagnostics {
        emit(&source, file, diag);
    }

    if !diagnostics.is_empty() {
        output::error(&format!("{} parse error(s) found", diagnostics.len()));
        return Err("parse error".to_string());
    }

    if verbose {
        output::info(&format!("Parsed {} items", program.items.len()));
    }

    // Infer, threading declarations through one session
    // 推断类型，声明在同一会话中依次生效
    let mut inference = Inference::new(TypeEnv::with_builtins());

    for item in &program.items {
        let result = match &item.kind {
            ItemKind::Decl { name, value } => inference
                .declare(name, &program.arena, *value)
                .map(|ty| (Some(name.as_str()), ty)),
            ItemKind::Expr(root) => inference
                .infer(&program.arena, *root)
                .map(|ty| (None, ty)),
        };

        match result {
            Ok((name, ty)) => {
                if verbose {
                    output::info(&format!("{} : {}", name.unwrap_or("_"), ty));
                }
            }
            Err(err) => {
                emit(&source, file, &err.to_diagnostic());
                return Err("type error".to_string());
            }
        }
    }

    output::success("OK - No errors found");
    Ok(())
}
