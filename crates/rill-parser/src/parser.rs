//! The Rill parser.

use rill_common::Span;
use rill_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use rill_lexer::{Token, TokenKind};
use rill_syntax::{ExprArena, ExprId, ExprKind, Item, ItemKind, Literal, Program};

/// The Rill parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    arena: ExprArena,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            arena: ExprArena::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse a complete program: a sequence of top-level items.
    pub fn parse_program(&mut self) -> Program {
        let mut items = Vec::new();

        while !self.at_end() {
            let before = self.pos;
            items.push(self.parse_item());

            // Must make progress even on malformed input
            if self.pos == before {
                self.advance();
            }
        }

        Program {
            arena: std::mem::take(&mut self.arena),
            items,
        }
    }

    /// Parse one top-level item.
    ///
    /// `let NAME = expr` is a declaration unless an `in` follows the
    /// bound value, in which case it continues as a let-expression.
    fn parse_item(&mut self) -> Item {
        let start = self.current_span();

        if self.check(TokenKind::Let) {
            self.advance();
            let (name, name_span) = self.parse_ident();
            self.expect(TokenKind::Eq);
            let value = self.parse_expr();

            if self.eat(TokenKind::In) {
                let body = self.parse_expr();
                let name_node = self.arena.alloc(ExprKind::Var(name), name_span);
                let span = start.merge(self.previous_span());
                let id = self.arena.alloc(
                    ExprKind::Let {
                        name: name_node,
                        value,
                        body,
                    },
                    span,
                );
                return Item {
                    kind: ItemKind::Expr(id),
                    span,
                };
            }

            let span = start.merge(self.previous_span());
            return Item {
                kind: ItemKind::Decl { name, value },
                span,
            };
        }

        let id = self.parse_expr();
        let span = start.merge(self.previous_span());
        Item {
            kind: ItemKind::Expr(id),
            span,
        }
    }

    // ========== Expressions ==========

    fn parse_expr(&mut self) -> ExprId {
        match self.current_kind() {
            TokenKind::Lambda => self.parse_lambda(),
            TokenKind::If => self.parse_if(),
            TokenKind::Let => self.parse_let(),
            _ => self.parse_apply(),
        }
    }

    fn parse_lambda(&mut self) -> ExprId {
        let start = self.current_span();
        self.advance(); // \

        let (name, name_span) = self.parse_ident();
        let param = self.arena.alloc(ExprKind::Var(name), name_span);
        self.expect(TokenKind::Arrow);
        let body = self.parse_expr();

        let span = start.merge(self.previous_span());
        self.arena.alloc(ExprKind::Lambda { param, body }, span)
    }

    fn parse_if(&mut self) -> ExprId {
        let start = self.current_span();
        self.advance(); // if

        let cond = self.parse_expr();
        self.expect(TokenKind::Then);
        let then_branch = self.parse_expr();
        self.expect(TokenKind::Else);
        let else_branch = self.parse_expr();

        let span = start.merge(self.previous_span());
        self.arena.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    fn parse_let(&mut self) -> ExprId {
        let start = self.current_span();
        self.advance(); // let

        let (name, name_span) = self.parse_ident();
        let name_node = self.arena.alloc(ExprKind::Var(name), name_span);
        self.expect(TokenKind::Eq);
        let value = self.parse_expr();
        self.expect(TokenKind::In);
        let body = self.parse_expr();

        let span = start.merge(self.previous_span());
        self.arena.alloc(
            ExprKind::Let {
                name: name_node,
                value,
                body,
            },
            span,
        )
    }

    /// Application by juxtaposition, left-associative: `f x y`.
    fn parse_apply(&mut self) -> ExprId {
        let mut callee = self.parse_atom();

        while self.at_atom_start() {
            let arg = self.parse_atom();
            let span = self.arena.get(callee).span.merge(self.arena.get(arg).span);
            callee = self.arena.alloc(ExprKind::Apply { callee, arg }, span);
        }

        callee
    }

    fn parse_atom(&mut self) -> ExprId {
        let span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Int(i) => {
                self.advance();
                self.arena.alloc(ExprKind::Literal(Literal::Int(i)), span)
            }
            TokenKind::True => {
                self.advance();
                self.arena
                    .alloc(ExprKind::Literal(Literal::Bool(true)), span)
            }
            TokenKind::False => {
                self.advance();
                self.arena
                    .alloc(ExprKind::Literal(Literal::Bool(false)), span)
            }
            TokenKind::String(s) => {
                self.advance();
                self.arena.alloc(ExprKind::Literal(Literal::Str(s)), span)
            }
            TokenKind::Ident(name) => {
                self.advance();
                self.arena.alloc(ExprKind::Var(name), span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr();
                self.expect(TokenKind::RParen);
                inner
            }
            TokenKind::Error => {
                // The lexer already reported this token
                self.advance();
                self.error_expr(span)
            }
            _ => {
                self.error_code("expected expression", ErrorCode::ExpectedExpression);
                self.advance();
                self.error_expr(span)
            }
        }
    }

    /// Placeholder node after a parse error; callers bail on the
    /// collected diagnostics before the tree is used.
    fn error_expr(&mut self, span: Span) -> ExprId {
        self.arena.alloc(ExprKind::Literal(Literal::Int(0)), span)
    }

    fn at_atom_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::String(_)
                | TokenKind::Ident(_)
                | TokenKind::LParen
        )
    }

    fn parse_ident(&mut self) -> (String, Span) {
        let span = self.current_span();
        if let TokenKind::Ident(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            (name, span)
        } else {
            self.error_code("expected identifier", ErrorCode::ExpectedIdentifier);
            ("_".to_string(), span)
        }
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(&kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) {
        if !self.eat(kind.clone()) {
            self.error(&format!("expected {:?}", kind));
        }
    }

    fn error(&mut self, message: &str) {
        self.error_code(message, ErrorCode::UnexpectedToken);
    }

    fn error_code(&mut self, message: &str, code: ErrorCode) {
        let span = self.current_span();
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Parser, span, message)
                .with_code(code)
                .with_label(Label::new(span, "here")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_syntax::pretty;

    fn parse_ok(source: &str) -> Program {
        let lexer = rill_lexer::Lexer::new(source);
        let (tokens, lex_diags) = lexer.tokenize();
        assert!(lex_diags.is_empty(), "lexer errors: {:?}", lex_diags);

        let mut parser = Parser::new(tokens);
        let program = parser.parse_program();
        let diags = parser.diagnostics();
        assert!(diags.is_empty(), "parser errors: {:?}", diags);
        program
    }

    fn expr_of(program: &Program) -> ExprId {
        match program.items[0].kind {
            ItemKind::Expr(id) => id,
            _ => panic!("expected an expression item"),
        }
    }

    #[test]
    fn test_parse_application_is_left_associative() {
        let program = parse_ok("add x y");
        let root = expr_of(&program);
        assert_eq!(pretty(&program.arena, root), "add x y");

        let ExprKind::Apply { callee, .. } = &program.arena.get(root).kind else {
            panic!("expected application");
        };
        assert!(matches!(
            program.arena.get(*callee).kind,
            ExprKind::Apply { .. }
        ));
    }

    #[test]
    fn test_parse_lambda() {
        let program = parse_ok("\\x -> add x 1");
        let root = expr_of(&program);
        assert_eq!(pretty(&program.arena, root), "λx.add x 1");
    }

    #[test]
    fn test_parse_lambda_unicode() {
        let program = parse_ok("λx -> x");
        let root = expr_of(&program);
        assert!(matches!(
            program.arena.get(root).kind,
            ExprKind::Lambda { .. }
        ));
    }

    #[test]
    fn test_parse_if() {
        let program = parse_ok("if zero 0 then \"a\" else \"b\"");
        let root = expr_of(&program);
        assert!(matches!(program.arena.get(root).kind, ExprKind::If { .. }));
    }

    #[test]
    fn test_parse_let_with_in_is_expression() {
        let program = parse_ok("let x = 1 in x");
        assert_eq!(program.items.len(), 1);
        let root = expr_of(&program);
        assert!(matches!(program.arena.get(root).kind, ExprKind::Let { .. }));
    }

    #[test]
    fn test_parse_let_without_in_is_declaration() {
        let program = parse_ok("let inc = \\x -> add x 1");
        assert_eq!(program.items.len(), 1);
        match &program.items[0].kind {
            ItemKind::Decl { name, .. } => assert_eq!(name, "inc"),
            other => panic!("expected a declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_parens_group_application() {
        let program = parse_ok("f (g x)");
        let root = expr_of(&program);
        let ExprKind::Apply { arg, .. } = &program.arena.get(root).kind else {
            panic!("expected application");
        };
        assert!(matches!(
            program.arena.get(*arg).kind,
            ExprKind::Apply { .. }
        ));
    }

    #[test]
    fn test_parse_several_items() {
        let program = parse_ok("let one = 1\nlet two = 2\nadd one two");
        assert_eq!(program.items.len(), 3);
    }

    #[test]
    fn test_parse_error_reports_diagnostic() {
        let lexer = rill_lexer::Lexer::new("if then");
        let (tokens, _) = lexer.tokenize();
        let mut parser = Parser::new(tokens);
        parser.parse_program();
        assert!(!parser.diagnostics().is_empty());
    }
}
