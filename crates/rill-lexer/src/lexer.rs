//! The Rill lexer.
//! Rill 词法分析器。

use crate::token::{Token, TokenKind};
use rill_common::Span;
use rill_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// The Rill lexer.
/// Rill 词法分析器。
///
/// Converts source code into a sequence of tokens.
/// 将源代码转换为 token 序列。
pub struct Lexer<'src> {
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
    /// Collected diagnostics (errors/warnings)
    /// 收集的诊断信息（错误/警告）
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    /// Get the next token.
    /// 获取下一个 token。
    fn next_token(&mut self) -> Token {
        // Skip whitespace - 跳过空白字符
        self.skip_whitespace();

        let start = self.pos;

        // Check for end of input - 检查是否到达输入末尾
        let Some((_pos, ch)) = self.advance() else {
            return Token::new(TokenKind::Eof, Span::from_usize(start, start));
        };

        let kind = match ch {
            // Single character tokens - 单字符 token
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '=' => TokenKind::Eq,

            // Lambda, in either spelling - 两种写法的 lambda
            '\\' | 'λ' => TokenKind::Lambda,

            // Arrow or comment - 箭头或注释
            '-' => {
                if self.peek_char() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    self.error_unexpected_char(ch, start);
                    TokenKind::Error
                }
            }

            // Line comment: # to end of line - 行注释：# 到行尾
            '#' => {
                self.skip_line_comment();
                return self.next_token();
            }

            // String literal - 字符串字面量
            '"' => self.string_literal(),

            // Number literal - 数字字面量
            '0'..='9' => self.number(ch),

            // Identifier or keyword - 标识符或关键字
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(ch),

            _ => {
                self.error_unexpected_char(ch, start);
                TokenKind::Error
            }
        };

        Token::new(kind, Span::from_usize(start, self.pos))
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Skip whitespace characters.
    /// 跳过空白字符。
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skip a line comment (# to end of line).
    /// 跳过行注释（# 到行尾）。
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Parse a string literal (double-quoted).
    /// 解析字符串字面量（双引号包围）。
    fn string_literal(&mut self) -> TokenKind {
        let mut value = String::new();
        let start = self.pos;

        loop {
            match self.advance() {
                Some((_, '"')) => break,
                Some((_, '\\')) => {
                    if let Some(escaped) = self.escape_char() {
                        value.push(escaped);
                    }
                }
                Some((_, ch)) => value.push(ch),
                None => {
                    let span = Span::from_usize(start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(DiagnosticKind::Lexer, span, "unterminated string")
                            .with_code(ErrorCode::UnterminatedString),
                    );
                    return TokenKind::Error;
                }
            }
        }

        TokenKind::String(value)
    }

    /// Parse an escape character sequence.
    /// 解析转义字符序列。
    fn escape_char(&mut self) -> Option<char> {
        match self.advance() {
            Some((_, 'n')) => Some('\n'),  // newline - 换行
            Some((_, 'r')) => Some('\r'),  // carriage return - 回车
            Some((_, 't')) => Some('\t'),  // tab - 制表符
            Some((_, '\\')) => Some('\\'), // backslash - 反斜杠
            Some((_, '"')) => Some('"'),   // double quote - 双引号
            Some((pos, ch)) => {
                let span = Span::from_usize(pos, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        span,
                        format!("invalid escape sequence: \\{}", ch),
                    )
                    .with_code(ErrorCode::InvalidEscape),
                );
                None
            }
            None => None,
        }
    }

    /// Parse an integer literal.
    /// 解析整数字面量。
    fn number(&mut self, first: char) -> TokenKind {
        let start = self.pos - first.len_utf8();
        let mut value = String::from(first);

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() || ch == '_' {
                if ch != '_' {
                    value.push(ch);
                }
                self.advance();
            } else {
                break;
            }
        }

        match value.parse::<i64>() {
            Ok(i) => TokenKind::Int(i),
            Err(_) => {
                let span = Span::from_usize(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        span,
                        format!("integer literal out of range: {}", value),
                    )
                    .with_code(ErrorCode::InvalidNumber),
                );
                TokenKind::Error
            }
        }
    }

    /// Parse an identifier or keyword.
    /// 解析标识符或关键字。
    fn identifier(&mut self, first: char) -> TokenKind {
        let mut value = String::from(first);

        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords - 检查是否为关键字
        TokenKind::keyword_from_str(&value).unwrap_or(TokenKind::Ident(value))
    }

    /// Report an unexpected character error.
    /// 报告意外字符错误。
    fn error_unexpected_char(&mut self, ch: char, pos: usize) {
        let span = Span::from_usize(pos, self.pos);
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                span,
                format!("unexpected character: '{}'", ch),
            )
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_label(Label::new(span, "unexpected character here")),
        );
    }
}
