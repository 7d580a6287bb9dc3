//! Error codes for Rill diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscape,
    InvalidNumber,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedIdentifier,

    // Type errors (E0200 - E0299)
    TypeMismatch,
    UnboundVariable,
    InfiniteType,
    InternalInconsistency,

    // Eval errors (E0300 - E0399)
    DivisionByZero,
    NotAFunction,
    WrongOperandType,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::InvalidEscape => "E0003",
            ErrorCode::InvalidNumber => "E0004",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::ExpectedIdentifier => "E0102",

            // Type
            ErrorCode::TypeMismatch => "E0200",
            ErrorCode::UnboundVariable => "E0201",
            ErrorCode::InfiniteType => "E0202",
            ErrorCode::InternalInconsistency => "E0203",

            // Eval
            ErrorCode::DivisionByZero => "E0300",
            ErrorCode::NotAFunction => "E0301",
            ErrorCode::WrongOperandType => "E0302",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
