use std::fmt;
use std::str::FromStr;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Illegal character or unterminated string
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing identifier in `let`
    E1002,
    /// Missing `=` in `let`
    E1003,
    /// Unclosed grouped expression
    E1004,
    /// Missing `{` before a block
    E1005,
    /// Unclosed block
    E1006,
    /// Missing `(` after `if`
    E1007,
    /// Missing `)` after an `if` condition
    E1008,
    /// Missing `(` after `fn`
    E1009,
    /// Parameter is not an identifier
    E1010,
    /// Missing `,` between parameters
    E1011,
    /// Missing `,` between call arguments
    E1012,
    /// Missing `,` between array elements
    E1013,
    /// Missing `(` after `puts`
    E1014,
    /// Integer literal does not fit in 64 bits
    E1015,

    // Runtime Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Operand type mismatch
    E2002,
    /// Wrong number of arguments
    E2003,
    /// Non-boolean condition
    E2004,
    /// Calling a value that is not a function
    E2005,
    /// Division by zero
    E2006,
    /// Integer overflow
    E2007,
    /// Call depth limit exceeded
    E2008,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known error code.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code: {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

/// Case-insensitive: `e1001` parses as `E1001`.
impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
