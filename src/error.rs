use core::fmt;

/// Errors produced while parsing textual address representations.
///
/// Every variant is an argument error: the input text is malformed and the
/// caller recovers by fixing it. Length and chunk-size preconditions are
/// not represented here; violating those panics (see the respective
/// methods on [`Address`](crate::Address)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer hit a character that is neither an ASCII digit nor `.`.
    IllegalCharacter { ch: char, pos: usize },
    /// The token sequence does not match `INTEGER (DOT INTEGER)*`.
    UnexpectedToken { found: String, pos: usize },
    /// Input ended where an integer was required (trailing dot).
    UnexpectedEnd,
    /// Hex parsing left a digit count other than 6 or 12.
    HexDigitCount { found: usize },
    /// Dotted-decimal parsing found a group count other than 3 or 6.
    GroupCount { found: usize },
    /// A dotted-decimal group does not fit in a byte.
    OctetOutOfRange { value: u64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IllegalCharacter { ch, pos } => {
                write!(f, "illegal character {ch:?} at position {pos}")
            }
            ParseError::UnexpectedToken { found, pos } => {
                write!(f, "unexpected {found:?} at position {pos}")
            }
            ParseError::UnexpectedEnd => {
                write!(f, "unexpected end of input, expecting an integer")
            }
            ParseError::HexDigitCount { found } => {
                write!(f, "expecting 6 or 12 hex digits, found {found}")
            }
            ParseError::GroupCount { found } => {
                write!(f, "expecting 3 or 6 dotted-decimal groups, found {found}")
            }
            ParseError::OctetOutOfRange { value } => {
                write!(f, "dotted-decimal group {value} does not fit in a byte")
            }
        }
    }
}

impl std::error::Error for ParseError {}
