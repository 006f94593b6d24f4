//! Dotted-decimal text recognition.
//!
//! Two stages, both pure: `tokenize` turns the input into `Integer` and
//! `Dot` tokens, and [`parse_dotted`] recognizes `INTEGER (DOT INTEGER)*`
//! or the empty input. Range-checking against `0..=255` is the caller's
//! business; the lexer converts digit runs of any length.

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Integer { value: u64, pos: usize },
    Dot { pos: usize },
}

fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(pos, ch)) = chars.peek() {
        if ch == '.' {
            chars.next();
            tokens.push(Token::Dot { pos });
        } else if ch.is_ascii_digit() {
            let mut value: u64 = 0;
            while let Some(&(_, digit)) = chars.peek() {
                let Some(d) = digit.to_digit(10) else { break };
                // Saturation keeps absurd runs above the byte range check.
                value = value.saturating_mul(10).saturating_add(u64::from(d));
                chars.next();
            }
            tokens.push(Token::Integer { value, pos });
        } else {
            return Err(ParseError::IllegalCharacter { ch, pos });
        }
    }
    Ok(tokens)
}

/// Parse dotted-decimal text into its integer groups, in textual order.
///
/// The empty input yields an empty sequence. Leading, trailing and doubled
/// dots are syntax errors carrying the offending token and position.
pub(crate) fn parse_dotted(text: &str) -> Result<Vec<u64>, ParseError> {
    let tokens = tokenize(text)?;
    let mut groups = Vec::new();
    let mut iter = tokens.iter();

    match iter.next() {
        None => return Ok(groups),
        Some(Token::Integer { value, .. }) => groups.push(*value),
        Some(Token::Dot { pos }) => {
            return Err(ParseError::UnexpectedToken {
                found: ".".into(),
                pos: *pos,
            })
        }
    }
    loop {
        match iter.next() {
            None => return Ok(groups),
            Some(Token::Dot { .. }) => {}
            Some(Token::Integer { value, pos }) => {
                return Err(ParseError::UnexpectedToken {
                    found: value.to_string(),
                    pos: *pos,
                })
            }
        }
        match iter.next() {
            None => return Err(ParseError::UnexpectedEnd),
            Some(Token::Integer { value, .. }) => groups.push(*value),
            Some(Token::Dot { pos }) => {
                return Err(ParseError::UnexpectedToken {
                    found: ".".into(),
                    pos: *pos,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_groups() {
        assert_eq!(
            parse_dotted("116.4.63.132.41.82").unwrap(),
            vec![116, 4, 63, 132, 41, 82]
        );
    }

    #[test]
    fn single_group_and_empty() {
        assert_eq!(parse_dotted("255").unwrap(), vec![255]);
        assert_eq!(parse_dotted("").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn no_range_bound_in_the_lexer() {
        assert_eq!(parse_dotted("99999").unwrap(), vec![99999]);
        // Way past u64; saturates rather than wrapping below 256.
        let huge = parse_dotted("99999999999999999999999999999").unwrap();
        assert!(huge[0] > 255);
    }

    #[test]
    fn doubled_dot() {
        assert_eq!(
            parse_dotted("1..2"),
            Err(ParseError::UnexpectedToken {
                found: ".".into(),
                pos: 2,
            })
        );
    }

    #[test]
    fn leading_dot() {
        assert_eq!(
            parse_dotted(".1.2"),
            Err(ParseError::UnexpectedToken {
                found: ".".into(),
                pos: 0,
            })
        );
    }

    #[test]
    fn trailing_dot() {
        assert_eq!(parse_dotted("1.2."), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn illegal_character() {
        assert_eq!(
            parse_dotted("1. 2"),
            Err(ParseError::IllegalCharacter { ch: ' ', pos: 2 })
        );
        assert_eq!(
            parse_dotted("1.2.x"),
            Err(ParseError::IllegalCharacter { ch: 'x', pos: 4 })
        );
        // Whitespace is not trimmed by the grammar.
        assert_eq!(
            parse_dotted(" 1.2"),
            Err(ParseError::IllegalCharacter { ch: ' ', pos: 0 })
        );
    }
}
