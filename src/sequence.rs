//! Input sequence parsing
//!
//! This module is the validation boundary between raw user input and the
//! step generators. Input is a comma-separated list of base-10 integers;
//! tokens that fail to parse are dropped silently rather than failing the
//! whole parse, and the parse only errors when *no* token survives.
//!
//! The permissiveness is deliberate and load-bearing: `"1,a,2"` must
//! produce the same sequence as `"1,2"`.

use std::fmt;

/// Error raised when an input string yields no usable numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The raw input that failed to validate
    pub input: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid array of numbers: '{}'", self.input)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a comma-separated string into an ordered sequence of integers.
///
/// Tokens are trimmed before parsing. Tokens that do not parse as base-10
/// integers are dropped; the surviving numbers keep their relative order.
/// Returns [`ValidationError`] only when the result would be empty,
/// including the empty-string and all-tokens-invalid cases.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ValidationError> {
    let values: Vec<i64> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect();

    if values.is_empty() {
        return Err(ValidationError {
            input: input.to_string(),
        });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        assert_eq!(parse_sequence("3,1,2").unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_sequence(" 5 ,  4,3 ").unwrap(), vec![5, 4, 3]);
    }

    #[test]
    fn test_parse_drops_invalid_tokens() {
        // Non-numeric tokens vanish without failing the parse
        assert_eq!(parse_sequence("1,a,2").unwrap(), vec![1, 2]);
        assert_eq!(parse_sequence("x,7,,y,8").unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_parse_negative_numbers() {
        assert_eq!(parse_sequence("-3,0,-1").unwrap(), vec![-3, 0, -1]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_sequence("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(parse_sequence("").is_err());
    }

    #[test]
    fn test_parse_all_invalid_fails() {
        let err = parse_sequence("a,b,c").unwrap_err();
        assert_eq!(err.input, "a,b,c");
    }

    #[test]
    fn test_parse_preserves_duplicates() {
        assert_eq!(parse_sequence("2,2,1").unwrap(), vec![2, 2, 1]);
    }
}
