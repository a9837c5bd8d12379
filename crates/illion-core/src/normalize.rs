//! Input normalization and validation

use std::borrow::Cow;

use crate::error::IllionError;

/// Left-pad a digit string with zeros so its length is a multiple of 3.
///
/// Adds 0, 1 or 2 zeros. An empty string stays empty. The input is
/// borrowed back when it needs no padding.
pub fn pad_to_multiple_of_3(digits: &str) -> Cow<'_, str> {
    match digits.len() % 3 {
        1 => Cow::Owned(format!("00{digits}")),
        2 => Cow::Owned(format!("0{digits}")),
        _ => Cow::Borrowed(digits),
    }
}

/// Check that every character is an ASCII decimal digit.
///
/// The unchecked entry points skip this; it backs the `try_*` variants.
pub fn validate_digits(digits: &str) -> Result<(), IllionError> {
    match digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, found)) => Err(IllionError::NonDigit { index, found }),
        None => Ok(()),
    }
}
