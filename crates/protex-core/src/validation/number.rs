use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NumberInputError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("'{0}' is too large")]
    TooLarge(String),
}

/// Parses a count typed into a numeric entry field.
///
/// Blank input is `Ok(None)`. Only plain ASCII digits are accepted: no sign,
/// decimal point, exponent or digit grouping.
pub fn parse_count(input: &str) -> Result<Option<u32>, NumberInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberInputError::NotANumber(trimmed.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| NumberInputError::TooLarge(trimmed.to_string()))
}
