//! Text Normalization
//!
//! Turns generator output into the text that lands in the document, and
//! parses the count typed by the user.

/// Separator placed between consecutive blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Message shown by the count prompt for rejected input
pub const COUNT_VALIDATION_MESSAGE: &str = "Value must be an integer";

/// Join blocks with a blank line and fix the generator's double space.
///
/// hipsum.co separates sentences with two spaces. Only the first occurrence
/// in the joined text is collapsed.
pub fn assemble(blocks: &[String]) -> String {
    collapse_first_double_space(&blocks.join(BLOCK_SEPARATOR))
}

/// Replace the first `"  "` with a single space
pub fn collapse_first_double_space(text: &str) -> String {
    text.replacen("  ", " ", 1)
}

/// Why a count was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    #[error("Value must be an integer")]
    NotInteger,

    /// An integer, but wider than the request can carry
    #[error("Value is too large")]
    OutOfRange,
}

/// Parse a count: optional sign and decimal digits, surrounding whitespace ignored
pub fn parse_count(text: &str) -> Result<i64, CountError> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountError::NotInteger);
    }
    text.parse::<i64>().map_err(|_| CountError::OutOfRange)
}

/// Input box validator for the count prompt
pub fn validate_count(text: &str) -> Option<String> {
    parse_count(text).err().map(|e| e.to_string())
}
