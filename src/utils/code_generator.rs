//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;

/// Alphabet for generated codes: base-36, lowercase.
const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 4;

/// Draws a random 4-character base-36 short code.
///
/// Uniqueness is probabilistic only; callers must probe the store and retry
/// on collision (see `UrlService`). The store's uniqueness constraint remains
/// the final arbiter.
///
/// # Examples
///
/// ```
/// let code = snaplink::utils::code_generator::generate_code();
/// assert_eq!(code.len(), 4);
/// assert!(code.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 1-30 characters
/// - Allowed characters: lowercase letters, digits, hyphens
/// - Cannot start or end with a hyphen
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > 30 {
        return Err(AppError::validation("Custom alias must be 1-30 characters"));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::validation(
            "Custom alias can only contain lowercase letters, digits, and hyphens",
        ));
    }

    if code.starts_with('-') || code.ends_with('-') {
        return Err(AppError::validation(
            "Custom alias cannot start or end with a hyphen",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_base36_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_generate_code_varies_across_draws() {
        // 36^4 possible codes; 50 draws colliding into one value would mean
        // a broken generator, not bad luck.
        let codes: HashSet<String> = (0..50).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_validate_accepts_simple_alias() {
        assert!(validate_custom_code("my-link").is_ok());
        assert!(validate_custom_code("promo2025").is_ok());
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_too_long() {
        let code = "a".repeat(31);
        assert!(validate_custom_code(&code).is_err());
    }

    #[test]
    fn test_validate_rejects_uppercase() {
        assert!(validate_custom_code("MyLink").is_err());
    }

    #[test]
    fn test_validate_rejects_special_characters() {
        assert!(validate_custom_code("my_link").is_err());
        assert!(validate_custom_code("my link").is_err());
    }

    #[test]
    fn test_validate_rejects_edge_hyphens() {
        assert!(validate_custom_code("-link").is_err());
        assert!(validate_custom_code("link-").is_err());
        assert!(validate_custom_code("my-link").is_ok());
    }
}
