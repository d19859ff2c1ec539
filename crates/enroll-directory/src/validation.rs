//! Input validation for registration and edit requests.

use crate::errors::{DirectoryError, Result};

/// Validate email address format.
///
/// Checks basic email format requirements:
/// - Contains exactly one @ symbol
/// - Has non-empty local and domain parts
/// - Domain has at least one dot
/// - Length is within RFC 5321 limits (max 254 characters)
pub fn validate_email(email: &str) -> Result<()> {
    if email.len() > 254 {
        return Err(DirectoryError::Validation(
            "Email address too long (max 254 characters)".to_string(),
        ));
    }

    if email.is_empty() {
        return Err(DirectoryError::Validation(
            "Email address cannot be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(DirectoryError::Validation(
            "Invalid email format: must contain exactly one @ symbol".to_string(),
        ));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 {
        return Err(DirectoryError::Validation(
            "Invalid email: local part must be 1-64 characters".to_string(),
        ));
    }

    if domain.is_empty() || domain.len() > 253 {
        return Err(DirectoryError::Validation(
            "Invalid email: domain must be 1-253 characters".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(DirectoryError::Validation(
            "Invalid email: domain must contain at least one dot".to_string(),
        ));
    }

    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' || c == '+')
    {
        return Err(DirectoryError::Validation(
            "Invalid email: local part contains invalid characters".to_string(),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(DirectoryError::Validation(
            "Invalid email: domain contains invalid characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a username: 1-64 ASCII alphanumerics plus `.`, `_`, `-`.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() || username.len() > 64 {
        return Err(DirectoryError::Validation(
            "Username must be 1-64 characters".to_string(),
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
    {
        return Err(DirectoryError::Validation(
            "Username contains invalid characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a password.
///
/// The portal imposes no strength policy; only non-empty and a length cap
/// to bound the hashing input.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(DirectoryError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(DirectoryError::Validation(
            "Password must be at most 128 characters long".to_string(),
        ));
    }

    Ok(())
}

/// Validate a display name: non-empty, bounded.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DirectoryError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }

    if name.len() > 128 {
        return Err(DirectoryError::Validation(
            "Name must be at most 128 characters long".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user+tag@subdomain.example.co.uk").is_ok());
        assert!(validate_email("a@x.com").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("user@no-dot").is_err());
        assert!(validate_email(&"a".repeat(255)).is_err()); // Too long
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("a1").is_ok());
        assert!(validate_username("some.user_name-1").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_password() {
        // No strength policy: single characters are accepted.
        assert!(validate_password("p").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"a".repeat(129)).is_err());
    }
}
