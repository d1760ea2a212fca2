//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

// Pragmatic address shape: local@domain.tld, no whitespace, one '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$").unwrap()
});

/// Strip surrounding whitespace
///
/// Case is preserved: the address is the natural key shared with the user
/// directory, which matches it as stored.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}

/// Check if an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    let normalized = normalize_email(email);
    !normalized.is_empty() && normalized.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(&normalized)
}

/// Mask an email address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    let normalized = normalize_email(email);
    match normalized.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  a@x.com\n"), "a@x.com");
        assert_eq!(normalize_email("Jane.Doe@Example.com"), "Jane.Doe@Example.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("jane.doe+reset@mail.example.org"));
        assert!(is_valid_email(" padded@example.com "));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("no-tld@localhost"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_is_valid_email_rejects_overlong() {
        let local = "a".repeat(250);
        assert!(!is_valid_email(&format!("{}@x.com", local)));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("émile@example.fr"), "é***@example.fr");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
