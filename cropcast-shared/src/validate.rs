/// Input validation helpers
///
/// Pure functions used by the request handlers to check field presence and
/// email format before anything touches the store.
///
/// # Example
///
/// ```
/// use cropcast_shared::validate::{has_required_fields, is_valid_email};
///
/// assert!(is_valid_email("jane@example.com"));
/// assert!(!is_valid_email("no-at-sign"));
/// assert!(has_required_fields("Jane", "Doe", "jane@example.com"));
/// ```

use regex::Regex;
use std::sync::LazyLock;

/// Accepted email shape: one `@`, a local part of alphanumerics and `_.+-`,
/// a domain of alphanumerics/hyphens, then a dot-separated suffix.
///
/// Note that `a@b` is rejected (no dot after the domain) while `a@b.c`
/// is accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("email pattern is a valid regex")
});

/// Returns true if `email` matches the accepted email shape.
///
/// Empty input never matches.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true iff all three identity fields are non-empty.
pub fn has_required_fields(first_name: &str, last_name: &str, email: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty() && !email.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid = vec![
            "jane@example.com",
            "a@b.c",
            "user+tag@mail-server.co.uk",
            "first.last@sub.domain.io",
            "under_score@host.org",
        ];

        for email in valid {
            assert!(is_valid_email(email), "'{}' should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid = vec![
            "",
            "no-at-sign",
            "a@b",
            "@missing-local.com",
            "missing-domain@",
            "two@@ats.com",
            "spaces in@local.com",
        ];

        for email in invalid {
            assert!(!is_valid_email(email), "'{}' should be invalid", email);
        }
    }

    #[test]
    fn test_has_required_fields() {
        assert!(has_required_fields("Jane", "Doe", "jane@x.com"));
        assert!(!has_required_fields("", "Doe", "jane@x.com"));
        assert!(!has_required_fields("Jane", "", "jane@x.com"));
        assert!(!has_required_fields("Jane", "Doe", ""));
        assert!(!has_required_fields("", "", ""));
    }
}
