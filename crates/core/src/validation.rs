//! Input checks shared by the registration, sign-in and editing handlers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9.\-_]+@[a-z0-9\-_]+(\.[a-z0-9\-_]+){1,4}$").expect("valid regex")
});

/// Client-side password digests are 40 lowercase hex characters (SHA-1).
static PASSWORD_DIGEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("valid regex"));

/// Longest user name, email or post title the `users`/`blogs` columns hold.
pub const MAX_NAME_LEN: usize = 50;

/// Longest post summary the `blogs.summary` column holds.
pub const MAX_SUMMARY_LEN: usize = 200;

/// Lowercase `local@domain.tld` with one to four dotted labels after the host.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_password_digest(passwd: &str) -> bool {
    PASSWORD_DIGEST_RE.is_match(passwd)
}

/// Return the trimmed value, or a validation error on `field` when it is
/// missing or blank.
pub fn require_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::invalid_with(
            field,
            format!("{field} cannot be empty."),
        )),
    }
}

/// [`require_text`] that also rejects values longer than `max` characters.
pub fn require_text_max<'a>(
    field: &'static str,
    value: Option<&'a str>,
    max: usize,
) -> Result<&'a str, CoreError> {
    let value = require_text(field, value)?;
    if value.chars().count() > max {
        return Err(CoreError::invalid_with(
            field,
            format!("{field} must be at most {max} characters."),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b-c_d@mail.example.co.uk"));
    }

    #[test]
    fn rejects_bad_addresses() {
        assert!(!is_valid_email("Alice@Example.com"));
        assert!(!is_valid_email("alice@localhost"));
        assert!(!is_valid_email("alice@a.b.c.d.e.f"));
        assert!(!is_valid_email("alice example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn password_digest_shape() {
        assert!(is_password_digest(&"a1".repeat(20)));
        assert!(!is_password_digest(&"A1".repeat(20)));
        assert!(!is_password_digest("abc123"));
        assert!(!is_password_digest(&"a".repeat(41)));
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", Some("  hello \n")).unwrap(), "hello");
    }

    #[test]
    fn require_text_rejects_blank_and_missing() {
        assert_matches!(
            require_text("content", Some("   ")),
            Err(CoreError::Validation { field: "content", .. })
        );
        assert_matches!(
            require_text("content", None),
            Err(CoreError::Validation { field: "content", .. })
        );
    }

    #[test]
    fn require_text_max_counts_characters_after_trimming() {
        let at_limit = "é".repeat(MAX_NAME_LEN);
        let padded = format!("  {at_limit}  ");
        assert_eq!(
            require_text_max("name", Some(&padded), MAX_NAME_LEN).unwrap(),
            at_limit
        );
        assert_matches!(
            require_text_max("name", Some(&"a".repeat(MAX_NAME_LEN + 1)), MAX_NAME_LEN),
            Err(CoreError::Validation { field: "name", .. })
        );
        assert_matches!(
            require_text_max("summary", Some(""), MAX_SUMMARY_LEN),
            Err(CoreError::Validation { field: "summary", .. })
        );
    }
}
