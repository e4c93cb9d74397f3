/// Entity primary keys are 50-character strings produced by [`next_id`].
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a new entity id.
///
/// Layout: 15-digit zero-padded Unix milliseconds, 32 hex chars of a v4 UUID,
/// then `000`. Ids sort by creation time and never contain `-`, which the
/// session token uses as its separator.
pub fn next_id() -> DbId {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{millis:015}{}000", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_fixed_shape() {
        let id = next_id();
        assert_eq!(id.len(), 50);
        assert!(!id.contains('-'));
        assert!(id.ends_with("000"));
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_unique_and_time_ordered() {
        let a = next_id();
        let b = next_id();
        assert_ne!(a, b);
        assert!(a[..15] <= b[..15]);
    }
}
