//! Cache Entry Module
//!
//! Defines the value wrapper stored for each key, with creation and access timestamps.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and access metadata.
///
/// `created_at` is fixed at construction. `last_accessed` only ever moves forward.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    value: String,
    created_at: DateTime<Utc>,
    last_accessed: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: String) -> Self {
        let now = Utc::now();
        Self {
            value,
            created_at: now,
            last_accessed: now,
        }
    }

    /// The stored payload.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the entry was inserted.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the entry was last read (or inserted, if never read).
    pub fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    // == Touch ==
    /// Records an access at the current time.
    ///
    /// A wall clock that steps backwards leaves `last_accessed` unchanged.
    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    fn touch_at(&mut self, at: DateTime<Utc>) {
        if at > self.last_accessed {
            self.last_accessed = at;
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string());

        assert_eq!(entry.value(), "test_value");
        assert_eq!(entry.created_at(), entry.last_accessed());
    }

    #[test]
    fn test_touch_advances_last_accessed() {
        let mut entry = CacheEntry::new("test_value".to_string());
        let created = entry.created_at();

        sleep(std::time::Duration::from_millis(5));
        entry.touch();

        assert!(entry.last_accessed() > created);
        assert_eq!(entry.created_at(), created, "created_at must not change");
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let mut entry = CacheEntry::new("test_value".to_string());
        let before = entry.last_accessed();

        entry.touch_at(before - Duration::seconds(30));

        assert_eq!(entry.last_accessed(), before);
    }
}
