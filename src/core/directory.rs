use crate::domain::model::{Entry, Person, Pet};
use crate::domain::ports::Keyed;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable key→entry mapping, built once at startup and shared read-only
/// for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Directory {
    entries: HashMap<String, Entry>,
}

impl Directory {
    /// Builds the directory in sequence order. Duplicate keys are a silent
    /// last-write-wins, not an error.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            let key = entry.key().to_string();
            map.insert(key, entry);
        }
        Self { entries: map }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 啟動時載入的固定名單
pub fn seed_entries() -> Vec<Entry> {
    let alice = Arc::new(Person::new("Alice".to_string(), 56));
    let bob = Arc::new(Person::new("Bob".to_string(), 9));
    let missile = Pet::new("Missile".to_string(), Arc::clone(&bob), 56);

    vec![Entry::Person(alice), Entry::Person(bob), Entry::Pet(missile)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_directory_contains_every_entry() {
        let entries = seed_entries();
        let directory = Directory::from_entries(entries.clone());

        assert_eq!(directory.len(), 3);
        for entry in &entries {
            assert_eq!(directory.get(entry.key()), Some(entry));
        }
    }

    #[test]
    fn test_duplicate_keys_are_last_write_wins() {
        let first = Entry::Person(Arc::new(Person::new("Bob".to_string(), 9)));
        let second = Entry::Person(Arc::new(Person::new("Bob".to_string(), 42)));
        let directory = Directory::from_entries(vec![first, second.clone()]);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("Bob"), Some(&second));
    }

    #[test]
    fn test_absent_keys_miss_deterministically() {
        let directory = Directory::from_entries(seed_entries());

        for _ in 0..3 {
            assert_eq!(directory.get("Cat"), None);
            assert_eq!(directory.get(""), None);
            assert_eq!(directory.get("alice"), None);
        }
    }

    #[test]
    fn test_empty_directory() {
        let directory = Directory::from_entries(Vec::new());
        assert!(directory.is_empty());
        assert_eq!(directory.get("Alice"), None);
    }
}
