//! Item Store
//!
//! Reads and writes the full ordered item collection under one key.

use log::{debug, info};

use super::KeyValueStore;
use crate::domain::{locale_cmp, ListResult};

/// The persisted item collection
pub struct ItemStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every item in stored order. An absent key is an empty list;
    /// malformed data is returned as `ListError::Corrupt`.
    pub fn load_all(&self) -> ListResult<Vec<String>> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the stored collection
    pub fn save_all(&self, items: &[String]) -> ListResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(&self.key, &raw)?;
        debug!("[STORE] saved {} items under '{}'", items.len(), self.key);
        Ok(())
    }

    /// Sort the stored items alphabetically, then append `item` at the end
    pub fn append_after_sort(&self, item: &str) -> ListResult<Vec<String>> {
        self.replace_after_sort(None, item)
    }

    /// Drop every entry equal to `old`, sort the rest, append `item`.
    /// One write, so a failure leaves the stored list as it was.
    pub fn replace_after_sort(&self, old: Option<&str>, item: &str) -> ListResult<Vec<String>> {
        let mut items = self.load_all()?;
        if let Some(old) = old {
            items.retain(|existing| existing != old);
        }
        items.sort_by(|a, b| locale_cmp(a, b));
        items.push(item.to_string());
        self.save_all(&items)?;
        match old {
            Some(old) => info!("[STORE] replaced '{}' with '{}'", old, item),
            None => info!("[STORE] appended '{}'", item),
        }
        Ok(items)
    }

    /// Drop every stored entry equal to `text`; returns how many were removed
    pub fn remove_by_text(&self, text: &str) -> ListResult<usize> {
        let mut items = self.load_all()?;
        let before = items.len();
        items.retain(|item| item != text);
        let removed = before - items.len();
        self.save_all(&items)?;
        info!("[STORE] removed {} x '{}'", removed, text);
        Ok(removed)
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, text: &str) -> ListResult<bool> {
        Ok(self.load_all()?.iter().any(|item| item == text))
    }

    /// Delete the stored collection entirely; the key becomes absent
    pub fn clear(&self) -> ListResult<()> {
        self.backend.remove(&self.key)?;
        info!("[STORE] cleared '{}'", self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListError;
    use crate::store::MemoryStorage;

    fn setup() -> ItemStore<MemoryStorage> {
        ItemStore::new(MemoryStorage::new(), "items")
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = setup();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_uses_json_array() {
        let store = setup();
        store.save_all(&["Milk".to_string(), "Eggs".to_string()]).unwrap();
        assert_eq!(store.backend().raw("items").as_deref(), Some(r#"["Milk","Eggs"]"#));
        assert_eq!(store.load_all().unwrap(), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_append_sorts_previous_items_first() {
        let store = setup();
        store.append_after_sort("Milk").unwrap();
        store.append_after_sort("Eggs").unwrap();
        store.append_after_sort("Bread").unwrap();
        assert_eq!(store.load_all().unwrap(), vec!["Eggs", "Milk", "Bread"]);
    }

    #[test]
    fn test_replace_drops_old_then_appends() {
        let store = ItemStore::new(MemoryStorage::with_entry("items", r#"["Milk","Eggs","Bread"]"#), "items");
        store.replace_after_sort(Some("Eggs"), "Apples").unwrap();
        assert_eq!(store.load_all().unwrap(), vec!["Bread", "Milk", "Apples"]);
    }

    #[test]
    fn test_remove_by_text_removes_all_matches() {
        let store = ItemStore::new(MemoryStorage::with_entry("items", r#"["a","b","a"]"#), "items");
        assert_eq!(store.remove_by_text("a").unwrap(), 2);
        assert_eq!(store.load_all().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let store = ItemStore::new(MemoryStorage::with_entry("items", r#"["Milk"]"#), "items");
        assert_eq!(store.remove_by_text("milk").unwrap(), 0);
        assert!(store.contains("Milk").unwrap());
        assert!(!store.contains("milk").unwrap());
    }

    #[test]
    fn test_clear_removes_key() {
        let store = setup();
        store.append_after_sort("Milk").unwrap();
        store.clear().unwrap();
        assert_eq!(store.backend().raw("items"), None);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_data_is_corrupt() {
        let store = ItemStore::new(MemoryStorage::with_entry("items", "{not json"), "items");
        assert!(matches!(store.load_all(), Err(ListError::Corrupt(_))));
    }
}
