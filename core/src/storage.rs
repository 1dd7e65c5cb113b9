use std::cell::RefCell;
use std::collections::HashMap;

/// Key under which the last-viewed page is stored
pub const CURRENT_PAGE_KEY: &str = "currentPage";

/// Small string key/value store that survives reloads. The browser uses
/// `localStorage`; failures are swallowed because losing the saved page is
/// harmless.
pub trait PageStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryPageStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryPageStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStorage for MemoryPageStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_overwrites() {
        let storage = MemoryPageStorage::new();
        assert_eq!(storage.get(CURRENT_PAGE_KEY), None);

        storage.set(CURRENT_PAGE_KEY, "conti");
        storage.set(CURRENT_PAGE_KEY, "obiettivi");
        assert_eq!(storage.get(CURRENT_PAGE_KEY).as_deref(), Some("obiettivi"));
    }
}
