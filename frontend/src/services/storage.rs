use finance_hub_core::storage::PageStorage;
use gloo::storage::{LocalStorage, Storage};

use super::logging::Logger;

/// Raw `localStorage` strings, so the saved page reads `conti` rather than
/// a JSON-quoted value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalPageStorage;

impl PageStorage for LocalPageStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            Logger::warn_with_component("storage", &format!("Could not save {}", key));
        }
    }
}
