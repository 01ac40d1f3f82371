//! List Configuration
//!
//! Storage key, form labels and user-facing messages. Every field has a
//! default; a JSON document can override any subset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Key the JSON array is stored under
    pub storage_key: String,
    pub add_label: String,
    pub update_label: String,
    pub add_color: String,
    pub update_color: String,
    pub add_icon: String,
    pub update_icon: String,
    pub remove_icon: String,
    pub empty_input_message: String,
    pub duplicate_message: String,
    pub confirm_remove_message: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            add_label: "Add Item".to_string(),
            update_label: "Update Item".to_string(),
            add_color: "#007bff".to_string(),
            update_color: "#228B22".to_string(),
            add_icon: "fa-solid fa-plus".to_string(),
            update_icon: "fa-solid fa-pen".to_string(),
            remove_icon: "fa-solid fa-xmark".to_string(),
            empty_input_message: "Please enter an item".to_string(),
            duplicate_message: "Item already exists".to_string(),
            confirm_remove_message: "Are you sure?".to_string(),
        }
    }
}

impl ListConfig {
    /// Parse overrides; missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = ListConfig::from_json(r#"{"storage_key":"groceries","add_label":"Add"}"#).unwrap();
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.add_label, "Add");
        assert_eq!(config.update_label, "Update Item");
    }

    #[test]
    fn test_malformed_override() {
        assert!(ListConfig::from_json("{storage_key}").is_err());
    }
}
