//! Page Configuration
//!
//! Reads `ListConfig` overrides from
//! `<meta name="shopping-list-config" content="{...}">`.

use log::{info, warn};
use shopping_list_core::ListConfig;

const CONFIG_SELECTOR: &str = r#"meta[name="shopping-list-config"]"#;

pub fn load() -> ListConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(CONFIG_SELECTOR).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    let Some(raw) = raw else {
        return ListConfig::default();
    };
    match ListConfig::from_json(&raw) {
        Ok(config) => {
            info!("[CONFIG] storage key '{}'", config.storage_key);
            config
        }
        Err(e) => {
            warn!("[CONFIG] ignoring malformed overrides: {}", e);
            ListConfig::default()
        }
    }
}
