//! Browser Dialogs
//!
//! `window.confirm` and `window.alert`.

use log::warn;
use shopping_list_core::Dialogs;

pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            warn!("[DIALOG] confirm failed: {:?}", e);
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                warn!("[DIALOG] alert failed: {:?}", e);
            }
        }
    }
}
