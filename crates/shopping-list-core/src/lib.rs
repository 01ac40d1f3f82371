//! Shopping List Core
//!
//! Platform-free half of the shopping list: the item model, the persisted
//! collection, the row view model and the controller that keeps them in step.
//! The browser front end supplies storage and dialogs through traits.

pub mod config;
pub mod controller;
pub mod domain;
pub mod store;
pub mod view;

pub use config::ListConfig;
pub use controller::{Dialogs, EditMode, FormState, ListManager, ListState, Outcome, RowTarget};
pub use domain::{locale_cmp, Item, ItemId, ListError, ListResult, StorageError};
pub use store::{ItemStore, KeyValueStore, MemoryStorage};
pub use view::{Row, RowList};
