//! Persistence Layer
//!
//! The whole list is stored as one JSON array of strings under a single key
//! of a key-value backend (browser `localStorage` in production).

mod item_store;
mod memory;
mod traits;

pub use item_store::ItemStore;
pub use memory::MemoryStorage;
pub use traits::KeyValueStore;
