//! Domain Layer
//!
//! Item entity, ordering and the error taxonomy shared by every layer.

mod error;
mod item;
mod ordering;

pub use error::{ListError, ListResult, StorageError};
pub use item::{Item, ItemId, ItemIdAllocator};
pub use ordering::locale_cmp;
