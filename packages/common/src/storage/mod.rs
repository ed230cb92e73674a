mod error;
mod traits;

pub mod filesystem;

pub use error::StorageError;
pub use traits::{SlotFile, SlotStore};
