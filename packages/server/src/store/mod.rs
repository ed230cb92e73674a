//! In-memory entity storage for the portfolio.
//!
//! Projects and social links live in [`InMemoryRepository`] instances that draw
//! identifiers from one shared [`IdSequence`], so ids are unique across both
//! collections. [`Portfolio`] ties the repositories together with the about
//! singleton and the avatar slot.

mod error;
mod portfolio;
mod repository;
mod sequence;

pub use error::StoreError;
pub use portfolio::{AVATAR_PREFIX, AVATAR_URL, Avatar, Portfolio};
pub use repository::{InMemoryRepository, Record, Repository};
pub use sequence::{EntityId, IdSequence};
