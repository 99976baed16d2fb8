//! # sharehub-store
//!
//! The resource store collaborator for ShareHub: the lookup contract the
//! authorization core depends on, the wider mutation contract used by the
//! API, share-link generation, and a concurrent in-memory implementation.

pub mod link;
pub mod memory;
pub mod traits;

pub use memory::MemoryProjectStore;
pub use traits::{ProjectLookup, ProjectStore};
