//! In-process project store.

pub mod store;

pub use store::MemoryProjectStore;
