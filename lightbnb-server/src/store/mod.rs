//! Process-wide listing store for newly added properties

pub mod memory;

pub use memory::{MemoryPropertyStore, StoreError};
