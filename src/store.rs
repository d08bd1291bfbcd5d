pub mod memory;

pub use memory::{ContactFilter, MemStore, StoreStats};
