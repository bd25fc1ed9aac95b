pub mod key_value;
pub mod mapping;

mod atomic_write;
mod models;
mod repository;

pub use key_value::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use repository::*;
