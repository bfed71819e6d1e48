pub mod kv;
pub mod records;

pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use records::{load_counter, load_or_seed, persist, persist_counter, SeedSource};
