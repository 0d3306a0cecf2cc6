pub mod keys;
pub mod kv;

pub use keys::*;
pub use kv::{get_store_path, KvStore};
