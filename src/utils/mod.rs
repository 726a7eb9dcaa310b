pub mod storage;

pub use storage::{MemoryTokenStore, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalTokenStore;
