//! Durable client-side storage and configuration shared by every Acme frontend.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`storage`] | The [`Storage`] key/value trait plus JSON helpers |
//! | [`keys`] | The well-known storage keys owned by the client |
//! | [`config`] | [`AcmeConfig`], loaded from TOML and the environment |

pub mod config;
pub mod keys;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{AcmeConfig, ConfigError};
pub use storage::{load_json, save_json, Storage, StorageError};
