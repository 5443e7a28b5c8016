//! Shared storage constructor for all platforms.
//!
//! Returns a [`store::Storage`] backed by the appropriate medium:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): one file per key under `<data_dir>/acme/`

use std::rc::Rc;

use dioxus::prelude::*;
use store::Storage;

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "acme";

/// Create the platform-appropriate durable storage.
pub fn make_storage() -> Rc<dyn Storage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileStorage::in_data_dir(APP_DIR))
    }
}

/// Storage provided by [`crate::SessionProvider`].
pub fn use_storage() -> Rc<dyn Storage> {
    use_context::<Rc<dyn Storage>>()
}
