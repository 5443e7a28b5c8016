//! Authentication context and hooks for the UI.

use std::rc::Rc;

use api::{AuthApi, HttpAuthApi};
use dioxus::prelude::*;
use store::{AcmeConfig, Storage};

use crate::session::{Session, SessionStore};

/// The session store as provided to the component tree.
pub type SharedSession = SessionStore<Signal<Session>>;

/// Get the session store.
///
/// Reading through it (`snapshot`, `is_authenticated`) subscribes the calling
/// component, so it re-renders when the user signs in or out.
pub fn use_session() -> SharedSession {
    use_context::<SharedSession>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable authentication.
///
/// The persisted session is restored synchronously before the first render,
/// so guards never see a transient signed-out state after a reload. The
/// restored profile is then revalidated against the auth service once.
#[component]
pub fn SessionProvider(config: AcmeConfig, children: Element) -> Element {
    let storage: Rc<dyn Storage> = use_context_provider(crate::make_storage);
    let cell = use_signal({
        let storage = storage.clone();
        move || Session::restore(&*storage)
    });

    let session = use_context_provider(|| {
        let api: Rc<dyn AuthApi> = Rc::new(HttpAuthApi::from_config(&config));
        tracing::debug!(base_url = config.api_base_url(), "Auth client ready");
        SessionStore::new(cell, storage.clone(), api)
    });

    use_hook(move || {
        let mut session = session.clone();
        spawn(async move {
            if let Err(e) = session.revalidate().await {
                tracing::warn!("Session revalidation failed: {e}");
            }
        })
    });

    rsx! {
        {children}
    }
}
