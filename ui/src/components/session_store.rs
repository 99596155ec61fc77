use dioxus::prelude::*;

use edo_common::session::{Session, SESSION_KEYS};

/// Client-held identity, provided as shared context at the top of the app.
/// `session == None` means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    pub session: Option<Session>,
}

impl SessionStore {
    /// Restore the session persisted by a previous page load, if any.
    pub fn load() -> Self {
        SessionStore {
            session: Session::from_lookup(storage_get),
        }
    }

    /// Install a freshly authenticated session and persist it.
    pub fn sign_in(&mut self, session: Session) {
        for (key, value) in session.to_pairs() {
            storage_set(key, &value);
        }
        self.session = Some(session);
    }

    /// Destroy the session: every persisted field is removed together.
    pub fn sign_out(&mut self) {
        for key in SESSION_KEYS {
            storage_remove(key);
        }
        self.session = None;
    }
}

pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

// ─── localStorage access (browser only) ──────────────────────────────────────

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_family = "wasm")]
fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_family = "wasm")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("failed to persist session field {key}");
        }
    }
}

#[cfg(target_family = "wasm")]
fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_family = "wasm"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
fn storage_set(_key: &str, _value: &str) {}

#[cfg(not(target_family = "wasm"))]
fn storage_remove(_key: &str) {}
