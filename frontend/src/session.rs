//! Injected session capability over browser local storage.
//!
//! The session lives under two keys: `user` (JSON-serialized [`Actor`]) and
//! `token` (opaque bearer string). The provider is passed into components
//! explicitly instead of being read ambiently, and [`SessionProvider::subscribe`]
//! exposes the cross-tab `storage` event as a change notification channel.

use common::model::{Actor, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::Callback;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

#[derive(Clone, Default, PartialEq)]
pub struct SessionProvider;

impl SessionProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// The signed-in session, or `None` when either key is missing or the
    /// stored profile does not parse.
    pub fn current(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        let user = Actor::from_session_json(&raw_user)?;
        Some(Session { user, token })
    }

    /// Persists a session (the login flow's half of the contract).
    pub fn store(&self, session: &Session) {
        if let Some(storage) = Self::storage() {
            if let Ok(raw_user) = serde_json::to_string(&session.user) {
                storage.set_item(USER_KEY, &raw_user).ok();
                storage.set_item(TOKEN_KEY, &session.token).ok();
            }
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            storage.remove_item(USER_KEY).ok();
            storage.remove_item(TOKEN_KEY).ok();
        }
    }

    /// Fires `callback` with the fresh session whenever another tab writes
    /// one of the session keys. The returned guard unregisters on drop.
    pub fn subscribe(&self, callback: Callback<Option<Session>>) -> SessionListener {
        let provider = self.clone();
        let closure = Closure::wrap(Box::new(move |event: StorageEvent| {
            let relevant = match event.key() {
                // A cleared storage reports a null key.
                None => true,
                Some(key) => key == USER_KEY || key == TOKEN_KEY,
            };
            if relevant {
                callback.emit(provider.current());
            }
        }) as Box<dyn FnMut(StorageEvent)>);

        if let Some(window) = web_sys::window() {
            window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
                .ok();
        }
        SessionListener { closure }
    }
}

/// Keeps the storage-event closure alive; dropping it unregisters.
pub struct SessionListener {
    closure: Closure<dyn FnMut(StorageEvent)>,
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window
                .remove_event_listener_with_callback(
                    "storage",
                    self.closure.as_ref().unchecked_ref(),
                )
                .ok();
        }
    }
}
