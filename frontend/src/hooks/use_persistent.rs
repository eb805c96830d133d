//! Hook that mirrors a piece of state into localStorage.

use serde::{de::DeserializeOwned, Serialize};
use yew::prelude::*;

fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
}

fn store<T: Serialize>(key: &str, value: &T) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(json) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// State that survives page reloads.
///
/// Loaded from localStorage on mount and written back on every set. Falls
/// back to `init` when the key is absent or unreadable.
#[hook]
pub fn use_persistent<T>(key: &'static str, init: impl FnOnce() -> T) -> (T, Callback<T>)
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
{
    let state = use_state(|| load::<T>(key).unwrap_or_else(init));

    let set = {
        let state = state.clone();
        Callback::from(move |value: T| {
            store(key, &value);
            state.set(value);
        })
    };

    ((*state).clone(), set)
}
