//! Thin `localStorage` access for user preferences.
//!
//! Outside the browser (native unit tests) reads return `None` and writes
//! are dropped.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of '{}' failed: {:?}", key, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(_key: &str, _value: &str) {}
