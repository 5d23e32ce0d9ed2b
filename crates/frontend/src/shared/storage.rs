//! Thin localStorage wrapper. Storage failures (private mode, quota) are
//! logged and otherwise ignored so callers keep working in memory. Outside
//! the browser (native tests) there is no storage at all: `load` finds
//! nothing and `save` is a no-op.

#[cfg(target_arch = "wasm32")]
pub fn load(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn save(key: &str, value: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("localStorage недоступен, ключ '{key}' не сохранён");
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("не удалось записать ключ '{key}' в localStorage");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_key: &str, _value: &str) {}
