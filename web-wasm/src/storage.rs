//! ブラウザ localStorage バックエンド

use qr_manager_common::{Error, KeyValueBackend, Persisted, Result};

/// `window.localStorage` への読み書き
///
/// 保持するのは何もなく、呼び出しごとに Storage を取得する。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage> {
        gloo::utils::window()
            .local_storage()
            .map_err(|e| Error::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage disabled".into()))
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("read {} failed: {:?}", key, e)))
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, raw)
            .map_err(|e| Error::Storage(format!("write {} failed: {:?}", key, e)))
    }
}

/// アプリで使う永続化アダプタ
pub fn local_kv() -> Persisted<LocalStorageBackend> {
    Persisted::new(LocalStorageBackend)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use qr_manager_common::{RecordStore, ScanRecord, Theme, THEME_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_theme_round_trip() {
        let kv = local_kv();
        kv.set(THEME_KEY, &Theme::Light);
        assert_eq!(kv.get(THEME_KEY, Theme::Dark), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn wasm_record_store_persists() {
        let mut store = RecordStore::load(local_kv());
        let before = store.len();
        store.add(ScanRecord::new("https://example.com", "Example", vec![]));

        let reloaded = RecordStore::load(local_kv());
        assert_eq!(reloaded.len(), before + 1);
    }
}
