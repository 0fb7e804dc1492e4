//! キーバリューストレージアダプタ
//!
//! 同期的なキーバリューストレージ（ブラウザのlocalStorage、ファイル等）を
//! 型付きの get/set で包む。値はJSONで保存する。
//!
//! `get` / `set` はベストエフォート: 失敗はログに出して握りつぶし、
//! 呼び出し側には既定値を返すか何もしない。

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 生文字列を読み書きするストレージ
pub trait KeyValueBackend {
    /// キーが存在しなければ `Ok(None)`
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, raw: &str) -> Result<()>;
}

/// JSONで値を永続化するアダプタ
#[derive(Debug, Clone, Default)]
pub struct Persisted<B> {
    backend: B,
}

impl<B: KeyValueBackend> Persisted<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 値を読み込む。キーが無ければ `Ok(None)`
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw)
    }

    /// 値を読み込む。無い・壊れている場合は `default` を返す
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value unreadable, using default");
                default
            }
        }
    }

    /// 値を書き込む。失敗してもログのみ
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist value");
        }
    }
}

/// メモリ上のストレージ（テスト・一時利用）
///
/// クローンは同じ領域を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込みが常に失敗するストレージ（容量超過・無効化の再現用）
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// 生文字列を直接書き込む
    pub fn insert_raw(&self, key: &str, raw: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), raw.to_string());
        }
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory storage poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage("storage is read-only".into()));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("memory storage poisoned".into()))?;
        entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn test_get_missing_returns_default() {
        let kv = Persisted::new(MemoryBackend::new());
        let theme = kv.get("theme", Theme::Dark);
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_set_then_get() {
        let kv = Persisted::new(MemoryBackend::new());
        kv.set("theme", &Theme::Light);
        assert_eq!(kv.get("theme", Theme::Dark), Theme::Light);
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let backend = MemoryBackend::new();
        backend.insert_raw("items", "{not json");
        let kv = Persisted::new(backend);

        let items: Vec<String> = kv.get("items", vec!["fallback".to_string()]);
        assert_eq!(items, vec!["fallback".to_string()]);
        assert!(kv.try_get::<Vec<String>>("items").is_err());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let kv = Persisted::new(MemoryBackend::read_only());
        kv.set("theme", &Theme::Light);
        assert_eq!(kv.get("theme", Theme::Dark), Theme::Dark);
        assert!(kv.try_set("theme", &Theme::Light).is_err());
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryBackend::new();
        let a = Persisted::new(backend.clone());
        let b = Persisted::new(backend);
        a.set("n", &3u32);
        assert_eq!(b.get("n", 0u32), 3);
    }
}
