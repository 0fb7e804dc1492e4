//! ファイルによるキーバリューストレージ
//!
//! キーごとに `<data_dir>/<key>.json` を1ファイル持つ。
//! 書き込みは一時ファイル → rename で行い、途中で落ちても
//! 直前の内容か新しい内容のどちらかが残る。

use qr_manager_common::{Error, KeyValueBackend, Persisted, RecordStore, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!("{}: {}", key, e))),
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        let storage_err = |e: std::io::Error| Error::Storage(format!("{}: {}", key, e));

        std::fs::create_dir_all(&self.dir).map_err(storage_err)?;
        let path = self.key_path(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        std::fs::write(&tmp, raw).map_err(storage_err)?;
        std::fs::rename(&tmp, &path).map_err(storage_err)?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "stored");
        Ok(())
    }
}

/// データディレクトリのストアを開く
pub fn open_store(data_dir: &Path) -> RecordStore<FileBackend> {
    RecordStore::load(Persisted::new(FileBackend::new(data_dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.read("nothing").expect("読込失敗"), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().expect("Failed to create temp dir");
        let backend = FileBackend::new(dir.path().join("nested"));
        backend.write("qr-app-theme", "\"light\"").expect("書込失敗");

        assert_eq!(
            backend.read("qr-app-theme").expect("読込失敗").as_deref(),
            Some("\"light\"")
        );
        assert!(!dir.path().join("nested").join(".qr-app-theme.json.tmp").exists());
    }
}
