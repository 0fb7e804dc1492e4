//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),
}

/// インポート失敗の理由
///
/// いずれの場合もストアは変更されない。
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid JSON file: top level is not an array")]
    NotAnArray,

    #[error("Invalid JSON file: entry {index} is not a record ({source})")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", error), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_import_error_wraps() {
        let error: Error = ImportError::NotAnArray.into();
        assert!(matches!(error, Error::Import(ImportError::NotAnArray)));
        assert!(format!("{}", error).contains("not an array"));
    }

    #[test]
    fn test_invalid_entry_mentions_index() {
        let source = serde_json::from_str::<Vec<String>>("[1]").unwrap_err();
        let error = ImportError::InvalidEntry { index: 3, source };
        assert!(format!("{}", error).contains("entry 3"));
    }
}
