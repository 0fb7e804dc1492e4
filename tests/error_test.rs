//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use qr_manager::error::QrManagerError;
use qr_manager_common::ImportError;

/// QrManagerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        QrManagerError::Config("テスト設定エラー".to_string()),
        QrManagerError::EmptyPayload,
        QrManagerError::RecordNotFound("abc".to_string()),
        QrManagerError::Import(ImportError::NotAnArray),
        QrManagerError::Storage(qr_manager_common::Error::Storage("disk full".to_string())),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "エラーメッセージが空");
    }
}

#[test]
fn test_record_not_found_message() {
    let error = QrManagerError::RecordNotFound("1234".to_string());
    assert_eq!(format!("{}", error), "レコードが見つかりません: 1234");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
    let error: QrManagerError = io_error.into();
    assert!(matches!(error, QrManagerError::Io(_)));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
    let error: QrManagerError = json_error.into();
    assert!(matches!(error, QrManagerError::JsonParse(_)));
}

/// インポートエラーはメッセージに理由を含む
#[test]
fn test_import_error_message() {
    let error: QrManagerError = ImportError::NotAnArray.into();
    let display = format!("{}", error);
    assert!(display.starts_with("インポート失敗"));
    assert!(display.contains("not an array"));
}

#[test]
fn test_empty_payload_is_not_config_error() {
    let error = QrManagerError::EmptyPayload;
    assert!(!matches!(error, QrManagerError::Config(_)));
    assert_eq!(format!("{}", error), "QRコードの内容が空です");
}
