use qr_manager_common::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrManagerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("QRコードの内容が空です")]
    EmptyPayload,

    #[error("レコードが見つかりません: {0}")]
    RecordNotFound(String),

    #[error("インポート失敗: {0}")]
    Import(#[from] ImportError),

    #[error("ストレージエラー: {0}")]
    Storage(#[from] qr_manager_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrManagerError>;
