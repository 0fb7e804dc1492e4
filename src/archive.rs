//! アーカイブ操作（CLI用）

use crate::error::{QrManagerError, Result};
use crate::file_store::FileBackend;
use qr_manager_common::{Error, RecordStore, SaveDraft, ScanRecord, ScanSession};
use std::path::Path;

/// 内容を保存する
///
/// `tags` が `None` のときは内容から推定したタグを使う。
/// ファイルへ書き込めなければエラー。
pub fn add_scan(
    store: &mut RecordStore<FileBackend>,
    text: &str,
    title: &str,
    tags: Option<&str>,
) -> Result<ScanRecord> {
    let mut session = ScanSession::new();
    if !session.on_decode(&[text]) || !session.open_save_dialog() {
        return Err(QrManagerError::EmptyPayload);
    }

    let suggested = session.draft().cloned().unwrap_or_default();
    let draft = SaveDraft {
        title: title.to_string(),
        tags: tags.map(str::to_string).unwrap_or(suggested.tags),
    };
    let record = session.submit(draft).ok_or(QrManagerError::EmptyPayload)?;

    store.try_add(record.clone())?;
    Ok(record)
}

pub fn export_to(store: &RecordStore<FileBackend>, output: &Path) -> Result<usize> {
    let json = store.export_json()?;
    std::fs::write(output, json)?;
    Ok(store.len())
}

pub fn import_from(store: &mut RecordStore<FileBackend>, input: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(input)?;
    store.try_import_merge(&content).map_err(|e| match e {
        Error::Import(e) => QrManagerError::Import(e),
        other => QrManagerError::Storage(other),
    })
}

/// 一覧表示の1行
pub fn format_record_line(record: &ScanRecord) -> String {
    let star = if record.is_favorite { "★" } else { " " };
    let tags = if record.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", record.tags.join(", "))
    };
    format!(
        "{} {}  {}{}  {}",
        star,
        record.created_date_label(),
        record.title,
        tags,
        record.id
    )
}

pub fn format_record_detail(record: &ScanRecord) -> String {
    format!(
        "ID: {}\nタイトル: {}\nタグ: {}\n作成日: {}\nお気に入り: {}\n内容:\n{}",
        record.id,
        record.title,
        record.tags.join(", "),
        record.created_date_label(),
        if record.is_favorite { "はい" } else { "いいえ" },
        record.text
    )
}
