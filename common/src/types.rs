//! 保存データの型定義
//!
//! - ScanRecord: 保存されたQRコード1件
//! - Theme: 表示テーマ（dark/light）

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// タイトル未入力時のプレースホルダー
pub const UNTITLED_TITLE: &str = "Untitled QR";

/// レコード一覧の保存キー
pub const RECORDS_KEY: &str = "qr-saved-items";

/// テーマの保存キー
pub const THEME_KEY: &str = "qr-app-theme";

/// 保存されたQRコード
///
/// `id`・`text`・`created_at` は生成後に変更しない。
/// 変更可能なのは `is_favorite` のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,

    /// 重複は除去しない
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// エポックミリ秒
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_favorite: bool,
}

fn default_title() -> String {
    UNTITLED_TITLE.to_string()
}

/// `null` は項目なしと同じ扱い
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn title_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

impl ScanRecord {
    /// 新規IDと現在時刻でレコードを作成
    pub fn new(text: impl Into<String>, title: &str, tags: Vec<String>) -> Self {
        let title = if title.trim().is_empty() {
            default_title()
        } else {
            title.to_string()
        };

        Self {
            id: new_id(),
            text: text.into(),
            title,
            tags,
            created_at: now_millis(),
            is_favorite: false,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 作成日（YYYY-MM-DD, UTC）
    pub fn created_date_label(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.created_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// UUID v4 文字列
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 現在時刻（エポックミリ秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
