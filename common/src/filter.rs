//! 保存一覧の絞り込み・並び替え
//!
//! 検索文字列・タグ・お気に入りのみ の3条件で絞り込み、
//! お気に入り優先 → 作成日時の新しい順 で並べる。

use crate::types::ScanRecord;
use std::cmp::Ordering;
use std::collections::HashSet;

/// 「全タグ」チップの表示名
pub const ALL_TAGS_LABEL: &str = "All";

/// タグ条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// チップ表示名から変換（"All" は全タグ）
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TAGS_LABEL {
            TagFilter::All
        } else {
            TagFilter::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS_LABEL,
            TagFilter::Tag(tag) => tag,
        }
    }
}

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub search: String,
    pub tag: TagFilter,
    pub favorites_only: bool,
}

impl RecordFilter {
    pub fn matches(&self, record: &ScanRecord) -> bool {
        self.matches_search(record) && self.matches_tag(record) && self.matches_favorite(record)
    }

    fn matches_search(&self, record: &ScanRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.title.to_lowercase().contains(&needle) || record.text.to_lowercase().contains(&needle)
    }

    fn matches_tag(&self, record: &ScanRecord) -> bool {
        match &self.tag {
            TagFilter::All => true,
            TagFilter::Tag(tag) => record.has_tag(tag),
        }
    }

    fn matches_favorite(&self, record: &ScanRecord) -> bool {
        !self.favorites_only || record.is_favorite
    }
}

/// お気に入りが先、同じなら作成日時の降順
pub fn favorites_first_then_newest(a: &ScanRecord, b: &ScanRecord) -> Ordering {
    b.is_favorite
        .cmp(&a.is_favorite)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// 表示対象のレコードを並び順どおりに返す（安定ソート）
pub fn visible<'a>(records: &'a [ScanRecord], filter: &RecordFilter) -> Vec<&'a ScanRecord> {
    let mut result: Vec<&ScanRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    result.sort_by(|a, b| favorites_first_then_newest(a, b));
    result
}

/// 選択可能なタグ一覧（先頭は "All"、以降は初出順で重複なし）
pub fn all_tags(records: &[ScanRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = vec![ALL_TAGS_LABEL.to_string()];
    seen.insert(ALL_TAGS_LABEL);

    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}
