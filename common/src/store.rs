//! 保存済みQRコードのストア
//!
//! メモリ上の一覧（新しい保存が先頭）を持ち、変更のたびに
//! 一覧全体を `RECORDS_KEY` へ書き込む。部分的な書き込みはしない。

use crate::error::{ImportError, Result};
use crate::filter;
use crate::storage::{KeyValueBackend, Persisted};
use crate::types::{new_id, ScanRecord, RECORDS_KEY};

#[derive(Debug, Clone)]
pub struct RecordStore<B> {
    kv: Persisted<B>,
    records: Vec<ScanRecord>,
}

impl<B: KeyValueBackend> RecordStore<B> {
    /// 永続化済みの一覧を読み込む（無い・壊れている場合は空）
    pub fn load(kv: Persisted<B>) -> Self {
        let records = kv.get(RECORDS_KEY, Vec::new());
        Self { kv, records }
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScanRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn all_tags(&self) -> Vec<String> {
        filter::all_tags(&self.records)
    }

    /// 先頭に追加
    pub fn add(&mut self, record: ScanRecord) {
        self.insert_front(record);
        self.persist_logged();
    }

    /// `add` と同じだが、書き込み失敗を返す
    pub fn try_add(&mut self, record: ScanRecord) -> Result<()> {
        self.insert_front(record);
        self.persist()
    }

    /// お気に入りを反転。該当IDが無ければ何もしない
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let now = self.flip_favorite(id)?;
        self.persist_logged();
        Some(now)
    }

    pub fn try_toggle_favorite(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(now) = self.flip_favorite(id) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(now))
    }

    /// 確認が取れた場合のみ削除する
    ///
    /// `confirm` はレコードが存在するときだけ呼ばれる。
    /// 削除したら `true`。
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> bool
    where
        F: FnOnce(&ScanRecord) -> bool,
    {
        let removed = self.remove_confirmed(id, confirm);
        if removed {
            self.persist_logged();
        }
        removed
    }

    pub fn try_delete<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&ScanRecord) -> bool,
    {
        let removed = self.remove_confirmed(id, confirm);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// 一覧全体をJSON配列にする
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// JSON配列を取り込み、末尾に追加する
    ///
    /// ファイル内の `id` は無視して新しく振り直す。重複するテキストも
    /// そのまま追加する。解析に失敗したらストアを変更しない。
    pub fn import_merge(&mut self, json: &str) -> std::result::Result<usize, ImportError> {
        let count = self.append_import(json)?;
        self.persist_logged();
        Ok(count)
    }

    /// `import_merge` と同じだが、書き込み失敗も `Error::Storage` として返す
    pub fn try_import_merge(&mut self, json: &str) -> Result<usize> {
        let count = self.append_import(json)?;
        self.persist()?;
        Ok(count)
    }

    /// 一覧全体を書き込む
    pub fn persist(&self) -> Result<()> {
        self.kv.try_set(RECORDS_KEY, &self.records)
    }

    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, count = self.records.len(), "failed to persist records");
        }
    }

    fn insert_front(&mut self, record: ScanRecord) {
        tracing::debug!(id = %record.id, "adding record");
        self.records.insert(0, record);
    }

    fn flip_favorite(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.is_favorite = !record.is_favorite;
        Some(record.is_favorite)
    }

    fn remove_confirmed<F>(&mut self, id: &str, confirm: F) -> bool
    where
        F: FnOnce(&ScanRecord) -> bool,
    {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        if !confirm(&self.records[index]) {
            return false;
        }
        self.records.remove(index);
        true
    }

    fn append_import(&mut self, json: &str) -> std::result::Result<usize, ImportError> {
        let imported = parse_import(json)?;
        let count = imported.len();
        self.records.extend(imported);
        tracing::info!(count, "imported records");
        Ok(count)
    }
}

/// インポートファイルを解析し、IDを振り直したレコードを返す
pub fn parse_import(json: &str) -> std::result::Result<Vec<ScanRecord>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ImportError::InvalidJson)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut record: ScanRecord = serde_json::from_value(entry)
                .map_err(|source| ImportError::InvalidEntry { index, source })?;
            record.id = new_id();
            Ok(record)
        })
        .collect()
}
