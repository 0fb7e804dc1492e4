//! スキャンセッション
//!
//! 状態遷移:
//! - Idle → Detected: カメラからの検出イベント
//! - Detected → SaveDialogOpen: 保存ボタン / Ctrl+S
//! - SaveDialogOpen → Detected: ダイアログを閉じる（入力内容は破棄）
//! - SaveDialogOpen → Idle: 保存完了（レコードを返す）

use crate::types::ScanRecord;

/// 保存ダイアログの入力内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveDraft {
    pub title: String,
    /// カンマ区切り
    pub tags: String,
}

impl SaveDraft {
    /// ペイロードからタグ候補を埋めた初期値
    pub fn suggest(payload: &str) -> Self {
        Self {
            title: String::new(),
            tags: suggest_tags(payload).join(", "),
        }
    }

    pub fn into_record(self, payload: &str) -> ScanRecord {
        ScanRecord::new(payload, &self.title, parse_tags(&self.tags))
    }
}

/// ペイロードの種類からタグ候補を推定
pub fn suggest_tags(payload: &str) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if is_link(payload) {
        tags.push("Link");
    }
    if payload.contains("WIFI:") {
        tags.push("Wi-Fi");
    }
    if payload.contains("BEGIN:VCARD") {
        tags.push("Contact");
    }
    tags
}

/// "a, b,,c" → ["a", "b", "c"]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// リンクとして開けるペイロードか
pub fn is_link(payload: &str) -> bool {
    payload.starts_with("http")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Detected {
        payload: String,
    },
    SaveDialogOpen {
        payload: String,
        draft: SaveDraft,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// 現在検出されているペイロード
    pub fn payload(&self) -> Option<&str> {
        match &self.state {
            ScanState::Idle => None,
            ScanState::Detected { payload } | ScanState::SaveDialogOpen { payload, .. } => {
                Some(payload)
            }
        }
    }

    pub fn draft(&self) -> Option<&SaveDraft> {
        match &self.state {
            ScanState::SaveDialogOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn is_save_dialog_open(&self) -> bool {
        matches!(self.state, ScanState::SaveDialogOpen { .. })
    }

    /// 1フレーム分の検出結果を反映する
    ///
    /// 最初の空でないペイロードで未保存の検出内容を上書きする。
    /// ダイアログ表示中は無視する。状態が変わったら `true`。
    pub fn on_decode<S: AsRef<str>>(&mut self, payloads: &[S]) -> bool {
        if self.is_save_dialog_open() {
            return false;
        }
        let Some(payload) = payloads.iter().map(AsRef::as_ref).find(|p| !p.is_empty()) else {
            return false;
        };
        if self.payload() == Some(payload) {
            return false;
        }
        self.state = ScanState::Detected {
            payload: payload.to_string(),
        };
        true
    }

    /// カメラ・デコードの失敗。状態は変えずログのみ
    pub fn on_decode_error(message: &str) {
        tracing::warn!(error = message, "camera decode failed");
    }

    /// 保存ダイアログを開く。ペイロードが無ければ何もしない
    pub fn open_save_dialog(&mut self) -> bool {
        match &self.state {
            ScanState::Detected { payload } => {
                let payload = payload.clone();
                let draft = SaveDraft::suggest(&payload);
                self.state = ScanState::SaveDialogOpen { payload, draft };
                true
            }
            ScanState::SaveDialogOpen { .. } => true,
            ScanState::Idle => false,
        }
    }

    /// 入力内容を破棄してダイアログを閉じる
    pub fn close_save_dialog(&mut self) {
        if let ScanState::SaveDialogOpen { payload, .. } = &self.state {
            self.state = ScanState::Detected {
                payload: payload.clone(),
            };
        }
    }

    /// 保存を確定してレコードを作る。ダイアログが開いていなければ `None`
    pub fn submit(&mut self, draft: SaveDraft) -> Option<ScanRecord> {
        if !self.is_save_dialog_open() {
            return None;
        }
        let ScanState::SaveDialogOpen { payload, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        Some(draft.into_record(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNTITLED_TITLE;

    #[test]
    fn test_link_suggestion() {
        let draft = SaveDraft::suggest("https://example.com");
        assert_eq!(draft.tags, "Link");
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_wifi_and_contact_suggestions() {
        assert_eq!(suggest_tags("WIFI:S:home;T:WPA;P:pw;;"), vec!["Wi-Fi"]);
        assert_eq!(suggest_tags("BEGIN:VCARD\nFN:Jo\nEND:VCARD"), vec!["Contact"]);
        assert!(suggest_tags("plain text").is_empty());
    }

    #[test]
    fn test_multiple_suggestions_joined() {
        let draft = SaveDraft::suggest("http://x?WIFI:S:a;;");
        assert_eq!(draft.tags, "Link, Wi-Fi");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b,,c ,"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("x, x"), vec!["x", "x"]);
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_decode_moves_to_detected() {
        let mut session = ScanSession::new();
        assert!(session.payload().is_none());

        assert!(session.on_decode(&["first"]));
        assert_eq!(session.payload(), Some("first"));

        assert!(session.on_decode(&["", "second"]));
        assert_eq!(session.payload(), Some("second"));

        assert!(!session.on_decode(&["second"]));
    }

    #[test]
    fn test_empty_decode_keeps_state() {
        let mut session = ScanSession::new();
        let empty: [&str; 0] = [];
        assert!(!session.on_decode(&empty));
        assert_eq!(session.state(), &ScanState::Idle);
    }

    #[test]
    fn test_open_dialog_requires_payload() {
        let mut session = ScanSession::new();
        assert!(!session.open_save_dialog());
        assert!(!session.is_save_dialog_open());

        session.on_decode(&["https://example.com"]);
        assert!(session.open_save_dialog());
        assert_eq!(session.draft().map(|d| d.tags.as_str()), Some("Link"));
    }

    #[test]
    fn test_close_dialog_returns_to_detected() {
        let mut session = ScanSession::new();
        session.on_decode(&["payload"]);
        session.open_save_dialog();
        session.close_save_dialog();
        assert_eq!(
            session.state(),
            &ScanState::Detected {
                payload: "payload".to_string()
            }
        );
    }

    #[test]
    fn test_decode_ignored_while_dialog_open() {
        let mut session = ScanSession::new();
        session.on_decode(&["one"]);
        session.open_save_dialog();
        assert!(!session.on_decode(&["two"]));
        assert_eq!(session.payload(), Some("one"));
    }

    #[test]
    fn test_submit_builds_record_and_resets() {
        let mut session = ScanSession::new();
        session.on_decode(&["WIFI:S:office;;"]);
        session.open_save_dialog();

        let draft = SaveDraft {
            title: "Office".to_string(),
            tags: "Wi-Fi, Work".to_string(),
        };
        let record = session.submit(draft).expect("レコードが作られない");

        assert_eq!(record.text, "WIFI:S:office;;");
        assert_eq!(record.title, "Office");
        assert_eq!(record.tags, vec!["Wi-Fi", "Work"]);
        assert!(!record.is_favorite);
        assert_eq!(session.state(), &ScanState::Idle);
    }

    #[test]
    fn test_submit_blank_title_uses_placeholder() {
        let mut session = ScanSession::new();
        session.on_decode(&["x"]);
        session.open_save_dialog();
        let record = session.submit(SaveDraft::default()).expect("レコードが作られない");
        assert_eq!(record.title, UNTITLED_TITLE);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_decode_error_keeps_state() {
        let mut session = ScanSession::new();
        session.on_decode(&["x"]);
        ScanSession::on_decode_error("NotAllowedError: Permission denied");
        assert_eq!(session.payload(), Some("x"));
    }

    #[test]
    fn test_submit_without_dialog_is_none() {
        let mut session = ScanSession::new();
        session.on_decode(&["x"]);
        assert!(session.submit(SaveDraft::default()).is_none());
        assert_eq!(session.payload(), Some("x"));
    }
}
