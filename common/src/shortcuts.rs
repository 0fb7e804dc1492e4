//! キーボードショートカットの振り分け
//!
//! - Space: テーマ切替（テキスト入力中は無効）
//! - Ctrl/Cmd+S: 保存ダイアログ（スキャン画面、検出済みのときのみ）
//! - Ctrl/Cmd+K: 検索欄へフォーカス（保存一覧画面）

/// 画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Scan,
    Saved,
}

/// 押されたキー（KeyboardEvent の必要部分）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`
    pub key: String,
    /// `KeyboardEvent.code`
    pub code: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    fn is_command(&self, letter: &str) -> bool {
        (self.ctrl || self.meta) && self.key.eq_ignore_ascii_case(letter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutContext {
    pub text_entry_focused: bool,
    pub payload_detected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ToggleTheme,
    OpenSaveDialog,
    FocusSearch,
}

/// 振り分け結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub action: Option<ShortcutAction>,
    /// ブラウザ既定動作（保存・検索・スクロール）を止めるか
    pub prevent_default: bool,
}

impl Shortcut {
    fn run(action: ShortcutAction) -> Self {
        Self {
            action: Some(action),
            prevent_default: true,
        }
    }
}

/// フォーカス中の要素がテキスト入力欄か
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
}

/// グローバルリスナーが拾うショートカット（Space）
pub fn dispatch_global(input: &KeyInput, ctx: ShortcutContext) -> Option<Shortcut> {
    if input.code == "Space" && !input.ctrl && !input.meta && !ctx.text_entry_focused {
        return Some(Shortcut::run(ShortcutAction::ToggleTheme));
    }
    None
}

/// 画面ごとのリスナーが拾うショートカット
pub fn dispatch_screen(input: &KeyInput, screen: Screen, ctx: ShortcutContext) -> Option<Shortcut> {
    match screen {
        Screen::Scan if input.is_command("s") => Some(Shortcut {
            action: ctx.payload_detected.then_some(ShortcutAction::OpenSaveDialog),
            prevent_default: true,
        }),
        Screen::Saved if input.is_command("k") => Some(Shortcut::run(ShortcutAction::FocusSearch)),
        _ => None,
    }
}

/// 全ショートカットをまとめて判定
pub fn dispatch(input: &KeyInput, screen: Screen, ctx: ShortcutContext) -> Option<Shortcut> {
    dispatch_global(input, ctx).or_else(|| dispatch_screen(input, screen, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, code: &str) -> KeyInput {
        KeyInput {
            key: key.to_string(),
            code: code.to_string(),
            ..Default::default()
        }
    }

    fn ctrl(letter: &str) -> KeyInput {
        KeyInput {
            key: letter.to_string(),
            code: format!("Key{}", letter.to_ascii_uppercase()),
            ctrl: true,
            meta: false,
        }
    }

    fn meta(letter: &str) -> KeyInput {
        KeyInput {
            meta: true,
            ctrl: false,
            ..ctrl(letter)
        }
    }

    #[test]
    fn test_space_toggles_theme() {
        let result = dispatch(&key(" ", "Space"), Screen::Scan, ShortcutContext::default());
        assert_eq!(result, Some(Shortcut::run(ShortcutAction::ToggleTheme)));
    }

    #[test]
    fn test_space_suppressed_in_text_entry() {
        let ctx = ShortcutContext {
            text_entry_focused: true,
            ..Default::default()
        };
        assert_eq!(dispatch(&key(" ", "Space"), Screen::Saved, ctx), None);
    }

    #[test]
    fn test_ctrl_s_opens_dialog_with_payload() {
        let ctx = ShortcutContext {
            payload_detected: true,
            ..Default::default()
        };
        let result = dispatch(&ctrl("s"), Screen::Scan, ctx).expect("ショートカット未検出");
        assert_eq!(result.action, Some(ShortcutAction::OpenSaveDialog));
        assert!(result.prevent_default);

        let result = dispatch(&meta("s"), Screen::Scan, ctx).expect("ショートカット未検出");
        assert_eq!(result.action, Some(ShortcutAction::OpenSaveDialog));
    }

    #[test]
    fn test_ctrl_s_without_payload_only_prevents_default() {
        let result = dispatch(&ctrl("s"), Screen::Scan, ShortcutContext::default())
            .expect("ショートカット未検出");
        assert_eq!(result.action, None);
        assert!(result.prevent_default);
    }

    #[test]
    fn test_ctrl_s_ignored_on_saved_screen() {
        let ctx = ShortcutContext {
            payload_detected: true,
            ..Default::default()
        };
        assert_eq!(dispatch(&ctrl("s"), Screen::Saved, ctx), None);
    }

    #[test]
    fn test_ctrl_k_focuses_search_on_saved_screen() {
        let ctx = ShortcutContext {
            text_entry_focused: true,
            ..Default::default()
        };
        let result = dispatch(&ctrl("k"), Screen::Saved, ctx);
        assert_eq!(result, Some(Shortcut::run(ShortcutAction::FocusSearch)));
        assert_eq!(dispatch(&ctrl("k"), Screen::Scan, ctx), None);
    }

    #[test]
    fn test_plain_letters_ignored() {
        assert_eq!(dispatch(&key("s", "KeyS"), Screen::Scan, ShortcutContext::default()), None);
        assert_eq!(dispatch(&key("k", "KeyK"), Screen::Saved, ShortcutContext::default()), None);
    }

    #[test]
    fn test_is_text_entry() {
        assert!(is_text_entry("INPUT", false));
        assert!(is_text_entry("textarea", false));
        assert!(is_text_entry("SELECT", false));
        assert!(is_text_entry("DIV", true));
        assert!(!is_text_entry("BUTTON", false));
        assert!(!is_text_entry("BODY", false));
    }
}
