//! KeyboardEvent → ショートカット判定の橋渡し

use qr_manager_common::{is_text_entry, KeyInput};
use wasm_bindgen::JsCast;

pub fn key_input(ev: &web_sys::KeyboardEvent) -> KeyInput {
    KeyInput {
        key: ev.key(),
        code: ev.code(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
    }
}

/// テキスト入力欄にフォーカスがあるか
pub fn text_entry_focused() -> bool {
    let Some(active) = gloo::utils::document().active_element() else {
        return false;
    };
    let editable = active
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.is_content_editable())
        .unwrap_or(false);
    is_text_entry(&active.tag_name(), editable)
}
