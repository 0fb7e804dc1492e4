//! スキャン画面

use leptos::ev;
use leptos::prelude::*;
use qr_manager_common::{
    dispatch_screen, is_link, now_millis, scan_image_file_name, ScanSession, Screen,
    ShortcutAction, ShortcutContext, SCAN_IMAGE_SIZE,
};
use wasm_bindgen::prelude::*;

use crate::app::Store;
use crate::bridge::js_bindings::{copy_text, start_scanner_js, stop_scanner_js};
use crate::bridge::download_qr_png;
use crate::components::save_modal::SaveModal;
use crate::keyboard::{key_input, text_entry_focused};

#[component]
pub fn ScannerPage(store: Store) -> impl IntoView {
    let session = RwSignal::new(ScanSession::new());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let callbacks = StoredValue::new_local(ScannerCallbacks::new(session));

    // video要素がマウントされたらカメラ開始
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            let (on_decode, on_error) = callbacks.with_value(ScannerCallbacks::functions);
            start_camera(video, on_decode, on_error);
        }
    });
    // 停止してからコールバックを破棄する
    on_cleanup(move || {
        stop_scanner_js();
        callbacks.dispose();
    });

    // Ctrl/Cmd+S: 保存ダイアログ
    let handle = window_event_listener(ev::keydown, move |ev| {
        let ctx = ShortcutContext {
            text_entry_focused: text_entry_focused(),
            payload_detected: session.with_untracked(|s| s.payload().is_some()),
        };
        if let Some(shortcut) = dispatch_screen(&key_input(&ev), Screen::Scan, ctx) {
            if shortcut.prevent_default {
                ev.prevent_default();
            }
            if shortcut.action == Some(ShortcutAction::OpenSaveDialog) {
                session.update(|s| {
                    s.open_save_dialog();
                });
            }
        }
    });
    on_cleanup(move || handle.remove());

    let payload = move || session.with(|s| s.payload().map(str::to_string));

    view! {
        <div class="page-content">
            <div class="scanner-wrapper">
                <video node_ref=video_ref class="scanner-video" prop:muted=true></video>
            </div>

            {move || payload().map(|text| view! { <ScanResult text=text session=session /> })}

            <Show when=move || session.with(|s| s.is_save_dialog_open())>
                <SaveModal session=session store=store />
            </Show>
        </div>
    }
}

/// 検出内容の表示と操作ボタン
#[component]
fn ScanResult(text: String, session: RwSignal<ScanSession>) -> impl IntoView {
    let link = is_link(&text).then(|| text.clone());

    let on_copy = {
        let text = text.clone();
        move |_| {
            let text = text.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match copy_text(&text).await {
                    Ok(()) => gloo::dialogs::alert("Copied to clipboard!"),
                    Err(e) => tracing::warn!(error = %e, "copy failed"),
                }
            });
        }
    };

    let on_download = {
        let text = text.clone();
        move |_| {
            let text = text.clone();
            let filename = scan_image_file_name(now_millis());
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = download_qr_png(&text, SCAN_IMAGE_SIZE, &filename).await {
                    tracing::warn!(error = %e, "QR image download failed");
                }
            });
        }
    };

    view! {
        <div class="scan-result">
            <h3>"Detected Content:"</h3>
            <div class="card-text">{text.clone()}</div>

            <div class="card-actions">
                {link.map(|href| view! {
                    <a href=href target="_blank" rel="noreferrer" class="btn-primary btn-icon">
                        "Open Link"
                    </a>
                })}
                <button class="btn-secondary btn-icon" on:click=on_copy>"Copy"</button>
                <button
                    class="btn-secondary btn-icon"
                    on:click=move |_| session.update(|s| {
                        s.open_save_dialog();
                    })
                >
                    "Save"
                </button>
                <button class="btn-secondary btn-icon" on:click=on_download>"Download"</button>
            </div>
        </div>
    }
}

/// カメラからの通知を受けるコールバック
///
/// スキャン画面が所有し、画面を離れるときに破棄する。
struct ScannerCallbacks {
    on_decode: Closure<dyn FnMut(js_sys::Array)>,
    on_error: Closure<dyn FnMut(JsValue)>,
}

impl ScannerCallbacks {
    fn new(session: RwSignal<ScanSession>) -> Self {
        let on_decode = Closure::<dyn FnMut(js_sys::Array)>::new(move |codes: js_sys::Array| {
            let payloads: Vec<String> = codes.iter().filter_map(|v| v.as_string()).collect();
            // 破棄済みのセッションへの通知は捨てる
            session.try_maybe_update(|s| (s.on_decode(&payloads), ()));
        });
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
            ScanSession::on_decode_error(&message);
        });
        Self { on_decode, on_error }
    }

    fn functions(&self) -> (js_sys::Function, js_sys::Function) {
        (
            self.on_decode.as_ref().unchecked_ref::<js_sys::Function>().clone(),
            self.on_error.as_ref().unchecked_ref::<js_sys::Function>().clone(),
        )
    }
}

/// カメラを起動して検出結果をコールバックへ流す
fn start_camera(
    video: web_sys::HtmlVideoElement,
    on_decode: js_sys::Function,
    on_error: js_sys::Function,
) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = start_scanner_js(&video, &on_decode, &on_error).await {
            tracing::warn!(error = ?e, "failed to start camera");
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn decoded(payload: &str) -> js_sys::Array {
        js_sys::Array::of1(&JsValue::from_str(payload))
    }

    #[wasm_bindgen_test]
    fn test_decode_callback_updates_session() {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(ScanSession::new());
            let callbacks = ScannerCallbacks::new(session);
            let (on_decode, _) = callbacks.functions();

            on_decode.call1(&JsValue::NULL, &decoded("hello")).expect("呼び出し失敗");
            assert_eq!(
                session.with_untracked(|s| s.payload().map(str::to_string)),
                Some("hello".to_string())
            );
        });
    }

    /// 画面を離れた後に届いた通知でも落ちない
    #[wasm_bindgen_test]
    fn test_callbacks_after_page_cleanup() {
        let owner = Owner::new();
        let callbacks = owner.with(|| ScannerCallbacks::new(RwSignal::new(ScanSession::new())));
        owner.cleanup();

        let (on_decode, on_error) = callbacks.functions();
        assert!(on_decode.call1(&JsValue::NULL, &decoded("late")).is_ok());
        assert!(on_error
            .call1(&JsValue::NULL, &JsValue::from_str("NotAllowedError"))
            .is_ok());
    }
}
