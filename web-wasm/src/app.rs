//! メインアプリケーションコンポーネント

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use qr_manager_common::{dispatch_global, RecordStore, ShortcutAction, ShortcutContext, Theme, THEME_KEY};

use crate::components::{footer::Footer, nav_bar::NavBar, saved_page::SavedPage, scanner_page::ScannerPage};
use crate::keyboard::{key_input, text_entry_focused};
use crate::storage::{local_kv, LocalStorageBackend};

/// 保存済みレコード（ルートで所有し各画面へ渡す）
pub type Store = RwSignal<RecordStore<LocalStorageBackend>>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (theme, set_theme) = signal(local_kv().get(THEME_KEY, Theme::default()));
    let store: Store = RwSignal::new(RecordStore::load(local_kv()));

    // テーマを body に反映して保存
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(body) = gloo::utils::document().body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
        local_kv().set(THEME_KEY, &theme);
    });

    let toggle_theme = move || set_theme.update(|t| *t = t.toggled());

    // Space: テーマ切替
    let handle = window_event_listener(ev::keydown, move |ev| {
        let ctx = ShortcutContext {
            text_entry_focused: text_entry_focused(),
            ..Default::default()
        };
        if let Some(shortcut) = dispatch_global(&key_input(&ev), ctx) {
            if shortcut.prevent_default {
                ev.prevent_default();
            }
            if shortcut.action == Some(ShortcutAction::ToggleTheme) {
                toggle_theme();
            }
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Router>
            <div class="container">
                <NavBar theme=theme on_toggle_theme=move |_| toggle_theme() />

                <Routes fallback=|| view! { <p class="text-muted">"Page not found."</p> }>
                    <Route path=path!("/") view=move || view! { <ScannerPage store=store /> } />
                    <Route path=path!("/saved") view=move || view! { <SavedPage store=store /> } />
                </Routes>

                <Footer />
            </div>
        </Router>
    }
}
