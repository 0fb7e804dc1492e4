//! 保存一覧画面

use leptos::ev;
use leptos::prelude::*;
use qr_manager_common::{
    dispatch_screen, visible, RecordFilter, ScanRecord, Screen, ShortcutAction, ShortcutContext,
    TagFilter,
};
use wasm_bindgen_futures::JsFuture;

use crate::app::Store;
use crate::bridge::download_records_json;
use crate::components::{qr_card::QrCard, view_modal::ViewModal};
use crate::keyboard::{key_input, text_entry_focused};

const DELETE_PROMPT: &str = "Are you sure you want to delete this QR?";
const INVALID_FILE: &str = "Invalid JSON file";

#[component]
pub fn SavedPage(store: Store) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (selected_tag, set_selected_tag) = signal(TagFilter::All);
    let (favorites_only, set_favorites_only) = signal(false);
    let (viewing, set_viewing) = signal(None::<ScanRecord>);
    let search_ref = NodeRef::<leptos::html::Input>::new();

    // Ctrl/Cmd+K: 検索欄へフォーカス
    let handle = window_event_listener(ev::keydown, move |ev| {
        let ctx = ShortcutContext {
            text_entry_focused: text_entry_focused(),
            payload_detected: false,
        };
        if let Some(shortcut) = dispatch_screen(&key_input(&ev), Screen::Saved, ctx) {
            if shortcut.prevent_default {
                ev.prevent_default();
            }
            if shortcut.action == Some(ShortcutAction::FocusSearch) {
                if let Some(input) = search_ref.get() {
                    let _ = input.focus();
                }
            }
        }
    });
    on_cleanup(move || handle.remove());

    let tags = Memo::new(move |_| store.with(|s| s.all_tags()));
    let filtered = Memo::new(move |_| {
        let filter = RecordFilter {
            search: search.get(),
            tag: selected_tag.get(),
            favorites_only: favorites_only.get(),
        };
        store.with(|s| visible(s.records(), &filter).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_toggle_favorite = Callback::new(move |id: String| {
        store.maybe_update(|s| s.toggle_favorite(&id).is_some());
    });
    let on_delete = Callback::new(move |id: String| {
        store.maybe_update(|s| s.delete(&id, |_| gloo::dialogs::confirm(DELETE_PROMPT)));
    });
    let on_view = Callback::new(move |record: ScanRecord| set_viewing.set(Some(record)));

    let on_export = move |_| match store.with_untracked(|s| s.export_json()) {
        Ok(json) => download_records_json(&json),
        Err(e) => tracing::warn!(error = %e, "export failed"),
    };

    let on_import = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 同じファイルを再度選べるようにする
        input.set_value("");

        wasm_bindgen_futures::spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(error = ?e, "failed to read import file");
                    gloo::dialogs::alert(INVALID_FILE);
                    return;
                }
            };
            match store.try_update(|s| s.import_merge(&text)) {
                Some(Ok(count)) => gloo::dialogs::alert(&format!("Imported {} QR codes.", count)),
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "import rejected");
                    gloo::dialogs::alert(INVALID_FILE);
                }
                None => {}
            }
        });
    };

    view! {
        <div class="page-content">
            // 検索・エクスポート
            <div class="toolbar">
                <div class="search-box">
                    <input
                        node_ref=search_ref
                        type="text"
                        placeholder="Search QRs (Ctrl + K)"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-secondary btn-icon" title="Export JSON" on:click=on_export>
                    "Export"
                </button>
                <label class="btn-secondary btn-icon file-label" title="Import JSON">
                    "Import"
                    <input type="file" accept=".json" class="hidden-input" on:change=on_import />
                </label>
            </div>

            // 絞り込み
            <div class="filters">
                <For
                    each=move || tags.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let filter = TagFilter::from_label(&tag);
                        let is_active = {
                            let filter = filter.clone();
                            move || selected_tag.get() == filter
                        };
                        view! {
                            <button
                                class="chip"
                                class:active=is_active
                                on:click=move |_| set_selected_tag.set(filter.clone())
                            >
                                {tag}
                            </button>
                        }
                    }
                />
                <label class="favorites-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || favorites_only.get()
                        on:change=move |ev| set_favorites_only.set(event_target_checked(&ev))
                    />
                    "Favorites Only"
                </label>
            </div>

            <div class="qr-grid">
                <Show when=move || filtered.with(|items| items.is_empty())>
                    <p class="text-muted empty-state">"No QR codes found."</p>
                </Show>
                <For
                    each=move || filtered.get()
                    key=|record| (record.id.clone(), record.is_favorite)
                    children=move |record| {
                        view! {
                            <QrCard
                                record=record
                                on_toggle_favorite=on_toggle_favorite
                                on_delete=on_delete
                                on_view=on_view
                            />
                        }
                    }
                />
            </div>

            {move || viewing.get().map(|record| view! {
                <ViewModal record=record on_close=Callback::new(move |_| set_viewing.set(None)) />
            })}
        </div>
    }
}
