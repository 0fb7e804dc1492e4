//! 保存ダイアログ

use leptos::prelude::*;
use qr_manager_common::{SaveDraft, ScanSession};

use crate::app::Store;

#[component]
pub fn SaveModal(session: RwSignal<ScanSession>, store: Store) -> impl IntoView {
    // タグ候補を埋めた初期値
    let initial = session.with_untracked(|s| s.draft().cloned().unwrap_or_default());
    let (title, set_title) = signal(initial.title);
    let (tags, set_tags) = signal(initial.tags);

    let close = move || session.update(|s| s.close_save_dialog());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = SaveDraft {
            title: title.get_untracked(),
            tags: tags.get_untracked(),
        };
        let Some(record) = session.try_update(|s| s.submit(draft)).flatten() else {
            return;
        };
        tracing::info!(id = %record.id, "scan saved");
        store.update(|st| st.add(record));
        gloo::dialogs::alert("QR Saved Successfully!");
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <h3>"Save QR Code"</h3>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="save-title">"Title"</label>
                        <input
                            id="save-title"
                            type="text"
                            autofocus=true
                            placeholder="e.g. Office Wi-Fi"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="save-tags">"Tags (comma separated)"</label>
                        <input
                            id="save-tags"
                            type="text"
                            placeholder="Link, Work, Personal"
                            prop:value=move || tags.get()
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="card-actions modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
