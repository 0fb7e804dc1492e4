//! 保存済みQRコードのカード

use leptos::prelude::*;
use qr_manager_common::{is_link, ScanRecord};

use crate::bridge::js_bindings::copy_text;

#[component]
pub fn QrCard(
    record: ScanRecord,
    on_toggle_favorite: Callback<String>,
    on_delete: Callback<String>,
    on_view: Callback<ScanRecord>,
) -> impl IntoView {
    let is_favorite = record.is_favorite;
    let link = is_link(&record.text).then(|| record.text.clone());

    let on_copy = {
        let text = record.text.clone();
        move |_| {
            let text = text.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = copy_text(&text).await {
                    tracing::warn!(error = %e, "copy failed");
                }
            });
        }
    };

    view! {
        <div class="qr-card" class:pinned=is_favorite>
            <div class="card-header">
                <span class="card-title">{record.title.clone()}</span>
                <button
                    class="star-btn"
                    class:active=is_favorite
                    title="Favorite"
                    on:click={
                        let id = record.id.clone();
                        move |_| on_toggle_favorite.run(id.clone())
                    }
                >
                    {if is_favorite { "★" } else { "☆" }}
                </button>
            </div>

            <div class="card-meta">
                <span>{record.created_date_label()}</span>
                {record
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>

            <div class="card-text card-text-clamp">{record.text.clone()}</div>

            <div class="card-actions">
                <button
                    class="btn-secondary btn-sm btn-icon"
                    on:click={
                        let record = record.clone();
                        move |_| on_view.run(record.clone())
                    }
                >
                    "View"
                </button>
                <button class="btn-secondary btn-sm btn-icon" on:click=on_copy>"Copy"</button>
                {link.map(|href| view! {
                    <a href=href target="_blank" rel="noreferrer" class="btn-secondary btn-sm btn-icon">
                        "Link"
                    </a>
                })}
                <button
                    class="btn-danger btn-sm card-delete"
                    title="Delete"
                    on:click={
                        let id = record.id.clone();
                        move |_| on_delete.run(id.clone())
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
