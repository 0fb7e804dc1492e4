//! QRコード詳細表示

use leptos::prelude::*;
use qr_manager_common::{record_image_file_name, ScanRecord, PREVIEW_IMAGE_SIZE};

use crate::bridge::js_bindings::{download_bytes_js, render_qr_data_url};
use crate::bridge::png_bytes_from_data_url;

#[component]
pub fn ViewModal(record: ScanRecord, on_close: Callback<()>) -> impl IntoView {
    let (image_url, set_image_url) = signal(None::<String>);

    {
        let text = record.text.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match render_qr_data_url(&text, PREVIEW_IMAGE_SIZE).await {
                Ok(url) => set_image_url.set(Some(url)),
                Err(e) => tracing::warn!(error = %e, "QR preview failed"),
            }
        });
    }

    let filename = record_image_file_name(&record.title);
    let on_download = move |_| {
        let Some(url) = image_url.get_untracked() else {
            return;
        };
        match png_bytes_from_data_url(&url) {
            Ok(bytes) => download_bytes_js(&bytes, &filename, "image/png"),
            Err(e) => tracing::warn!(error = %e, "QR image download failed"),
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="card-header">
                    <span class="card-title">{record.title.clone()}</span>
                    <button class="btn-sm btn-secondary" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <div class="qr-preview-container">
                    {move || image_url.get().map(|src| view! {
                        <img src=src alt="QR code" width=PREVIEW_IMAGE_SIZE.to_string() height=PREVIEW_IMAGE_SIZE.to_string() />
                    })}
                </div>
                <p class="qr-preview-text">{record.text.clone()}</p>
                <div class="card-actions modal-actions-center">
                    <button
                        class="btn-primary btn-icon"
                        disabled=move || image_url.get().is_none()
                        on:click=on_download
                    >
                        "Download PNG"
                    </button>
                </div>
            </div>
        </div>
    }
}
