//! フッター（ショートカット一覧）

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer-hint">
            "SHORTCUTS: "
            <span class="kbd">"Space"</span>" Toggle Theme • "
            <span class="kbd">"Ctrl+K"</span>" Search Saved • "
            <span class="kbd">"Ctrl+S"</span>" Save Scan"
        </footer>
    }
}
