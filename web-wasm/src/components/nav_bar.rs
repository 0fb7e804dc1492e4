//! ナビゲーションバー

use leptos::prelude::*;
use leptos_router::components::A;
use qr_manager_common::Theme;

#[component]
pub fn NavBar<F>(theme: ReadSignal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <nav class="navbar">
            <div class="nav-brand">"QR Manager"</div>
            <div class="nav-links">
                // 現在のページには aria-current="page" が付く
                <A href="/" exact=true>
                    <span class="nav-link">"Scan"</span>
                </A>
                <A href="/saved">
                    <span class="nav-link">"Saved"</span>
                </A>
                <button
                    class="theme-btn"
                    title="Toggle Theme (Space)"
                    on:click={
                        let on_toggle_theme = on_toggle_theme.clone();
                        move |_| on_toggle_theme(())
                    }
                >
                    {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
