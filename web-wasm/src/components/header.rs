//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Reload AI - リローディング支援ツール"</h1>
        </header>
    }
}
