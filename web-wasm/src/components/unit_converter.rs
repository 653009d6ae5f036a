//! 単位換算タブ
//!
//! グレーンとグラムの2つのフィールドを連動させる。編集した側が数値として
//! 読めない間（"1." のような入力途中を含む）は、もう片方を更新せず
//! 編集中のテキストもそのまま残す。

use leptos::prelude::*;
use reload_ai_common::units::{format_grains, format_grams, grains_to_grams, grams_to_grains};

#[component]
pub fn UnitConverter() -> impl IntoView {
    let (grains_text, set_grains_text) = signal(String::new());
    let (grams_text, set_grams_text) = signal(String::new());

    let on_grains_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        if let Ok(grains) = text.trim().parse::<f64>() {
            if grains.is_finite() {
                set_grams_text.set(format_grams(grains_to_grams(grains)));
            }
        }
        set_grains_text.set(text);
    };

    let on_grams_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        if let Ok(grams) = text.trim().parse::<f64>() {
            if grams.is_finite() {
                set_grains_text.set(format_grains(grams_to_grains(grams)));
            }
        }
        set_grams_text.set(text);
    };

    view! {
        <section class="unit-converter">
            <h2>"単位換算（グレーン ⇄ グラム）"</h2>

            <div class="settings-grid">
                <div class="form-group">
                    <label for="grains">"グレーン (gr)"</label>
                    <input
                        type="text"
                        id="grains"
                        inputmode="decimal"
                        placeholder="例: 42.0"
                        prop:value=move || grains_text.get()
                        on:input=on_grains_input
                    />
                </div>

                <div class="form-group">
                    <label for="grams">"グラム (g)"</label>
                    <input
                        type="text"
                        id="grams"
                        inputmode="decimal"
                        placeholder="例: 2.7216"
                        prop:value=move || grams_text.get()
                        on:input=on_grams_input
                    />
                </div>
            </div>

            <p class="text-muted">"1 g = 15.4323584 gr"</p>
        </section>
    }
}
