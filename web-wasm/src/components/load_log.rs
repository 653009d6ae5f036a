//! ロード記録タブ
//!
//! レシピの追加と削除。名前と口径が両方入力されるまで保存ボタンは無効。
//! リストは新しい順で表示し、変更のたびに全件を保存し直す。

use crate::storage::LocalStore;
use leptos::prelude::*;
use reload_ai_common::{add_record, delete_record, load_records, parse_field, LoadRecord};
use wasm_bindgen::JsValue;

/// 作成時に生成する不透明なID（エポックミリ秒 + 乱数サフィックス）
fn new_record_id() -> String {
    let suffix = (js_sys::Math::random() * 0xffff_ffffu32 as f64) as u32;
    format!("{}-{:08x}", js_sys::Date::now(), suffix)
}

/// 作成日時のロケール表示（表示専用、保存値はエポックミリ秒のまま）
fn format_created_at(ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    date.to_locale_date_string("ja-JP", &JsValue::UNDEFINED).into()
}

#[component]
pub fn LoadLog() -> impl IntoView {
    let (records, set_records) = signal(load_records(&LocalStore));

    let (name, set_name) = signal(String::new());
    let (caliber, set_caliber) = signal(String::new());
    let (bullet_weight, set_bullet_weight) = signal(String::new());
    let (powder_type, set_powder_type) = signal(String::new());
    let (powder_charge, set_powder_charge) = signal(String::new());
    let (primer_type, set_primer_type) = signal(String::new());

    let can_save = move || {
        !name.get().trim().is_empty() && !caliber.get().trim().is_empty()
    };

    let on_save = move |_| {
        let record = LoadRecord {
            id: new_record_id(),
            name: name.get().trim().to_string(),
            caliber: caliber.get().trim().to_string(),
            bullet_weight_grains: parse_field(&bullet_weight.get()),
            powder_type: powder_type.get().trim().to_string(),
            powder_charge_grains: parse_field(&powder_charge.get()),
            primer_type: primer_type.get().trim().to_string(),
            created_at_ms: js_sys::Date::now(),
        };

        if let Ok(updated) = add_record(&LocalStore, record) {
            set_records.set(updated);
            set_name.set(String::new());
            set_caliber.set(String::new());
            set_bullet_weight.set(String::new());
            set_powder_type.set(String::new());
            set_powder_charge.set(String::new());
            set_primer_type.set(String::new());
        }
    };

    let on_delete = move |id: String| {
        set_records.set(delete_record(&LocalStore, &id));
    };

    view! {
        <section class="load-log">
            <h2>"ロード記録"</h2>

            <div class="settings-grid">
                <div class="form-group">
                    <label for="load-name">"名前"</label>
                    <input
                        type="text"
                        id="load-name"
                        placeholder="例: 練習用308"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="load-caliber">"口径"</label>
                    <input
                        type="text"
                        id="load-caliber"
                        placeholder="例: .308 Win"
                        prop:value=move || caliber.get()
                        on:input=move |ev| set_caliber.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="load-bullet-weight">"弾頭重量（グレーン）"</label>
                    <input
                        type="number"
                        id="load-bullet-weight"
                        min="0"
                        step="any"
                        prop:value=move || bullet_weight.get()
                        on:input=move |ev| set_bullet_weight.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="load-powder-type">"火薬"</label>
                    <input
                        type="text"
                        id="load-powder-type"
                        placeholder="例: IMR 4064"
                        prop:value=move || powder_type.get()
                        on:input=move |ev| set_powder_type.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="load-powder-charge">"装薬量（グレーン）"</label>
                    <input
                        type="number"
                        id="load-powder-charge"
                        min="0"
                        step="any"
                        prop:value=move || powder_charge.get()
                        on:input=move |ev| set_powder_charge.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="load-primer-type">"雷管"</label>
                    <input
                        type="text"
                        id="load-primer-type"
                        placeholder="例: CCI BR-2"
                        prop:value=move || primer_type.get()
                        on:input=move |ev| set_primer_type.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <button
                class="btn btn-primary"
                disabled=move || !can_save()
                on:click=on_save
            >
                "保存"
            </button>

            <Show
                when=move || !records.get().is_empty()
                fallback=|| view! { <p class="text-muted">"記録はまだありません"</p> }
            >
                <table class="load-table">
                    <thead>
                        <tr>
                            <th>"名前"</th>
                            <th>"口径"</th>
                            <th>"弾頭 (gr)"</th>
                            <th>"火薬"</th>
                            <th>"装薬 (gr)"</th>
                            <th>"雷管"</th>
                            <th>"作成日"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || records.get()
                            key=|record| record.id.clone()
                            children=move |record| {
                                let id = record.id.clone();
                                let on_delete = on_delete.clone();
                                view! {
                                    <tr>
                                        <td>{record.name.clone()}</td>
                                        <td>{record.caliber.clone()}</td>
                                        <td>{format!("{:.1}", record.bullet_weight_grains)}</td>
                                        <td>{record.powder_type.clone()}</td>
                                        <td>{format!("{:.1}", record.powder_charge_grains)}</td>
                                        <td>{record.primer_type.clone()}</td>
                                        <td>{format_created_at(record.created_at_ms)}</td>
                                        <td>
                                            <button
                                                class="btn btn-tertiary btn-small"
                                                on:click=move |_| on_delete(id.clone())
                                            >
                                                "削除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
