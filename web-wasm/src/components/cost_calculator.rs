//! コスト計算タブ
//!
//! 入力のたびに同期的に再計算する。数値として読めないフィールドは
//! 共通ライブラリ側で0として扱われるため、入力途中でも合計は常に表示できる。

use leptos::prelude::*;
use reload_ai_common::{calculate, parse_field, CostInputs};

/// 数値入力フィールド（1項目分）
#[component]
fn CostField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type="number"
                id=id
                min="0"
                step="any"
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                }
            />
        </div>
    }
}

#[component]
pub fn CostCalculator() -> impl IntoView {
    let (powder_price, set_powder_price) = signal(String::new());
    let (powder_weight, set_powder_weight) = signal(String::new());
    let (powder_charge, set_powder_charge) = signal(String::new());
    let (primer_price, set_primer_price) = signal(String::new());
    let (primer_count, set_primer_count) = signal(String::new());
    let (bullet_price, set_bullet_price) = signal(String::new());
    let (bullet_count, set_bullet_count) = signal(String::new());
    let (brass_price, set_brass_price) = signal(String::new());
    let (brass_count, set_brass_count) = signal(String::new());
    let (brass_life, set_brass_life) = signal(String::new());

    // 再計算は入力変更ごとに1回だけ。各セルはメモ化された結果を読む
    let breakdown = Memo::new(move |_| {
        calculate(&CostInputs {
            powder_price: parse_field(&powder_price.get()),
            powder_weight_kg: parse_field(&powder_weight.get()),
            powder_charge_grains: parse_field(&powder_charge.get()),
            primer_price: parse_field(&primer_price.get()),
            primer_count: parse_field(&primer_count.get()),
            bullet_price: parse_field(&bullet_price.get()),
            bullet_count: parse_field(&bullet_count.get()),
            brass_price: parse_field(&brass_price.get()),
            brass_count: parse_field(&brass_count.get()),
            brass_life: parse_field(&brass_life.get()),
        })
    });

    view! {
        <section class="cost-calculator">
            <h2>"1発あたりのコスト計算"</h2>

            <div class="settings-grid">
                <CostField id="powder-price" label="火薬価格（容器1本）" value=powder_price set_value=set_powder_price />
                <CostField id="powder-weight" label="火薬内容量（kg）" value=powder_weight set_value=set_powder_weight />
                <CostField id="powder-charge" label="装薬量（グレーン/発）" value=powder_charge set_value=set_powder_charge />
                <CostField id="primer-price" label="雷管価格（1箱）" value=primer_price set_value=set_primer_price />
                <CostField id="primer-count" label="雷管入数（個/箱）" value=primer_count set_value=set_primer_count />
                <CostField id="bullet-price" label="弾頭価格（1箱）" value=bullet_price set_value=set_bullet_price />
                <CostField id="bullet-count" label="弾頭入数（個/箱）" value=bullet_count set_value=set_bullet_count />
                <CostField id="brass-price" label="薬莢価格（1箱）" value=brass_price set_value=set_brass_price />
                <CostField id="brass-count" label="薬莢入数（個/箱）" value=brass_count set_value=set_brass_count />
                <CostField id="brass-life" label="薬莢再使用回数" value=brass_life set_value=set_brass_life />
            </div>

            <table class="cost-breakdown">
                <tbody>
                    <tr>
                        <td>"火薬"</td>
                        <td>{move || format!("{:.4}", breakdown.get().powder)}</td>
                    </tr>
                    <tr>
                        <td>"雷管"</td>
                        <td>{move || format!("{:.4}", breakdown.get().primer)}</td>
                    </tr>
                    <tr>
                        <td>"弾頭"</td>
                        <td>{move || format!("{:.4}", breakdown.get().bullet)}</td>
                    </tr>
                    <tr>
                        <td>"薬莢"</td>
                        <td>{move || format!("{:.4}", breakdown.get().brass)}</td>
                    </tr>
                    <tr class="total-row">
                        <td>"合計（1発）"</td>
                        <td>{move || format!("{:.4}", breakdown.get().total)}</td>
                    </tr>
                    <tr class="total-row">
                        <td>"100発あたり"</td>
                        <td>{move || format!("{:.2}", breakdown.get().per100)}</td>
                    </tr>
                </tbody>
            </table>
        </section>
    }
}
