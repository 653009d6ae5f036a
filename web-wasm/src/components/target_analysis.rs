//! 標的解析タブ
//!
//! 選択した標的写真をGemini APIに送り、グルーピングと採点結果を表示する。
//! 解析は同時に1件のみ。実行中は再送信と画像破棄の両方を無効化する。
//! 結果は表示専用の一時データで、新しい画像の選択か再解析で破棄される。

use crate::api::gemini::analyze_target;
use crate::components::upload_area::{SelectedImage, UploadArea};
use crate::storage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reload_ai_common::{AnalysisResult, RING_LABELS};

/// 解析失敗時にユーザーへ見せる共通メッセージ
const ANALYSIS_ERROR_MESSAGE: &str =
    "解析に失敗しました。通信環境とAPIキーを確認して再試行してください";

#[component]
pub fn TargetAnalysis() -> impl IntoView {
    let (api_key, set_api_key) = signal(storage::load_api_key());
    let (bullet_diameter, set_bullet_diameter) = signal("7.82".to_string());
    let (expected_shots, set_expected_shots) = signal("5".to_string());
    let (selected_image, set_selected_image) = signal(None::<SelectedImage>);
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (error, set_error) = signal(String::new());

    // 新しい画像を選ぶと前回の結果とエラーは破棄する
    let on_image_selected = move |image: SelectedImage| {
        if is_analyzing.get_untracked() {
            return;
        }
        set_selected_image.set(Some(image));
        set_result.set(None);
        set_error.set(String::new());
    };

    let on_clear_image = move |_| {
        if is_analyzing.get() {
            return;
        }
        set_selected_image.set(None);
        set_result.set(None);
        set_error.set(String::new());
    };

    let can_analyze = move || {
        !is_analyzing.get() && selected_image.get().is_some() && !api_key.get().trim().is_empty()
    };

    let on_analyze = move |_| {
        if is_analyzing.get_untracked() {
            return;
        }
        let Some(image) = selected_image.get_untracked() else {
            return;
        };

        let key = api_key.get_untracked().trim().to_string();
        if key.is_empty() {
            set_error.set("APIキーが設定されていません".to_string());
            return;
        }

        let diameter = bullet_diameter
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);
        if !(diameter > 0.0 && diameter.is_finite()) {
            set_error.set("弾痕径（mm）を入力してください".to_string());
            return;
        }

        let shots = expected_shots
            .get_untracked()
            .trim()
            .parse::<u32>()
            .unwrap_or(0);
        if shots == 0 {
            set_error.set("発射数を入力してください".to_string());
            return;
        }

        set_is_analyzing.set(true);
        set_result.set(None);
        set_error.set(String::new());

        spawn_local(async move {
            match analyze_target(&key, &image.data_url, diameter, shots).await {
                Ok(analysis) => {
                    set_result.set(Some(analysis));
                }
                Err(_) => {
                    // 失敗時: 画像は保持したままエラーメッセージのみ表示
                    set_error.set(ANALYSIS_ERROR_MESSAGE.to_string());
                }
            }
            set_is_analyzing.set(false);
        });
    };

    view! {
        <section class="target-analysis">
            <h2>"標的写真のAI解析"</h2>

            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-key">"Gemini API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="API Keyを入力..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            storage::save_api_key(&value);
                            set_api_key.set(value);
                        }
                    />
                    <a
                        href="https://aistudio.google.com/app/apikey"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="api-key-link"
                    >
                        "APIキーを取得 →"
                    </a>
                </div>

                <div class="form-group">
                    <label for="bullet-diameter">"弾痕径（mm）"</label>
                    <input
                        type="number"
                        id="bullet-diameter"
                        min="0"
                        step="any"
                        prop:value=move || bullet_diameter.get()
                        on:input=move |ev| set_bullet_diameter.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="expected-shots">"発射数"</label>
                    <input
                        type="number"
                        id="expected-shots"
                        min="1"
                        step="1"
                        prop:value=move || expected_shots.get()
                        on:input=move |ev| set_expected_shots.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <UploadArea is_analyzing=is_analyzing on_image_selected=on_image_selected />

            <Show when=move || selected_image.get().is_some()>
                <div class="selected-image">
                    <img
                        src=move || {
                            selected_image.get().map(|i| i.data_url).unwrap_or_default()
                        }
                        alt="標的写真"
                    />
                    <p>
                        {move || {
                            selected_image.get().map(|i| i.file_name).unwrap_or_default()
                        }}
                    </p>
                    <button
                        class="btn btn-tertiary btn-small"
                        disabled=move || is_analyzing.get()
                        on:click=on_clear_image
                    >
                        "画像を破棄"
                    </button>
                </div>
            </Show>

            <button
                class="btn btn-primary"
                disabled=move || !can_analyze()
                on:click=on_analyze
            >
                {move || if is_analyzing.get() { "解析中..." } else { "AI解析開始" }}
            </button>

            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <Show when=move || result.get().is_some()>
                <ResultPanel result=result />
            </Show>
        </section>
    }
}

/// 解析結果の表示パネル
#[component]
fn ResultPanel(result: ReadSignal<Option<AnalysisResult>>) -> impl IntoView {
    let current = move || result.get().unwrap_or_default();

    // ringsを圏の高い順（X, 10, 9, ...）で並べる
    let ring_rows = move || {
        let analysis = current();
        let Some(rings) = analysis.rings else {
            return Vec::new();
        };
        RING_LABELS
            .iter()
            .filter_map(|&label| rings.get(label).map(|&count| (label, count)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="analysis-result">
            <h3>"解析結果"</h3>

            <table class="result-summary">
                <tbody>
                    <tr>
                        <td>"グルーピング"</td>
                        <td>
                            {move || {
                                let analysis = current();
                                match analysis.group_size_moa {
                                    Some(moa) => format!(
                                        "{:.1} mm（{:.2} MOA）",
                                        analysis.group_size_mm, moa
                                    ),
                                    None => format!("{:.1} mm", analysis.group_size_mm),
                                }
                            }}
                        </td>
                    </tr>
                    <tr>
                        <td>"検出着弾数"</td>
                        <td>{move || format!("{} 発", current().shot_count)}</td>
                    </tr>
                    <tr>
                        <td>"確信度"</td>
                        <td>{move || format!("{:.0}%", current().confidence * 100.0)}</td>
                    </tr>
                    <tr>
                        <td>"合計点"</td>
                        <td>
                            {move || {
                                current()
                                    .total_score()
                                    .map(|score| score.to_string())
                                    .unwrap_or_else(|| "-".to_string())
                            }}
                        </td>
                    </tr>
                </tbody>
            </table>

            <Show when=move || !current().reference_found>
                <p class="text-muted">
                    "スケール基準（弾痕径）を画像から確認できなかったため、距離は参考値です"
                </p>
            </Show>

            <Show when=move || !ring_rows().is_empty()>
                <table class="ring-table">
                    <thead>
                        <tr>
                            <th>"圏"</th>
                            <th>"着弾数"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            ring_rows()
                                .into_iter()
                                .map(|(label, count)| {
                                    view! {
                                        <tr>
                                            <td>{label}</td>
                                            <td>{count}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || !current().hits.is_empty()>
                <table class="hit-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"X (mm)"</th>
                            <th>"Y (mm)"</th>
                            <th>"圏"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            current()
                                .hits
                                .into_iter()
                                .enumerate()
                                .map(|(i, hit)| {
                                    view! {
                                        <tr>
                                            <td>{i + 1}</td>
                                            <td>{format!("{:+.1}", hit.x_mm)}</td>
                                            <td>{format!("{:+.1}", hit.y_mm)}</td>
                                            <td>{hit.ring}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
