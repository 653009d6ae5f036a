//! Gemini API連携
//!
//! 標的写真1枚と解析プロンプトを送信し、`AnalysisResult`を受け取る。
//! リクエストは1回きりで自動リトライはしない。失敗はすべてエラー文字列に
//! 変換して呼び出し元（UI層）に返し、永続化データには一切触れない。

use reload_ai_common::{build_analysis_prompt, parse_analysis_response, AnalysisResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Gemini API呼び出し（共通処理）
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// 標的写真を解析する
///
/// 弾痕径と期待着弾数を埋め込んだプロンプトと画像を1回のリクエストで送り、
/// レスポンスをパース・検証して返す。
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `data_url` - 標的写真のData URL
/// * `bullet_diameter_mm` - 弾痕の直径（mm、距離スケールの基準）
/// * `expected_shots` - 期待する着弾数
pub async fn analyze_target(
    api_key: &str,
    data_url: &str,
    bullet_diameter_mm: f64,
    expected_shots: u32,
) -> Result<AnalysisResult, String> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| "Invalid data URL".to_string())?;
    let mime_type = extract_mime_type_from_data_url(data_url);

    let prompt = build_analysis_prompt(bullet_diameter_mm, expected_shots);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
        },
    };

    let response_text = call_gemini_api(api_key, &request)
        .await
        .map_err(|e| format!("{:?}", e))?;

    parse_analysis_response(&response_text, expected_shots).map_err(|e| e.to_string())
}
