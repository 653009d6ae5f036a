use reload_ai_common::parse_analysis_response;
use serde_json::json;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

#[tokio::test]
async fn gemini_analysis_contract_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let prompt = r#"Return ONLY a JSON object exactly in this format:
{
  "groupSizeMm": 25.0,
  "groupSizeMoa": null,
  "shotCount": 3,
  "confidence": 0.9,
  "hits": [
    {"xMm": 0.0, "yMm": 0.0, "ring": "X"},
    {"xMm": 5.0, "yMm": -3.0, "ring": "10"},
    {"xMm": -12.0, "yMm": 8.0, "ring": "9"}
  ],
  "referenceFound": false,
  "rings": {"X": 1, "10": 1, "9": 1},
  "score": 29
}
"#;

    let body = json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "responseMimeType": "application/json"
        }
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}?key={}", GEMINI_API_URL, api_key))
        .json(&body)
        .send()
        .await
        .expect("request failed");

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        panic!("gemini api failed with status {}: {}", status, text);
    }

    let payload: serde_json::Value = response.json().await.expect("invalid json response");
    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .expect("response text missing");

    let result = parse_analysis_response(text, 3).expect("failed to parse analysis response");
    assert_eq!(result.shot_count, 3);
    assert_eq!(result.hits.len(), 3);
    assert_eq!(result.total_score(), Some(29));
}
