//! APIレスポンスパーサー
//!
//! 外部モデルのレスポンステキストからJSONを抽出し、スキーマ検証を通して
//! `AnalysisResult` に変換する。モデルの出力は信頼できない入力として扱い、
//! 検証を通過したものだけを下流の計算に渡す。

use crate::error::{Error, Result};
use crate::prompts::RING_LABELS;
use crate::types::AnalysisResult;

/// APIレスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use reload_ai_common::extract_json;
///
/// let response = "結果: {\"groupSizeMm\": 25.0} 以上です。";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"groupSizeMm\": 25.0}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

fn require_finite(value: f64, field: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::Contract(format!("{}が数値ではありません", field)))
    }
}

/// 解析結果のスキーマ検証
///
/// 検証項目:
/// - すべての数値フィールドが有限
/// - confidence が [0, 1] の範囲内
/// - 圏ラベル（hitsとrings双方）が "X"・"1"〜"10" のいずれか
/// - 検出着弾数（shotCountとhitsの件数の両方）が期待数を超えない
pub fn validate_result(result: &AnalysisResult, expected_shots: u32) -> Result<()> {
    require_finite(result.group_size_mm, "groupSizeMm")?;
    if let Some(moa) = result.group_size_moa {
        require_finite(moa, "groupSizeMoa")?;
    }
    require_finite(result.confidence, "confidence")?;
    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(Error::Contract(format!(
            "confidenceが範囲外です: {}",
            result.confidence
        )));
    }

    // shot_countとhits.len()の一致までは強制しない
    // （モデルが座標を確定できた着弾だけをhitsに載せる場合がある）
    if result.shot_count > expected_shots {
        return Err(Error::Contract(format!(
            "shotCountが期待数を超えています: {} > {}",
            result.shot_count, expected_shots
        )));
    }

    if result.hits.len() > expected_shots as usize {
        return Err(Error::Contract(format!(
            "検出着弾数が期待数を超えています: {} > {}",
            result.hits.len(),
            expected_shots
        )));
    }

    for hit in &result.hits {
        require_finite(hit.x_mm, "hits.xMm")?;
        require_finite(hit.y_mm, "hits.yMm")?;
        if !RING_LABELS.contains(&hit.ring.as_str()) {
            return Err(Error::Contract(format!(
                "未知の圏ラベルです: {}",
                hit.ring
            )));
        }
    }

    if let Some(rings) = &result.rings {
        for label in rings.keys() {
            if !RING_LABELS.contains(&label.as_str()) {
                return Err(Error::Contract(format!("未知の圏ラベルです: {}", label)));
            }
        }
    }

    Ok(())
}

/// 解析レスポンスをパースして検証する
///
/// # Arguments
/// * `response` - モデルのレスポンステキスト
/// * `expected_shots` - リクエスト時に指定した期待着弾数
///
/// # Returns
/// * `Ok(AnalysisResult)` - パースと検証の両方に成功
/// * `Err` - JSONが見つからない、パース失敗、または契約違反
pub fn parse_analysis_response(response: &str, expected_shots: u32) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("解析結果のJSONパースエラー: {}", e)))?;
    validate_result(&result, expected_shots)?;
    Ok(result)
}
