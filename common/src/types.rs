//! 標的解析結果の型定義
//!
//! 外部のAIモデルが返すJSONに対応する型。表示専用の一時データであり、
//! ロード記録ストアには決して保存しない。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 検出された着弾1点
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetHit {
    /// 標的中心からの水平距離（mm）
    pub x_mm: f64,
    /// 標的中心からの垂直距離（mm）
    pub y_mm: f64,
    /// 採点圏ラベル（最内圏は"X"、それ以外は"10"〜"1"の数字）
    pub ring: String,
}

/// AI解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    /// グルーピングサイズ（最大弾間距離、mm）
    pub group_size_mm: f64,

    /// グルーピングサイズ（MOA、モデルが算出できた場合のみ）
    pub group_size_moa: Option<f64>,

    /// 検出した着弾数
    pub shot_count: u32,

    /// 解析の確信度（0〜1）
    pub confidence: f64,

    /// 検出した着弾の座標リスト
    pub hits: Vec<TargetHit>,

    /// スケール基準（弾痕径）が画像内で確認できたか
    pub reference_found: bool,

    /// 採点圏ラベル → 着弾数
    pub rings: Option<BTreeMap<String, u32>>,

    /// 合計点（モデルが算出した場合のみ）
    pub score: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_deserialize_camel_case() {
        let json = r#"{
            "groupSizeMm": 23.4,
            "groupSizeMoa": 0.8,
            "shotCount": 5,
            "confidence": 0.92,
            "hits": [
                {"xMm": -3.1, "yMm": 5.0, "ring": "X"},
                {"xMm": 10.2, "yMm": -8.7, "ring": "9"}
            ],
            "referenceFound": true,
            "rings": {"X": 1, "9": 1},
            "score": 19
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.group_size_mm, 23.4);
        assert_eq!(result.group_size_moa, Some(0.8));
        assert_eq!(result.shot_count, 5);
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.hits[0].ring, "X");
        assert!(result.reference_found);
        assert_eq!(result.rings.as_ref().unwrap().get("X"), Some(&1));
        assert_eq!(result.score, Some(19));
    }

    #[test]
    fn test_analysis_result_missing_fields_default() {
        let result: AnalysisResult = serde_json::from_str(r#"{"groupSizeMm": 30.0}"#).unwrap();
        assert_eq!(result.group_size_mm, 30.0);
        assert_eq!(result.group_size_moa, None);
        assert_eq!(result.shot_count, 0);
        assert!(result.hits.is_empty());
        assert_eq!(result.rings, None);
        assert_eq!(result.score, None);
    }
}
