//! 採点ロジック
//!
//! 圏ラベルごとの集計から合計点を求める。モデルが合計点（score）を
//! 返した場合はそちらをそのまま表示し、クライアント側の計算は
//! ringsしか無い場合のフォールバックとする。

use crate::types::AnalysisResult;
use std::collections::BTreeMap;

/// 圏ラベルの点数（"X"は"10"と同じ10点）
///
/// 未知のラベルは0点として扱う（検証済みの入力では到達しない）。
pub fn ring_value(label: &str) -> u32 {
    match label {
        "X" => 10,
        _ => label.parse().unwrap_or(0),
    }
}

/// 圏ラベル集計から合計点を計算する
pub fn score_from_rings(rings: &BTreeMap<String, u32>) -> u32 {
    rings
        .iter()
        .map(|(label, count)| ring_value(label) * count)
        .sum()
}

impl AnalysisResult {
    /// 表示する合計点
    ///
    /// モデル算出のscoreを優先し、無ければringsから計算する。
    /// どちらも無い場合はNone。
    pub fn total_score(&self) -> Option<u32> {
        self.score
            .or_else(|| self.rings.as_ref().map(score_from_rings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rings_from(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_ring_value() {
        assert_eq!(ring_value("X"), 10);
        assert_eq!(ring_value("10"), 10);
        assert_eq!(ring_value("9"), 9);
        assert_eq!(ring_value("1"), 1);
    }

    #[test]
    fn test_score_from_rings() {
        // X=2, 10=1, 9=1 → 2*10 + 1*10 + 1*9 = 39
        let rings = rings_from(&[("X", 2), ("10", 1), ("9", 1)]);
        assert_eq!(score_from_rings(&rings), 39);
    }

    #[test]
    fn test_score_from_empty_rings() {
        assert_eq!(score_from_rings(&BTreeMap::new()), 0);
    }

    #[test]
    fn test_total_score_prefers_model_score() {
        // モデルのscoreはringsからの再計算より優先される
        let result = AnalysisResult {
            score: Some(42),
            rings: Some(rings_from(&[("X", 1)])),
            ..Default::default()
        };
        assert_eq!(result.total_score(), Some(42));
    }

    #[test]
    fn test_total_score_falls_back_to_rings() {
        let result = AnalysisResult {
            score: None,
            rings: Some(rings_from(&[("X", 2), ("10", 1), ("9", 1)])),
            ..Default::default()
        };
        assert_eq!(result.total_score(), Some(39));
    }

    #[test]
    fn test_total_score_none_without_data() {
        let result = AnalysisResult::default();
        assert_eq!(result.total_score(), None);
    }
}
