//! プロンプト生成モジュール
//!
//! 標的写真解析用のプロンプトを組み立てる。プロンプト本文が外部モデルとの
//! 実質的なインターフェース契約であり、単位（mm）・X圏とリングの区別・
//! 採点規則はここに明文化した内容がそのまま正解の定義になる。

/// 有効な採点圏ラベル（最内圏"X"と"1"〜"10"）
pub const RING_LABELS: &[&str] = &[
    "X", "10", "9", "8", "7", "6", "5", "4", "3", "2", "1",
];

/// 標的解析用プロンプト生成
///
/// # Arguments
/// * `bullet_diameter_mm` - 弾痕の直径（mm）。画像内の距離スケールの基準
/// * `expected_shots` - 期待する着弾数（この数まで検出する）
///
/// # Returns
/// 解析用のプロンプト文字列
pub fn build_analysis_prompt(bullet_diameter_mm: f64, expected_shots: u32) -> String {
    format!(
        r#"あなたは射撃競技の採点員です。この標的写真を解析してください。

## 前提
- 弾痕の直径は {bullet_diameter_mm} mm です。これを画像内の距離スケールの唯一の基準として使い、すべての距離をミリメートルで算出してください。
- 着弾は最大 {expected_shots} 発まで検出してください。

## 解析内容
1. 各着弾の位置を標的中心からの座標（mm）で求める
2. グルーピングサイズ = 最も離れた2つの着弾の中心間距離（mm）
3. 各着弾の採点圏を判定する。最内圏の境界線より完全に内側にある場合のみ "X"、そうでなければその着弾を含む圏のラベル（"10"〜"1"）とする
4. 圏ラベルごとの着弾数を集計し、合計点を算出する。"X" は "10" と同じ10点として数える

## 出力形式（厳密にこのJSONオブジェクト形式のみで出力）
{{
  "groupSizeMm": 数値,
  "groupSizeMoa": 数値またはnull,
  "shotCount": 検出した着弾数,
  "confidence": 0から1の確信度,
  "hits": [
    {{"xMm": 数値, "yMm": 数値, "ring": "X" または "10"〜"1"}}
  ],
  "referenceFound": true/false（弾痕径をスケール基準にできたか）,
  "rings": {{"X": 数, "10": 数, ...}},
  "score": 合計点
}}

JSON以外のテキストは出力しないでください。"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_parameters() {
        let prompt = build_analysis_prompt(7.82, 5);
        assert!(prompt.contains("7.82 mm"));
        assert!(prompt.contains("最大 5 発"));
    }

    #[test]
    fn test_prompt_states_contract_rules() {
        let prompt = build_analysis_prompt(5.7, 10);
        // 単位・X圏の判定規則・採点規則はプロンプトに必ず含まれる
        assert!(prompt.contains("ミリメートル"));
        assert!(prompt.contains("完全に内側"));
        assert!(prompt.contains("10点として数える"));
        assert!(prompt.contains("groupSizeMm"));
    }

    #[test]
    fn test_ring_labels() {
        assert_eq!(RING_LABELS.len(), 11);
        assert_eq!(RING_LABELS[0], "X");
        assert!(RING_LABELS.contains(&"10"));
        assert!(RING_LABELS.contains(&"1"));
    }
}
