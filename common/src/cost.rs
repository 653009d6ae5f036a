//! コスト計算エンジン
//!
//! 構成部品（火薬・雷管・弾頭・薬莢）の価格から1発あたりのコストを算出する。
//! 入力はフォームの生テキスト由来なので、非有限値はすべて0に丸めてから
//! 計算する（入力途中でも合計表示を壊さないため）。

use serde::{Deserialize, Serialize};

/// 1kgあたりのグレーン数（正式な換算定数、近似禁止）
pub const GRAINS_PER_KG: f64 = 15432.3584;

/// コスト計算の入力
///
/// 金額の通貨単位は全フィールドで統一されている前提。
/// 火薬価格は容器1本あたり、装薬量は1発あたり（グレーン）。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostInputs {
    /// 火薬価格（容器1本あたり）
    pub powder_price: f64,
    /// 火薬容器の内容量（kg）
    pub powder_weight_kg: f64,
    /// 装薬量（グレーン/発）
    pub powder_charge_grains: f64,
    /// 雷管価格（1箱あたり）
    pub primer_price: f64,
    /// 雷管入数（個/箱）
    pub primer_count: f64,
    /// 弾頭価格（1箱あたり）
    pub bullet_price: f64,
    /// 弾頭入数（個/箱）
    pub bullet_count: f64,
    /// 薬莢価格（1箱あたり）
    pub brass_price: f64,
    /// 薬莢入数（個/箱）
    pub brass_count: f64,
    /// 薬莢の再使用回数
    pub brass_life: f64,
}

/// コスト計算の結果（1発あたりの内訳）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub powder: f64,
    pub primer: f64,
    pub bullet: f64,
    pub brass: f64,
    pub total: f64,
    pub per100: f64,
}

/// フォーム入力のテキストを数値に変換する
///
/// 空文字・数値として解釈できない文字列は0として扱う
/// （入力途中でも計算を止めないための方針）。
pub fn parse_field(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 非有限値を0に丸める
///
/// 入力にも除算結果（ゼロ除算等）にも適用する。入力が未完成の間は
/// 該当部品のコストを0として表示する方針。
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 1発あたりのコスト内訳を計算する
///
/// 純粋関数: 同じ入力に対して常にビット単位で同一の結果を返す。
///
/// # Arguments
/// * `inputs` - コスト計算の入力（非有限値は0として扱われる）
///
/// # Returns
/// 部品別の1発あたりコスト、合計、100発あたりコスト
pub fn calculate(inputs: &CostInputs) -> CostBreakdown {
    let powder_price = finite_or_zero(inputs.powder_price);
    let powder_weight_kg = finite_or_zero(inputs.powder_weight_kg);
    let powder_charge_grains = finite_or_zero(inputs.powder_charge_grains);
    let primer_price = finite_or_zero(inputs.primer_price);
    let primer_count = finite_or_zero(inputs.primer_count);
    let bullet_price = finite_or_zero(inputs.bullet_price);
    let bullet_count = finite_or_zero(inputs.bullet_count);
    let brass_price = finite_or_zero(inputs.brass_price);
    let brass_count = finite_or_zero(inputs.brass_count);
    let brass_life = finite_or_zero(inputs.brass_life);

    let powder_cost_per_grain = (powder_price / powder_weight_kg) / GRAINS_PER_KG;
    let powder = finite_or_zero(powder_cost_per_grain * powder_charge_grains);
    let primer = finite_or_zero(primer_price / primer_count);
    let bullet = finite_or_zero(bullet_price / bullet_count);
    let brass = finite_or_zero((brass_price / brass_count) / brass_life);

    let total = powder + primer + bullet + brass;

    CostBreakdown {
        powder,
        primer,
        bullet,
        brass,
        total,
        per100: total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> CostInputs {
        CostInputs {
            powder_price: 85.0,
            powder_weight_kg: 1.0,
            powder_charge_grains: 42.0,
            primer_price: 65.0,
            primer_count: 1000.0,
            bullet_price: 35.0,
            bullet_count: 100.0,
            brass_price: 45.0,
            brass_count: 50.0,
            brass_life: 5.0,
        }
    }

    #[test]
    fn test_calculate_sample() {
        let breakdown = calculate(&sample_inputs());

        // powderCostPerGrain = (85/1)/15432.3584 ≈ 0.0055083
        assert!((breakdown.powder - 0.2313).abs() < 0.0001);
        assert!((breakdown.primer - 0.065).abs() < 1e-12);
        assert!((breakdown.bullet - 0.35).abs() < 1e-12);
        assert!((breakdown.brass - 0.18).abs() < 1e-12);
        assert!((breakdown.total - 0.8263).abs() < 0.0001);
        assert!((breakdown.per100 - 82.63).abs() < 0.01);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let b = calculate(&sample_inputs());
        assert_eq!(b.total, b.powder + b.primer + b.bullet + b.brass);
        assert_eq!(b.per100, b.total * 100.0);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let inputs = sample_inputs();
        let first = calculate(&inputs);
        let second = calculate(&inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_denominator_clamps_to_zero() {
        let mut inputs = sample_inputs();
        inputs.powder_weight_kg = 0.0;
        let b = calculate(&inputs);

        // ゼロ除算の項は0に丸め、合計は有限のまま
        assert_eq!(b.powder, 0.0);
        assert!(b.total.is_finite());
        assert!((b.total - (0.065 + 0.35 + 0.18)).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_inputs() {
        let b = calculate(&CostInputs::default());
        assert_eq!(b.total, 0.0);
        assert_eq!(b.per100, 0.0);
    }

    #[test]
    fn test_non_finite_inputs_coalesce_to_zero() {
        let mut inputs = sample_inputs();
        inputs.bullet_price = f64::NAN;
        inputs.brass_price = f64::INFINITY;
        let b = calculate(&inputs);

        assert_eq!(b.bullet, 0.0);
        assert_eq!(b.brass, 0.0);
        assert!(b.total.is_finite());
    }

    #[test]
    fn test_parse_field_valid() {
        assert_eq!(parse_field("42.5"), 42.5);
        assert_eq!(parse_field(" 100 "), 100.0);
        // 入力途中の "1." も数値として成立する
        assert_eq!(parse_field("1."), 1.0);
    }

    #[test]
    fn test_parse_field_invalid_is_zero() {
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("abc"), 0.0);
        assert_eq!(parse_field("NaN"), 0.0);
        assert_eq!(parse_field("inf"), 0.0);
    }
}
