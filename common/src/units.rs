//! 単位換算（グレーン ⇄ グラム）

/// 1グラムあたりのグレーン数
///
/// コスト計算のkg定数とは独立したリテラルとして保持する
/// （丸めで導出せず、両方を正確な値で持つ）。
pub const GRAINS_PER_GRAM: f64 = 15.4323584;

/// グレーン → グラム
pub fn grains_to_grams(grains: f64) -> f64 {
    grains / GRAINS_PER_GRAM
}

/// グラム → グレーン
pub fn grams_to_grains(grams: f64) -> f64 {
    grams * GRAINS_PER_GRAM
}

/// 小数点以下n桁に丸める（表示用）
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// グラム値の表示文字列（小数点以下4桁）
pub fn format_grams(grams: f64) -> String {
    format!("{:.4}", grams)
}

/// グレーン値の表示文字列（小数点以下2桁）
pub fn format_grains(grains: f64) -> String {
    format!("{:.2}", grains)
}
