//! ロードデータ記録（レシピ帳）
//!
//! 個人のロードレシピを1つの固定キーの下にJSON配列として丸ごと保存する。
//! 追加・削除のたびにリスト全体を読み書きする（部分更新なし）。
//! 複数タブ同時利用時はlast-write-winsであり、整合性保証はしない。

use crate::error::{Error, Result};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};

/// ロード記録の保存キー（バージョン番号なしの固定キー）
pub const STORAGE_KEY: &str = "reload-ai.loads";

/// ロード記録1件
///
/// 作成後は不変。idは作成時に生成される不透明トークンで再利用しない。
/// 作成日時はエポックミリ秒で保持し、ロケール表示はUI層の責務。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadRecord {
    pub id: String,
    /// 表示名
    pub name: String,
    /// 口径（自由記述）
    pub caliber: String,
    /// 弾頭重量（グレーン）
    pub bullet_weight_grains: f64,
    /// 火薬の銘柄（自由記述）
    pub powder_type: String,
    /// 装薬量（グレーン）
    pub powder_charge_grains: f64,
    /// 雷管の種類（自由記述）
    pub primer_type: String,
    /// 作成日時（エポックミリ秒）
    pub created_at_ms: f64,
}

/// 保存済みのロード記録を読み込む
///
/// 値が存在しない・壊れている場合は空リストを返す（致命的エラーにしない）。
pub fn load_records(store: &dyn KeyValueStore) -> Vec<LoadRecord> {
    store
        .get(STORAGE_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_records(store: &dyn KeyValueStore, records: &[LoadRecord]) {
    if let Ok(json) = serde_json::to_string(records) {
        store.set(STORAGE_KEY, &json);
    }
}

/// ロード記録を追加する
///
/// 名前と口径が空（空白のみ含む）の場合は保存せずエラーを返す。
/// 成功時は新しい記録を先頭に挿入した全リストを保存し、そのリストを返す。
pub fn add_record(store: &dyn KeyValueStore, record: LoadRecord) -> Result<Vec<LoadRecord>> {
    if record.name.trim().is_empty() {
        return Err(Error::Validation("名前が入力されていません".into()));
    }
    if record.caliber.trim().is_empty() {
        return Err(Error::Validation("口径が入力されていません".into()));
    }

    let mut records = load_records(store);
    records.insert(0, record);
    save_records(store, &records);
    Ok(records)
}

/// ロード記録をidで削除する
///
/// 一致するidの記録だけを取り除き、残りの順序は変えずに保存する。
/// idが存在しない場合はリストをそのまま返す。
pub fn delete_record(store: &dyn KeyValueStore, id: &str) -> Vec<LoadRecord> {
    let mut records = load_records(store);
    records.retain(|r| r.id != id);
    save_records(store, &records);
    records
}
