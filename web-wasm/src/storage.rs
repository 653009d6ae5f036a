//! localStorageアダプタ
//!
//! 共通ライブラリの`KeyValueStore`をブラウザのlocalStorageで実装する。
//! 書き込み失敗（容量超過・プライベートモード等）は握りつぶす。

use gloo::storage::{LocalStorage, Storage as _};
use reload_ai_common::KeyValueStore;

/// APIキーの保存キー
pub const API_KEY_STORAGE_KEY: &str = "reload-ai.api-key";

/// localStorageベースのストア
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }
}

/// 保存済みAPIキーを読み込む（未保存なら空文字）
pub fn load_api_key() -> String {
    LocalStore.get(API_KEY_STORAGE_KEY).unwrap_or_default()
}

/// APIキーを保存する
pub fn save_api_key(api_key: &str) {
    LocalStore.set(API_KEY_STORAGE_KEY, api_key);
}
