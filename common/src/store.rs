//! キーバリューストア抽象
//!
//! 永続化先（ブラウザのlocalStorage等）をトレイトの背後に隠し、
//! ログ操作のロジックをネイティブ環境で単体テストできるようにする。

use std::cell::RefCell;
use std::collections::HashMap;

/// 文字列キーバリューストア
///
/// 実装はWeb側（localStorage）とテスト用のインメモリ版の2つ。
/// 書き込み失敗（容量超過等）は握りつぶす方針なので戻り値は持たない。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// テスト用インメモリストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
