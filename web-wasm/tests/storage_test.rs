//! localStorageアダプタのブラウザテスト
//!
//! `wasm-pack test --headless --chrome` で実行する。
//! localStorageが必要なためwasmターゲット限定。

#![cfg(target_arch = "wasm32")]

use reload_ai_common::{add_record, load_records, KeyValueStore, LoadRecord, STORAGE_KEY};
use reload_ai_wasm::storage::{load_api_key, save_api_key, LocalStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_key(key: &str) {
    LocalStore.set(key, "");
}

#[wasm_bindgen_test]
fn local_store_set_and_get() {
    LocalStore.set("reload-ai.test", "値");
    assert_eq!(LocalStore.get("reload-ai.test"), Some("値".to_string()));
}

#[wasm_bindgen_test]
fn local_store_missing_key() {
    assert_eq!(LocalStore.get("reload-ai.missing"), None);
}

#[wasm_bindgen_test]
fn api_key_round_trip() {
    save_api_key("test-key-123");
    assert_eq!(load_api_key(), "test-key-123");
    save_api_key("");
}

#[wasm_bindgen_test]
fn load_records_through_local_storage() {
    clear_key(STORAGE_KEY);

    let record = LoadRecord {
        id: "wasm-test-1".to_string(),
        name: "練習用308".to_string(),
        caliber: ".308 Win".to_string(),
        bullet_weight_grains: 168.0,
        powder_type: "IMR 4064".to_string(),
        powder_charge_grains: 42.0,
        primer_type: "CCI BR-2".to_string(),
        created_at_ms: 1_700_000_000_000.0,
    };

    let records = add_record(&LocalStore, record).unwrap();
    assert_eq!(records.len(), 1);

    // localStorage経由で読み直しても同じ内容
    let loaded = load_records(&LocalStore);
    assert_eq!(loaded, records);

    clear_key(STORAGE_KEY);
}

#[wasm_bindgen_test]
fn load_records_malformed_value_is_empty() {
    LocalStore.set(STORAGE_KEY, "{not valid json");
    assert!(load_records(&LocalStore).is_empty());
    clear_key(STORAGE_KEY);
}
