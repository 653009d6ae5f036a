//! Reload AI Common Library
//!
//! Web(WASM)のUI層から利用される共有ロジック:
//! コスト計算、単位換算、ロード記録のCRUD、標的解析のプロンプトとパーサー

pub mod cost;
pub mod error;
pub mod loadlog;
pub mod parser;
pub mod prompts;
pub mod scoring;
pub mod store;
pub mod types;
pub mod units;

pub use cost::{calculate, parse_field, CostBreakdown, CostInputs, GRAINS_PER_KG};
pub use error::{Error, Result};
pub use loadlog::{add_record, delete_record, load_records, LoadRecord, STORAGE_KEY};
pub use parser::{extract_json, parse_analysis_response, validate_result};
pub use prompts::{build_analysis_prompt, RING_LABELS};
pub use scoring::{ring_value, score_from_rings};
pub use store::{KeyValueStore, MemoryStore};
pub use types::{AnalysisResult, TargetHit};
pub use units::{
    format_grains, format_grams, grains_to_grams, grams_to_grains, round_to, GRAINS_PER_GRAM,
};
