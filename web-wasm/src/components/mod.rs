pub mod cost_calculator;
pub mod header;
pub mod load_log;
pub mod target_analysis;
pub mod unit_converter;
pub mod upload_area;
