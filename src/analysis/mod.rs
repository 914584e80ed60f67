pub mod payload;
pub mod records;
pub mod risk;
pub mod schema;

/// The externally-supplied, semi-structured analysis data for one
/// sub-section. Field order is preserved and significant for display.
pub type AnalysisRecord = serde_json::Map<String, serde_json::Value>;
