pub mod analysis;
pub mod chart;
pub mod core;
pub mod dashboard;
pub mod format;
pub mod render;
pub mod utils;

// Re-exports
pub use analysis::payload::{AnalysisPayload, Section, SubSection};
pub use analysis::schema::SchemaType;
pub use chart::{ChartPoint, SeriesEntry, SeriesOptions};
pub use dashboard::{render_dashboard, ExpandedSections};
pub use render::dispatch::dispatch;
pub use render::StructuralError;
