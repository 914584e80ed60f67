pub mod dispatch;
pub mod generic;
pub mod output;
pub mod sections;

pub use generic::{StructuralError, MAX_DEPTH};
pub use output::{Block, ChartKind, ChartSpec, RenderedSection, Theme};
