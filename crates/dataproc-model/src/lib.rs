pub mod analysis;
pub mod error;
pub mod metrics;
pub mod record;

pub use analysis::{AnalysisResult, AnalyzerConfig};
pub use error::{DataProcError, JsonKind, Result};
pub use metrics::{MetricsResult, Numeric};
pub use record::{NormalizedUserData, RawUserData};
