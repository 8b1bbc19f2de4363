//! Data analyzer.
//!
//! A [`DataAnalyzer`] owns an [`AnalyzerConfig`] for its lifetime and runs a
//! counting pass over its input. The configuration is carried for callers that
//! read it back; `analyze` itself does not consult it.

use dataproc_model::{AnalysisResult, AnalyzerConfig, DataProcError, JsonKind, Result};
use serde_json::Value;

/// Analyzes data collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataAnalyzer {
    config: AnalyzerConfig,
}

impl DataAnalyzer {
    /// Creates an analyzer. `None` gives this instance its own empty config.
    pub fn new(config: Option<AnalyzerConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Counts the elements of `data` without inspecting them.
    pub fn analyze<D>(&self, data: D) -> AnalysisResult
    where
        D: IntoIterator,
        D::IntoIter: ExactSizeIterator,
    {
        let data_count = data.into_iter().len();
        tracing::debug!(data_count, "Analyzed data");
        AnalysisResult::counted(data_count)
    }

    /// Counts a dynamically-typed JSON value.
    ///
    /// Arrays count elements, objects count entries and strings count
    /// characters. Scalars and `null` have no length.
    pub fn analyze_value(&self, data: &Value) -> Result<AnalysisResult> {
        let data_count = match data {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            Value::String(s) => s.chars().count(),
            other => {
                return Err(DataProcError::type_mismatch(
                    "data",
                    "array, object or string",
                    other,
                ));
            }
        };
        tracing::debug!(data_count, kind = JsonKind::of(data).as_str(), "Analyzed value");
        Ok(AnalysisResult::counted(data_count))
    }
}
