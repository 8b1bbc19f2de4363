//! Data processing utilities.
//!
//! Three independent, pure operations over in-memory data:
//! - **Normalization**: reduce a raw user record to its id and lower-cased name
//! - **Aggregation**: sum and mean of a numeric dataset
//! - **Analysis**: count the elements of a collection
//!
//! # Example
//!
//! ```
//! use dataproc_core::{calculate_metrics, process_user_data, DataAnalyzer};
//! use dataproc_model::{Numeric, RawUserData};
//!
//! let record = RawUserData::new().with_field("name", "Alice");
//! let user = process_user_data("u1", &record)?;
//! assert_eq!(user.normalized, "alice");
//!
//! let metrics = calculate_metrics(&[1, 2, 3, 4])?;
//! assert_eq!(metrics.total, Numeric::Int(10));
//! assert_eq!(metrics.average, Numeric::Float(2.5));
//!
//! let result = DataAnalyzer::new(None).analyze(&[10, 20, 30]);
//! assert_eq!(result.data_count, 3);
//! # Ok::<(), dataproc_model::DataProcError>(())
//! ```
//!
//! Operations emit `tracing` events at `debug`/`trace` level; installing a
//! subscriber is left to the host.

mod aggregator;
mod analyzer;
mod normalizer;

pub use aggregator::{calculate_metrics, calculate_metrics_from_values};
pub use analyzer::DataAnalyzer;
pub use normalizer::{NAME_FIELD, process_user_data};
