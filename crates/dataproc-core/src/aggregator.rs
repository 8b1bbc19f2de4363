//! Numeric aggregation.
//!
//! Computes the sum and arithmetic mean of a dataset. All-integer datasets are
//! summed exactly; any float element switches the sum to `f64`. An empty
//! dataset yields integer zero for both rather than a division fault.

use dataproc_model::{DataProcError, JsonKind, MetricsResult, Numeric, Result};
use serde_json::Value;

/// Sum and mean of `dataset`, summed left to right.
///
/// Fails only when an all-integer total leaves the 64-bit range.
pub fn calculate_metrics<T>(dataset: &[T]) -> Result<MetricsResult>
where
    T: Copy + Into<Numeric>,
{
    let values: Vec<Numeric> = dataset.iter().map(|&value| value.into()).collect();
    aggregate(&values)
}

/// Sum and mean of a JSON dataset.
///
/// Every element must be a JSON number; the first one that is not is reported
/// as a `TypeMismatch` naming its index.
pub fn calculate_metrics_from_values(values: &[Value]) -> Result<MetricsResult> {
    let dataset = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            json_numeric(value).ok_or_else(|| {
                DataProcError::type_mismatch(
                    format!("[{index}]"),
                    JsonKind::Number.as_str(),
                    value,
                )
            })
        })
        .collect::<Result<Vec<Numeric>>>()?;
    aggregate(&dataset)
}

fn json_numeric(value: &Value) -> Option<Numeric> {
    value
        .as_i64()
        .map(Numeric::Int)
        .or_else(|| value.as_u64().map(Numeric::UInt))
        .or_else(|| value.as_f64().map(Numeric::Float))
}

fn aggregate(values: &[Numeric]) -> Result<MetricsResult> {
    if values.is_empty() {
        tracing::debug!(values = 0, "Calculated metrics for empty dataset");
        return Ok(MetricsResult::default());
    }

    let exact: Option<Vec<i128>> = values.iter().map(|value| value.as_i128()).collect();
    let total = match exact {
        Some(integers) => {
            let sum: i128 = integers.into_iter().sum();
            Numeric::from_i128(sum).ok_or(DataProcError::TotalOutOfRange { total: sum })?
        }
        None => Numeric::Float(
            values
                .iter()
                .fold(0.0_f64, |acc, value| acc + value.as_f64()),
        ),
    };
    let average = Numeric::Float(total.as_f64() / values.len() as f64);

    tracing::debug!(
        values = values.len(),
        %total,
        %average,
        "Calculated metrics"
    );

    Ok(MetricsResult { total, average })
}
