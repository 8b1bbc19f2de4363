//! End-to-end scenarios for the public operations.

use dataproc_core::{
    DataAnalyzer, calculate_metrics, calculate_metrics_from_values, process_user_data,
};
use dataproc_model::{AnalyzerConfig, DataProcError, Numeric, RawUserData};
use insta::assert_json_snapshot;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn normalizes_named_user() {
    init_tracing();
    let record: RawUserData = serde_json::from_value(json!({"name": "Alice"})).expect("record");
    let result = process_user_data("u1", &record).expect("normalize");
    assert_json_snapshot!(result, @r#"
    {
      "id": "u1",
      "normalized": "alice"
    }
    "#);
}

#[test]
fn normalizes_unnamed_user() {
    init_tracing();
    let result = process_user_data("u2", &RawUserData::new()).expect("normalize");
    assert_json_snapshot!(result, @r#"
    {
      "id": "u2",
      "normalized": ""
    }
    "#);
}

#[test]
fn numeric_name_is_rejected() {
    let record: RawUserData = serde_json::from_value(json!({"name": 12})).expect("record");
    let err = process_user_data("u3", &record).unwrap_err();
    assert!(matches!(err, DataProcError::TypeMismatch { .. }));
}

#[test]
fn metrics_for_small_dataset() {
    init_tracing();
    let metrics = calculate_metrics(&[1, 2, 3, 4]).expect("metrics");
    assert_json_snapshot!(metrics, @r#"
    {
      "total": 10,
      "average": 2.5
    }
    "#);
}

#[test]
fn metrics_for_empty_dataset() {
    let metrics = calculate_metrics::<i64>(&[]).expect("metrics");
    assert_json_snapshot!(metrics, @r#"
    {
      "total": 0,
      "average": 0
    }
    "#);
}

#[test]
fn metrics_serialize_like_literal_results() {
    let small = calculate_metrics(&[1, 2, 3, 4]).expect("metrics");
    let empty = calculate_metrics::<i64>(&[]).expect("metrics");
    assert_eq!(
        serde_json::to_value(small).expect("serialize"),
        json!({"total": 10, "average": 2.5})
    );
    assert_eq!(
        serde_json::to_value(empty).expect("serialize"),
        json!({"total": 0, "average": 0})
    );
}

#[test]
fn metrics_from_json_array() {
    let values = json!([1, 2, 3, 4]);
    let items = values.as_array().expect("array");
    let metrics = calculate_metrics_from_values(items).expect("metrics");
    assert_eq!(metrics.total, Numeric::Int(10));
    assert_eq!(metrics.average, Numeric::Float(2.5));
}

#[test]
fn metrics_from_json_integers_beyond_f64_precision() {
    let values = json!([9_007_199_254_740_993_u64, 0]);
    let items = values.as_array().expect("array");
    let metrics = calculate_metrics_from_values(items).expect("metrics");
    assert_eq!(
        serde_json::to_value(metrics.total).expect("serialize"),
        json!(9_007_199_254_740_993_u64)
    );
}

#[test]
fn analyzer_without_config() {
    init_tracing();
    let result = DataAnalyzer::new(None).analyze(&[10, 20, 30]);
    assert_json_snapshot!(result, @r#"
    {
      "analyzed": true,
      "data_count": 3
    }
    "#);
}

#[test]
fn analyzer_with_config_on_empty_input() {
    let config = AnalyzerConfig::from_json_str(r#"{"threshold": 5}"#).expect("config");
    let analyzer = DataAnalyzer::new(Some(config));
    let result = analyzer.analyze(Vec::<u32>::new());
    assert_json_snapshot!(result, @r#"
    {
      "analyzed": true,
      "data_count": 0
    }
    "#);
    assert_eq!(analyzer.config().get("threshold"), Some(&json!(5)));
}

#[test]
fn analyzer_on_json_document() {
    let document = json!([{"id": 1}, {"id": 2}]);
    let result = DataAnalyzer::default()
        .analyze_value(&document)
        .expect("analyze");
    assert_eq!(result.data_count, 2);
}
