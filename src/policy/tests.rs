//! Tests for the retraining decision policy.

use super::*;
use crate::error::Error;
use crate::metrics::{EvaluationResult, MetricKind};

fn policy_with_threshold(threshold: f64) -> RetrainPolicy {
    RetrainPolicy::new(PolicyConfig {
        threshold,
        comparison: Comparison::GreaterThan,
    })
    .unwrap()
}

#[test]
fn test_metric_below_threshold() {
    let decision = policy_with_threshold(10.0).evaluate(8.5).unwrap();
    assert!(!decision.should_retrain);
    assert_eq!(decision.reason, "metric within threshold");
}

#[test]
fn test_metric_at_threshold_is_satisfactory() {
    // Boundary is inclusive on the satisfactory side
    let decision = policy_with_threshold(10.0).evaluate(10.0).unwrap();
    assert!(!decision.should_retrain);
}

#[test]
fn test_metric_just_above_threshold() {
    let decision = policy_with_threshold(10.0).evaluate(10.01).unwrap();
    assert!(decision.should_retrain);
    assert_eq!(decision.reason, "metric exceeds threshold");
}

#[test]
fn test_zero_metric() {
    let decision = policy_with_threshold(10.0).evaluate(0.0).unwrap();
    assert!(!decision.should_retrain);
}

#[test]
fn test_negative_metric_rejected() {
    let err = policy_with_threshold(10.0).evaluate(-3.0).unwrap_err();
    assert!(err.is_invalid_metric());
}

#[test]
fn test_nan_metric_rejected() {
    let err = policy_with_threshold(10.0).evaluate(f64::NAN).unwrap_err();
    assert!(err.is_invalid_metric());
}

#[test]
fn test_infinite_metric_rejected() {
    let err = policy_with_threshold(10.0)
        .evaluate(f64::INFINITY)
        .unwrap_err();
    assert!(err.is_invalid_metric());

    let err = policy_with_threshold(10.0)
        .evaluate(f64::NEG_INFINITY)
        .unwrap_err();
    assert!(err.is_invalid_metric());
}

#[test]
fn test_decision_is_deterministic() {
    let policy = policy_with_threshold(10.0);
    let first = policy.evaluate(12.5).unwrap();
    let second = policy.evaluate(12.5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decision_carries_inputs() {
    let decision = policy_with_threshold(7.5).evaluate(9.0).unwrap();
    assert!((decision.observed_metric - 9.0).abs() < f64::EPSILON);
    assert!((decision.threshold - 7.5).abs() < f64::EPSILON);
}

#[test]
fn test_zero_threshold_retrains_on_any_error() {
    let policy = policy_with_threshold(0.0);
    assert!(!policy.evaluate(0.0).unwrap().should_retrain);
    assert!(policy.evaluate(0.001).unwrap().should_retrain);
}

#[test]
fn test_evaluate_result_delegates_to_metric_value() {
    let policy = policy_with_threshold(10.0);
    let result = EvaluationResult::from_value(MetricKind::Mae, 12.0);
    let decision = policy.evaluate_result(&result).unwrap();
    assert!(decision.should_retrain);
}

#[test]
fn test_nan_threshold_rejected_at_construction() {
    let err = RetrainPolicy::new(PolicyConfig {
        threshold: f64::NAN,
        comparison: Comparison::GreaterThan,
    })
    .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_infinite_threshold_rejected_at_construction() {
    let err = RetrainPolicy::new(PolicyConfig {
        threshold: f64::INFINITY,
        comparison: Comparison::GreaterThan,
    })
    .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_negative_threshold_rejected_at_construction() {
    let err = RetrainPolicy::new(PolicyConfig {
        threshold: -1.0,
        comparison: Comparison::GreaterThan,
    })
    .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_policy_config_default() {
    let config = PolicyConfig::default();
    assert!((config.threshold - 10.0).abs() < f64::EPSILON);
    assert_eq!(config.comparison, Comparison::GreaterThan);
}

#[test]
fn test_policy_accessors() {
    let policy = policy_with_threshold(3.5);
    assert!((policy.threshold() - 3.5).abs() < f64::EPSILON);
    assert_eq!(policy.comparison(), Comparison::GreaterThan);
}

#[test]
fn test_policy_clone_decides_identically() {
    let policy = policy_with_threshold(10.0);
    let cloned = policy.clone();
    assert_eq!(
        policy.evaluate(11.0).unwrap(),
        cloned.evaluate(11.0).unwrap()
    );
}

#[test]
fn test_decision_display() {
    let decision = policy_with_threshold(10.0).evaluate(12.5).unwrap();
    let text = decision.to_string();
    assert!(text.contains("metric exceeds threshold"));
    assert!(text.contains("12.5"));
    assert!(text.contains("10.0"));
}

#[test]
fn test_comparison_yaml_roundtrip() {
    let comparison: Comparison = serde_yaml::from_str("greater_than").unwrap();
    assert_eq!(comparison, Comparison::GreaterThan);
}
