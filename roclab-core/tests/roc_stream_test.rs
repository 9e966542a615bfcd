//! Integration tests for the streaming ROC calculator.
//!
//! Tests:
//! 1. Reference sequence from the ROC definition (period 5, six inputs).
//! 2. Config-built and directly built calculators agree.
//! 3. Trait-object use by a consumer that only sees `StreamingIndicator`.
//! 4. Zero-priced history yields non-finite readings, not errors.

use roclab_core::{as_percent, RocCalculator, RocConfig, RocError, StreamingIndicator};

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

fn run(indicator: &mut dyn StreamingIndicator, prices: &[f64]) -> Vec<Option<f64>> {
    prices.iter().map(|&p| indicator.advance(p)).collect()
}

/// Deterministic oscillating price path.
fn synthetic_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[test]
fn reference_sequence_period_5() {
    let mut roc = RocCalculator::default();
    let readings = run(&mut roc, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);

    assert_eq!(readings[..5], [None, None, None, None, None]);
    assert_eq!(readings[5], Some(5.0));
}

#[test]
fn five_inputs_never_produce_a_reading() {
    let mut roc = RocCalculator::new(5).unwrap();
    let readings = run(&mut roc, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(readings.iter().all(Option::is_none));
    assert!(roc.is_warm());
}

#[test]
fn config_and_direct_construction_agree() {
    let prices = synthetic_prices(252);

    let mut from_config = RocConfig::from_toml_str("period = 12")
        .unwrap()
        .build()
        .unwrap();
    let mut direct = RocCalculator::new(12).unwrap();

    assert_eq!(run(&mut from_config, &prices), run(&mut direct, &prices));
}

#[test]
fn invalid_config_rejected_before_streaming() {
    let result = RocConfig::new(0).build();
    assert!(matches!(
        result,
        Err(RocError::InvalidConfiguration { period: 0 })
    ));
}

#[test]
fn consumer_sees_only_trait() {
    let mut boxed: Box<dyn StreamingIndicator> = Box::new(RocCalculator::new(3).unwrap());
    assert_eq!(boxed.name(), "roc_3");
    assert_eq!(boxed.lookback(), 3);

    let readings = run(boxed.as_mut(), &[100.0, 102.0, 104.0, 110.0]);
    assert_eq!(readings[..3], [None, None, None]);
    let pct = as_percent(readings[3].unwrap());
    assert!((pct - 10.0).abs() < 1e-10, "pct={pct}");
}

#[test]
fn probe_then_commit_matches_over_long_stream() {
    let prices = synthetic_prices(500);
    let mut roc = RocCalculator::new(20).unwrap();
    for &p in &prices {
        roc.probe(p * 1.01);
        let predicted = roc.probe(p);
        assert_eq!(roc.advance(p), predicted);
        // A what-if on a different value never leaks into history.
        assert_ne!(roc.observations().last(), Some(p * 1.01));
    }
    assert_eq!(roc.len(), 20);
}

#[test]
fn zero_history_yields_non_finite_once() {
    let mut roc = RocCalculator::new(3).unwrap();
    let readings = run(&mut roc, &[0.0, 10.0, 10.0, 10.0, 10.0]);

    assert_eq!(readings[3], Some(f64::INFINITY));
    assert_eq!(readings[4], Some(0.0));
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut a = RocCalculator::new(2).unwrap();
    let mut b = RocCalculator::new(2).unwrap();
    run(&mut a, &[1.0, 2.0, 3.0]);
    assert!(b.is_empty());
    assert_eq!(b.advance(1.0), None);
    assert_eq!(a.len(), 2);
}
