//! End-to-end scenarios across the full pipeline: algebra -> codec ->
//! detector -> algebra.

use photology::engine::{EvalMode, Evaluator};
use photology::error::Error;
use photology::polarization::{angle_deg_to_trit, trit_to_angle_deg};
use photology::ternary::Trit;
use photology::TripleChannelDetector;

#[test]
fn ideal_tand_of_plus_and_minus_is_minus() {
    let evaluator = Evaluator::default();
    let result = evaluator
        .evaluate("TAND", &[Trit::Plus, Trit::Minus], EvalMode::Ideal)
        .unwrap();
    assert_eq!(result.ideal, Trit::Minus);
    assert!(result.observed.is_none());
}

#[test]
fn ideal_tnot_of_zero_is_zero() {
    let evaluator = Evaluator::default();
    let result = evaluator
        .evaluate("TNOT", &[Trit::Zero], EvalMode::Ideal)
        .unwrap();
    assert_eq!(result.ideal, Trit::Zero);
}

#[test]
fn physical_tnand_with_ideal_detector_matches_ideal() {
    let evaluator = Evaluator::default();
    let result = evaluator
        .evaluate("TNAND", &[Trit::Plus, Trit::Plus], EvalMode::Physical)
        .unwrap();
    assert_eq!(result.ideal, Trit::Minus);
    assert_eq!(result.observed, Some(Trit::Minus));

    // The trace exposes the encoded states and channel intensities.
    for trace in &result.operands {
        assert_eq!(trace.state.angle_deg, 120.0);
        let reading = trace.reading.expect("physical mode records readings");
        assert_eq!(reading.decoded, Trit::Plus);
        assert!((reading.intensity(Trit::Plus) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn physical_round_trip_holds_for_every_gate_and_operand() {
    let evaluator = Evaluator::default();
    for t in Trit::ALL {
        let unary = evaluator
            .evaluate("Cyclic", &[t], EvalMode::Physical)
            .unwrap();
        assert_eq!(unary.observed, Some(unary.ideal));
        for u in Trit::ALL {
            let binary = evaluator
                .evaluate("TAND", &[t, u], EvalMode::Physical)
                .unwrap();
            assert_eq!(binary.observed, Some(binary.ideal));
        }
    }
}

#[test]
fn codec_and_detector_agree_on_canonical_angles() {
    let detector = TripleChannelDetector::ideal();
    for t in Trit::ALL {
        let angle = trit_to_angle_deg(t);
        assert_eq!(angle_deg_to_trit(angle), t);
        assert_eq!(detector.detect_from_angle(angle).unwrap().decoded, t);
    }
}

#[test]
fn wrong_arity_is_rejected_before_any_physics() {
    let evaluator = Evaluator::default();
    let err = evaluator
        .evaluate("TAND", &[Trit::Plus], EvalMode::Physical)
        .unwrap_err();
    assert!(matches!(err, Error::Arity { .. }));

    let err = evaluator
        .evaluate("Cyclic", &[Trit::Plus, Trit::Zero], EvalMode::Ideal)
        .unwrap_err();
    assert!(matches!(err, Error::Arity { .. }));
}
