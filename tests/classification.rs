//! End-to-end properties of scaling followed by tree evaluation.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tremor_classifier::scalers::MOTION_PARAMS;
use tremor_classifier::{
    classify, standardize, ClassLabel, ClassifierError, MotionClassifier, StandardScaler,
    FEATURE_COUNT, SCALER_MEANS, SCALER_SCALES,
};

const MEAN_ACCEL_Y: usize = 8;
const MAV_ACCEL_Y: usize = 15;

/// Raw vector within four scales of the mean on every feature.
fn random_raw(rng: &mut StdRng) -> Vec<f64> {
    (0..FEATURE_COUNT)
        .map(|i| SCALER_MEANS[i] + SCALER_SCALES[i] * rng.gen_range(-4.0..4.0))
        .collect()
}

fn raw_for(mav_y: f64, mean_y: f64) -> Vec<f64> {
    let mut raw = SCALER_MEANS.to_vec();
    raw[MAV_ACCEL_Y] = SCALER_MEANS[MAV_ACCEL_Y] + SCALER_SCALES[MAV_ACCEL_Y] * mav_y;
    raw[MEAN_ACCEL_Y] = SCALER_MEANS[MEAN_ACCEL_Y] + SCALER_SCALES[MEAN_ACCEL_Y] * mean_y;
    raw
}

#[test]
fn standardize_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let raw = random_raw(&mut rng);
        let a = standardize(&raw, &MOTION_PARAMS).unwrap();
        let b = standardize(&raw, &MOTION_PARAMS).unwrap();
        let bits_a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }
}

#[test]
fn standardize_round_trips() {
    let mut rng = StdRng::seed_from_u64(42);
    let scaler = StandardScaler::motion();
    for _ in 0..200 {
        let raw: Vec<f64> = (0..FEATURE_COUNT)
            .map(|i| SCALER_MEANS[i] + rng.gen_range(-1000.0..1000.0))
            .collect();
        let standardized = scaler.transform(&raw).unwrap();
        for i in 0..FEATURE_COUNT {
            let back = standardized[i] * SCALER_SCALES[i] + SCALER_MEANS[i];
            assert!((back - raw[i]).abs() < 1e-5, "feature {i}: {back} vs {}", raw[i]);
        }
        let back = scaler.inverse_transform(&standardized).unwrap();
        for (b, r) in back.iter().zip(raw.iter()) {
            assert!((b - r).abs() < 1e-5);
        }
    }
}

#[test]
fn mean_value_standardizes_to_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut raw = random_raw(&mut rng);
    raw[MEAN_ACCEL_Y] = SCALER_MEANS[MEAN_ACCEL_Y];
    let standardized = standardize(&raw, &MOTION_PARAMS).unwrap();
    assert_eq!(standardized[MEAN_ACCEL_Y], 0.0);
}

#[test]
fn scenario_low_mav_low_mean_is_class_zero() {
    let standardized = standardize(&raw_for(-1.0, -0.1), &MOTION_PARAMS).unwrap();
    assert!((standardized[MAV_ACCEL_Y] + 1.0).abs() < 1e-9);
    assert!((standardized[MEAN_ACCEL_Y] + 0.1).abs() < 1e-9);
    let label = classify(&standardized).unwrap();
    assert_eq!(label, ClassLabel::NoTremor);
    assert_eq!(label.code(), 0);
}

#[test]
fn scenario_low_mav_high_mean_is_class_one() {
    let standardized = standardize(&raw_for(-1.0, 0.1), &MOTION_PARAMS).unwrap();
    assert_eq!(classify(&standardized).unwrap().code(), 1);
}

#[test]
fn scenario_high_mav_is_class_one_regardless_of_mean() {
    let classifier = MotionClassifier::default();
    for mean_y in [-3.0, -0.1, 0.0, 0.1, 3.0] {
        assert_eq!(
            classifier.predict(&raw_for(-0.5, mean_y)).unwrap(),
            ClassLabel::Tremor
        );
    }
}

#[test]
fn wrong_length_is_rejected() {
    let mut rng = StdRng::seed_from_u64(11);
    for len in [0, 1, 16, 31, 33, 64] {
        let raw: Vec<f64> = (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect();
        match standardize(&raw, &MOTION_PARAMS) {
            Err(ClassifierError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, FEATURE_COUNT);
                assert_eq!(actual, len);
            }
            other => panic!("expected shape mismatch for length {len}, got {other:?}"),
        }
    }
}

#[test]
fn batch_agrees_with_single_predictions() {
    let mut rng = StdRng::seed_from_u64(99);
    let rows: Vec<Vec<f64>> = (0..500).map(|_| random_raw(&mut rng)).collect();
    let classifier = MotionClassifier::default();
    let batch = classifier.predict_batch(&rows);
    assert_eq!(batch.len(), rows.len());
    for (row, result) in rows.iter().zip(batch) {
        assert_eq!(result.unwrap(), classifier.predict(row).unwrap());
    }
}
