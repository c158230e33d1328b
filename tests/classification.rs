//! Classification-specific integration tests.

use approx::assert_abs_diff_eq;
use treesplit_rust::*;

fn init_calculator<'a>(
    unique: &[f64],
    targets: &'a [f64],
    weights: &'a [f64],
    interval: Interval1D,
) -> GiniImpurityCalculator<'a> {
    let mut calculator = GiniImpurityCalculator::new();
    calculator
        .init(unique, targets, weights, interval)
        .expect("init should succeed");
    calculator
}

#[test]
fn test_weight_sums_invariant_over_sweep() {
    let targets = vec![0.0, 1.0, 0.0, 1.0, 2.0, 2.0];
    let weights = vec![1.0, 2.0, 0.5, 0.0, 3.0, 1.5];
    let interval = Interval1D::new(0, 6).unwrap();
    let total: f64 = weights.iter().sum();

    let mut calculator = init_calculator(&[0.0, 1.0, 2.0], &targets, &weights, interval);
    for position in 1..=6 {
        calculator.update_index(position).unwrap();
        let sum = calculator.weighted_left().unwrap() + calculator.weighted_right().unwrap();
        assert_abs_diff_eq!(sum, total, epsilon = 1e-12);
    }
}

#[test]
fn test_node_impurity_independent_of_position() {
    let targets = vec![0.0, 1.0, 1.0, 0.0, 1.0];
    let interval = Interval1D::new(0, 5).unwrap();
    let mut calculator = init_calculator(&[0.0, 1.0], &targets, &[], interval);

    let reference = calculator.node_impurity().unwrap();
    for position in 1..=5 {
        calculator.update_index(position).unwrap();
        assert_abs_diff_eq!(calculator.node_impurity().unwrap(), reference);
    }
}

#[test]
fn test_child_impurities_at_boundaries() {
    let targets = vec![0.0, 0.0, 1.0, 1.0, 1.0];
    let interval = Interval1D::new(0, 5).unwrap();
    let mut calculator = init_calculator(&[0.0, 1.0], &targets, &[], interval);
    let node = calculator.node_impurity().unwrap();

    // All mass on the right at position == start.
    let children = calculator.child_impurities().unwrap();
    assert_abs_diff_eq!(children.left, 0.0);
    assert_abs_diff_eq!(children.right, node);
    assert_abs_diff_eq!(calculator.impurity_improvement(node).unwrap(), 0.0);

    // All mass on the left at position == end.
    calculator.update_index(5).unwrap();
    let children = calculator.child_impurities().unwrap();
    assert_abs_diff_eq!(children.left, node);
    assert_abs_diff_eq!(children.right, 0.0);
    assert_abs_diff_eq!(
        calculator.impurity_improvement(node).unwrap(),
        0.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_best_split_found_by_sweep() {
    // Sorted by an imaginary feature; the class flips at index 3.
    let targets = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let interval = Interval1D::new(0, 6).unwrap();
    let mut calculator = init_calculator(&[0.0, 1.0], &targets, &[], interval);
    let node = calculator.node_impurity().unwrap();

    let mut best_position = 0;
    let mut best_improvement = f64::NEG_INFINITY;
    for position in 1..6 {
        calculator.update_index(position).unwrap();
        let improvement = calculator.impurity_improvement(node).unwrap();
        if improvement > best_improvement {
            best_improvement = improvement;
            best_position = position;
        }
    }

    assert_eq!(best_position, 3);
    assert_abs_diff_eq!(best_improvement, node);
}

#[test]
fn test_multi_feature_scan_via_reset() {
    let targets = vec![0.0, 1.0, 0.0, 1.0];
    let interval = Interval1D::new(0, 4).unwrap();
    let mut calculator = init_calculator(&[0.0, 1.0], &targets, &[], interval);

    // First feature sweep.
    calculator.update_index(2).unwrap();
    let first = calculator.impurity_improvement(0.5).unwrap();

    // Second feature over the same interval: reset, sweep again.
    calculator.reset().unwrap();
    assert_abs_diff_eq!(calculator.weighted_left().unwrap(), 0.0);
    calculator.update_index(2).unwrap();
    let second = calculator.impurity_improvement(0.5).unwrap();

    assert_abs_diff_eq!(first, second);
}

#[test]
fn test_node_reuse_across_intervals() {
    // One calculator serves a parent node and both of its children.
    let targets = vec![0.0, 0.0, 1.0, 1.0];
    let interval = Interval1D::new(0, 4).unwrap();
    let mut calculator = init_calculator(&[0.0, 1.0], &targets, &[], interval);
    assert_abs_diff_eq!(calculator.node_impurity().unwrap(), 0.5);

    calculator
        .update_interval(Interval1D::new(0, 2).unwrap())
        .unwrap();
    assert_abs_diff_eq!(calculator.node_impurity().unwrap(), 0.0);
    assert_abs_diff_eq!(calculator.leaf_value().unwrap(), 0.0);

    calculator
        .update_interval(Interval1D::new(2, 4).unwrap())
        .unwrap();
    assert_abs_diff_eq!(calculator.node_impurity().unwrap(), 0.0);
    assert_abs_diff_eq!(calculator.leaf_value().unwrap(), 1.0);
}

#[test]
fn test_weighted_majority_leaf() {
    // Class 0 has more samples, class 1 has more weight.
    let targets = vec![0.0, 0.0, 0.0, 1.0];
    let weights = vec![1.0, 1.0, 1.0, 5.0];
    let interval = Interval1D::new(0, 4).unwrap();
    let calculator = init_calculator(&[0.0, 1.0], &targets, &weights, interval);

    assert_abs_diff_eq!(calculator.leaf_value().unwrap(), 1.0);
    let probabilities = calculator.leaf_probabilities().unwrap();
    assert_abs_diff_eq!(probabilities[0].1, 3.0 / 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(probabilities[1].1, 5.0 / 8.0, epsilon = 1e-12);
}

#[test]
fn test_session_validation_before_learning() {
    let observations = ndarray::Array2::<f64>::zeros((4, 3));
    let targets = vec![0.0, 1.0, 0.0, 1.0];

    validation::verify_observations_and_targets(&observations.view(), &targets).unwrap();
    validation::verify_indices_for(&[0, 1, 2, 3], &observations.view(), &targets).unwrap();

    let short_targets = vec![0.0, 1.0];
    assert!(
        validation::verify_observations_and_targets(&observations.view(), &short_targets)
            .is_err()
    );
}
