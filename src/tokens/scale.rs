//! Bucketing of observed values into named scale steps.

use indexmap::IndexMap;
use serde::Serialize;

use super::scalar::Scalar;

/// Distinct observed values plus their named scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTokens {
    pub values: Vec<Scalar>,
    pub scale: IndexMap<String, Scalar>,
}

pub const SPACING_STEPS: [(&str, f64); 6] = [
    ("xs", 4.0),
    ("sm", 8.0),
    ("md", 16.0),
    ("lg", 24.0),
    ("xl", 32.0),
    ("xxl", 40.0),
];

pub const RADIUS_STEPS: [(&str, f64); 4] = [
    ("small", 8.0),
    ("medium", 16.0),
    ("large", 24.0),
    ("xlarge", 32.0),
];

/// Fraction of a step threshold an observed value must reach to snap to that step.
pub const SNAP_FLOOR: f64 = 0.8;

/// For each step, the smallest observed value reaching the step's snap floor,
/// else the threshold itself. `sorted` must be ascending.
///
/// A plain "smallest value >= threshold" rule would give `md: 30` for
/// `{8, 20, 30}`; the published scale for that set is `md: 20, lg: 20`, which
/// only a floor below the threshold reproduces. As a result a value between
/// the floor and the threshold fills the step: `{13}` gives `md: 13`, not 16.
pub fn bucket(sorted: &[Scalar], steps: &[(&str, f64)]) -> IndexMap<String, Scalar> {
    steps
        .iter()
        .map(|&(name, threshold)| {
            let floor = threshold * SNAP_FLOOR;
            let value = sorted
                .iter()
                .copied()
                .find(|v| v.value() >= floor)
                .unwrap_or(Scalar(threshold));
            (name.to_string(), value)
        })
        .collect()
}
