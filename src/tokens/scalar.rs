use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A numeric token value that serializes integral values without a fraction (`8`, not `8.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar(pub f64);

impl Scalar {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Sort ascending and drop duplicates.
pub fn sorted_distinct(mut values: Vec<f64>) -> Vec<Scalar> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values.dedup();
    values.into_iter().map(Scalar).collect()
}
