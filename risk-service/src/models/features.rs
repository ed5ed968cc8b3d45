/// Feature names in the order the classifier was trained on.
pub const FEATURE_NAMES: [&str; 3] = ["cases_per_100k", "median_age", "aged_65_above"];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Single-row classifier input.
///
/// Field order is fixed by the constructor and must match [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(cases_per_100k: f64, median_age: f64, aged_65_above: f64) -> Self {
        Self([cases_per_100k, median_age, aged_65_above])
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order() {
        let features = FeatureVector::new(120.5, 42.0, 18.3);
        assert_eq!(features.values(), &[120.5, 42.0, 18.3]);
        assert_eq!(features.get(1), Some(42.0));
        assert_eq!(features.get(FEATURE_COUNT), None);
    }
}
