//! Logistic-regression inference over standardized features.

use crate::domain::{ModelArtifact, Prediction, StandardizedVector};

/// Logit magnitude beyond which the sigmoid saturates to 0 or 1 anyway.
/// Clamping keeps the exponentiation well-behaved under future artifact
/// changes with larger weights.
const LOGIT_CLAMP: f64 = 40.0;

/// Applies the frozen weight vector and bias to a standardized vector.
pub struct Classifier<'a> {
    artifact: &'a ModelArtifact,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(artifact: &'a ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Compute `sigmoid(dot(w, v) + b)` and the 0.5-threshold class.
    /// Deterministic and pure.
    #[must_use]
    pub fn predict(&self, vector: &StandardizedVector) -> Prediction {
        let z: f64 = self
            .artifact
            .weights()
            .iter()
            .zip(vector.as_array().iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.artifact.bias();

        Prediction::new(sigmoid(z))
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-LOGIT_CLAMP, LOGIT_CLAMP);
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Feature, ScaleParams};

    fn artifact_with(weights: [f64; Feature::COUNT], bias: f64) -> ModelArtifact {
        ModelArtifact::new(
            1,
            [0.0; Feature::COUNT],
            [ScaleParams { mean: 0.0, scale: 1.0 }; Feature::COUNT],
            weights,
            bias,
        )
        .expect("valid artifact")
    }

    #[test]
    fn test_sigmoid_basics() {
        assert!((sigmoid(0.0) - 0.5).abs() < f64::EPSILON);
        assert!(sigmoid(4.0) > 0.98);
        assert!(sigmoid(-4.0) < 0.02);
    }

    #[test]
    fn test_sigmoid_saturates_without_overflow() {
        assert!(sigmoid(1e6).is_finite());
        assert!(sigmoid(-1e6).is_finite());
        assert!(sigmoid(1e6) > 0.999_999);
        assert!(sigmoid(-1e6) < 0.000_001);
    }

    #[test]
    fn test_zero_weights_give_bias_only_logit() {
        let artifact = artifact_with([0.0; 8], 0.0);
        let v = StandardizedVector([1.0; 8]);
        let p = Classifier::new(&artifact).predict(&v);
        assert!((p.probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(p.class, 1); // 0.5 threshold is inclusive
    }

    #[test]
    fn test_dot_product_uses_all_features() {
        let mut weights = [0.0; 8];
        weights[Feature::Glucose.index()] = 2.0;
        let artifact = artifact_with(weights, -1.0);

        let mut values = [0.0; 8];
        values[Feature::Glucose.index()] = 1.0;
        let p = Classifier::new(&artifact).predict(&StandardizedVector(values));

        // z = 2*1 - 1 = 1
        assert!((p.probability - sigmoid(1.0)).abs() < 1e-12);
        assert_eq!(p.class, 1);
    }

    #[test]
    fn test_probability_always_in_unit_interval() {
        let artifact = artifact_with([5.0, -5.0, 5.0, -5.0, 5.0, -5.0, 5.0, -5.0], 3.0);
        for magnitude in [0.0, 0.5, 2.0, 10.0, 1e3] {
            let v = StandardizedVector([magnitude; 8]);
            let p = Classifier::new(&artifact).predict(&v);
            assert!((0.0..=1.0).contains(&p.probability));
            assert_eq!(p.class, u8::from(p.probability >= 0.5));
        }
    }

    #[test]
    fn test_prediction_deterministic() {
        let artifact = artifact_with([0.3; 8], -0.2);
        let v = StandardizedVector([0.7; 8]);
        let c = Classifier::new(&artifact);
        assert_eq!(c.predict(&v), c.predict(&v));
    }
}
