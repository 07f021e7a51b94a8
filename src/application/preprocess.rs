//! Feature preprocessing: sentinel imputation followed by standardization.
//!
//! Mirrors the training pipeline exactly: zeros in the impossible-zero
//! columns are replaced with the training-time median, then every value is
//! rescaled as `(x - mean) / scale` with the frozen scaler statistics, in
//! canonical feature order. No field is dropped or reordered.

use crate::domain::{Feature, ModelArtifact, PatientFeatures, StandardizedVector};

/// Applies the frozen imputation and standardization parameters.
pub struct Preprocessor<'a> {
    artifact: &'a ModelArtifact,
}

impl<'a> Preprocessor<'a> {
    #[must_use]
    pub fn new(artifact: &'a ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Impute training medians over missing-data sentinels.
    ///
    /// Only a zero on a sentinel-eligible feature is replaced; a genuine
    /// zero (e.g. zero pregnancies) passes through untouched.
    #[must_use]
    pub fn impute(&self, features: &PatientFeatures) -> [f64; Feature::COUNT] {
        let mut values = features.to_array();
        for (i, feature) in Feature::ORDER.iter().enumerate() {
            if feature.zero_is_sentinel() && values[i] == 0.0 {
                values[i] = self.artifact.median(*feature);
            }
        }
        values
    }

    /// Standardize already-imputed values with the frozen scaler statistics.
    #[must_use]
    pub fn standardize(&self, imputed: &[f64; Feature::COUNT]) -> StandardizedVector {
        let mut out = [0.0; Feature::COUNT];
        for (i, feature) in Feature::ORDER.iter().enumerate() {
            let params = self.artifact.standardization(*feature);
            out[i] = (imputed[i] - params.mean) / params.scale;
        }
        StandardizedVector(out)
    }

    /// Full preprocessing: imputation then standardization.
    #[must_use]
    pub fn run(&self, features: &PatientFeatures) -> StandardizedVector {
        self.standardize(&self.impute(features))
    }
}
