//! The frozen model artifact consumed by the inference path.
//!
//! Produced by the offline training pipeline, loaded once at startup, and
//! shared read-only across requests. Construction validates the contract
//! between training and inference (feature ordering, parameter completeness,
//! scale sanity) so a [`ModelArtifact`] in hand is always complete.

use super::feature::Feature;

/// Artifact loading and contract failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact blob could not be read or parsed. Fatal at startup.
    #[error("failed to load model artifact: {0}")]
    Load(String),

    /// The artifact does not match the expected training contract
    /// (feature ordering, parameter completeness, or parameter sanity).
    #[error("model artifact mismatch: {0}")]
    Mismatch(String),
}

/// Per-feature standardization parameters fixed at training time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    pub mean: f64,
    pub scale: f64,
}

/// Frozen logistic-regression parameters, keyed by canonical feature order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    version: u32,
    medians: [f64; Feature::COUNT],
    standardization: [ScaleParams; Feature::COUNT],
    weights: [f64; Feature::COUNT],
    bias: f64,
}

impl ModelArtifact {
    /// Assemble an artifact from parameters already laid out in canonical
    /// feature order.
    ///
    /// # Errors
    /// Returns [`ArtifactError::Mismatch`] when any parameter is non-finite
    /// or any scale is not strictly positive.
    pub fn new(
        version: u32,
        medians: [f64; Feature::COUNT],
        standardization: [ScaleParams; Feature::COUNT],
        weights: [f64; Feature::COUNT],
        bias: f64,
    ) -> Result<Self, ArtifactError> {
        for (i, feature) in Feature::ORDER.iter().enumerate() {
            let ScaleParams { mean, scale } = standardization[i];
            if !mean.is_finite() || !scale.is_finite() || !medians[i].is_finite() {
                return Err(ArtifactError::Mismatch(format!(
                    "non-finite parameter for feature {feature}"
                )));
            }
            if scale <= 0.0 {
                return Err(ArtifactError::Mismatch(format!(
                    "scale for feature {feature} must be > 0, got {scale}"
                )));
            }
            if !weights[i].is_finite() {
                return Err(ArtifactError::Mismatch(format!(
                    "non-finite weight for feature {feature}"
                )));
            }
        }
        if !bias.is_finite() {
            return Err(ArtifactError::Mismatch("non-finite bias".into()));
        }

        Ok(Self {
            version,
            medians,
            standardization,
            weights,
            bias,
        })
    }

    /// Artifact schema version.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Training-time median used to impute a missing (sentinel) value.
    #[must_use]
    pub fn median(&self, feature: Feature) -> f64 {
        self.medians[feature.index()]
    }

    /// Standardization parameters for one feature.
    #[must_use]
    pub fn standardization(&self, feature: Feature) -> ScaleParams {
        self.standardization[feature.index()]
    }

    /// Logistic-regression weights in canonical feature order.
    #[must_use]
    pub fn weights(&self) -> &[f64; Feature::COUNT] {
        &self.weights
    }

    /// Logistic-regression intercept.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

/// A feature vector after imputation and standardization, in canonical
/// feature order. Created per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardizedVector(pub [f64; Feature::COUNT]);

impl StandardizedVector {
    #[must_use]
    pub fn as_array(&self) -> &[f64; Feature::COUNT] {
        &self.0
    }
}
