//! File-based artifact source: parses the versioned JSON blob exported by
//! the offline training pipeline and validates it against the canonical
//! feature contract.
//!
//! Blob layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "feature_names": ["pregnancies", "glucose", ...],
//!   "imputation_medians": { "glucose": 117.0, ... },
//!   "standardization": { "glucose": { "mean": 121.687, "scale": 30.436 }, ... },
//!   "weights": [0.39, 1.13, ...],
//!   "bias": -0.86
//! }
//! ```
//!
//! `feature_names` must list the canonical order exactly; any divergence
//! means the weight vector was trained against a different layout and is
//! rejected rather than silently mis-aligned.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ArtifactError, Feature, ModelArtifact, ScaleParams};
use crate::ports::ArtifactSource;

/// Schema version this build understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct RawScaleParams {
    mean: f64,
    scale: f64,
}

/// Wire representation of the exported artifact.
#[derive(Debug, Deserialize)]
struct RawArtifact {
    version: u32,
    feature_names: Vec<String>,
    imputation_medians: BTreeMap<String, f64>,
    standardization: BTreeMap<String, RawScaleParams>,
    weights: Vec<f64>,
    bias: f64,
}

/// Parse and contract-validate an artifact blob.
///
/// # Errors
/// [`ArtifactError::Load`] on malformed JSON; [`ArtifactError::Mismatch`] on
/// any divergence from the training contract.
pub fn parse_artifact(json: &str) -> Result<ModelArtifact, ArtifactError> {
    let raw: RawArtifact =
        serde_json::from_str(json).map_err(|e| ArtifactError::Load(e.to_string()))?;

    if raw.version != SUPPORTED_VERSION {
        return Err(ArtifactError::Mismatch(format!(
            "unsupported artifact version {} (expected {SUPPORTED_VERSION})",
            raw.version
        )));
    }

    // The declared feature order is the load-bearing training contract.
    let expected: Vec<&str> = Feature::ORDER.iter().map(|f| f.name()).collect();
    if raw.feature_names != expected {
        return Err(ArtifactError::Mismatch(format!(
            "feature order {:?} does not match expected {:?}",
            raw.feature_names, expected
        )));
    }

    if raw.weights.len() != Feature::COUNT {
        return Err(ArtifactError::Mismatch(format!(
            "expected {} weights, got {}",
            Feature::COUNT,
            raw.weights.len()
        )));
    }

    let mut medians = [0.0; Feature::COUNT];
    let mut standardization = [ScaleParams { mean: 0.0, scale: 1.0 }; Feature::COUNT];
    let mut weights = [0.0; Feature::COUNT];

    for (i, feature) in Feature::ORDER.iter().enumerate() {
        let name = feature.name();

        medians[i] = *raw.imputation_medians.get(name).ok_or_else(|| {
            ArtifactError::Mismatch(format!("missing imputation median for feature {name}"))
        })?;

        let params = raw.standardization.get(name).ok_or_else(|| {
            ArtifactError::Mismatch(format!("missing standardization parameters for feature {name}"))
        })?;
        standardization[i] = ScaleParams {
            mean: params.mean,
            scale: params.scale,
        };

        weights[i] = raw.weights[i];
    }

    ModelArtifact::new(raw.version, medians, standardization, weights, raw.bias)
}

/// Loads the artifact from a JSON file on disk.
pub struct FileArtifactSource {
    path: PathBuf,
}

impl FileArtifactSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSource for FileArtifactSource {
    fn load(&self) -> Result<ModelArtifact, ArtifactError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ArtifactError::Load(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let artifact = parse_artifact(&content)?;

        tracing::info!(
            path = %self.path.display(),
            version = artifact.version(),
            "loaded model artifact"
        );

        Ok(artifact)
    }
}
