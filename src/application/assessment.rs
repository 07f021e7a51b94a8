//! Assessment orchestration: the single entry point the presentation layer
//! calls.
//!
//! Sequences validation → preprocessing → inference → tier classification →
//! recommendation synthesis into one fail-fast request/response cycle. The
//! service holds only immutable state (`Arc`-shared artifact plus config
//! tables), so concurrent requests need no coordination.

use std::sync::Arc;

use crate::application::{Classifier, Preprocessor, RecommendationEngine, Validator};
use crate::domain::{
    ClinicalBounds, HealthyRanges, ModelArtifact, RawMeasurements, RiskAssessment, RiskThresholds,
};
use crate::GlycoraError;

/// Diabetes risk assessment service.
pub struct AssessmentService {
    artifact: Arc<ModelArtifact>,
    bounds: ClinicalBounds,
    healthy: HealthyRanges,
    thresholds: RiskThresholds,
}

impl AssessmentService {
    /// Create a service with the default clinical configuration.
    #[must_use]
    pub fn new(artifact: Arc<ModelArtifact>) -> Self {
        Self::with_config(
            artifact,
            ClinicalBounds::default(),
            HealthyRanges::default(),
            RiskThresholds::default(),
        )
    }

    /// Create a service with explicit configuration tables, for hosts and
    /// tests that need alternate bounds or thresholds.
    #[must_use]
    pub fn with_config(
        artifact: Arc<ModelArtifact>,
        bounds: ClinicalBounds,
        healthy: HealthyRanges,
        thresholds: RiskThresholds,
    ) -> Self {
        Self {
            artifact,
            bounds,
            healthy,
            thresholds,
        }
    }

    /// Run one assessment.
    ///
    /// Fail-fast: the first validation or invariant error is returned
    /// unchanged and no partial result is produced.
    ///
    /// # Errors
    /// Returns [`GlycoraError::Validation`] on missing or out-of-range
    /// input, [`GlycoraError::Domain`] if the classifier produces an
    /// impossible probability.
    pub fn assess(&self, input: RawMeasurements) -> Result<RiskAssessment, GlycoraError> {
        let features = input.resolve()?;
        Validator::new(&self.bounds).check(&features)?;

        let vector = Preprocessor::new(&self.artifact).run(&features);
        let prediction = Classifier::new(&self.artifact).predict(&vector);
        let tier = self.thresholds.tier_for(prediction.probability)?;

        let (recommendations, flagged) =
            RecommendationEngine::new(&self.healthy).advise(tier, &features);

        tracing::info!(
            probability = prediction.probability,
            class = prediction.class,
            %tier,
            flagged = flagged.len(),
            "assessment complete"
        );

        Ok(RiskAssessment {
            probability: prediction.probability,
            predicted_class: prediction.class,
            tier,
            recommendations,
            flagged,
        })
    }
}
