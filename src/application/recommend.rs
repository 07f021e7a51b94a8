//! Recommendation synthesis.
//!
//! Guidance comes from two independent, declaratively-tabled sources merged
//! without duplication:
//!
//! 1. Tier-level general guidance, one fixed text per tier, strictly
//!    escalating in urgency.
//! 2. Parameter-level guidance for each input outside its healthy reference
//!    sub-range (narrower than the clinical validity bounds), evaluated
//!    against the original measurements, in canonical feature order.

use crate::domain::{Feature, HealthyRanges, PatientFeatures, RiskTier};

/// Fixed tier guidance texts, escalating with urgency.
fn tier_guidance(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "Low risk: maintain your current healthy lifestyle with a balanced diet \
             and regular exercise; routine check-ups every one to two years."
        }
        RiskTier::Moderate => {
            "Moderate risk: consult a healthcare provider for a detailed assessment, \
             consider diet and exercise changes, monitor blood glucose regularly, \
             and schedule a follow-up within 6-12 months."
        }
        RiskTier::High => {
            "High risk: seek medical attention promptly; comprehensive diabetes \
             screening, strict dietary and lifestyle changes, and regular \
             monitoring are recommended."
        }
    }
}

/// Synthesizes guidance from the risk tier and the original measurements.
pub struct RecommendationEngine<'a> {
    healthy: &'a HealthyRanges,
}

impl<'a> RecommendationEngine<'a> {
    #[must_use]
    pub fn new(healthy: &'a HealthyRanges) -> Self {
        Self { healthy }
    }

    /// Produce the recommendation list and the flagged out-of-range
    /// parameters. Tier guidance comes first, then one targeted string per
    /// violated healthy range in canonical feature order.
    #[must_use]
    pub fn advise(
        &self,
        tier: RiskTier,
        features: &PatientFeatures,
    ) -> (Vec<String>, Vec<Feature>) {
        let mut recommendations = vec![tier_guidance(tier).to_string()];
        let mut flagged = Vec::new();

        for rule in self.healthy.rules() {
            if !rule.contains(features.get(rule.feature)) {
                let text = rule.advice.to_string();
                if !recommendations.contains(&text) {
                    recommendations.push(text);
                }
                flagged.push(rule.feature);
            }
        }

        (recommendations, flagged)
    }
}
