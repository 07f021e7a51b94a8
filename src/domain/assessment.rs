//! Assessment result types: risk tiers, thresholds, and the assembled
//! per-request output.

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// Internal invariant violation, raised defensively when an upstream
/// component produces an impossible value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("internal invariant violated: {0}")]
pub struct DomainError(pub String);

/// Ordinal risk tier. Ordering is meaningful: a higher tier always carries
/// strictly greater urgency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskTier {
    /// Low risk, routine care
    Low,
    /// Moderate risk, preventive action recommended
    Moderate,
    /// High risk, prompt medical attention advised
    High,
}

impl RiskTier {
    /// Short human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - routine monitoring",
            Self::Moderate => "Moderate risk - preventive action recommended",
            Self::High => "High risk - prompt medical attention advised",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Probability thresholds mapping a risk probability to a tier.
///
/// Convention: lower-inclusive. A probability equal to a threshold belongs
/// to the tier above it, so `0.3` is Moderate and `0.6` is High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    /// Probabilities at or above this are at least Moderate.
    pub moderate: f64,
    /// Probabilities at or above this are High.
    pub high: f64,
}

impl RiskThresholds {
    /// Map a probability to its tier.
    ///
    /// # Errors
    /// Returns [`DomainError`] if the probability is non-finite or outside
    /// `[0, 1]` (a corrupted classifier output).
    pub fn tier_for(&self, probability: f64) -> Result<RiskTier, DomainError> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(DomainError(format!(
                "probability {probability} outside [0, 1]"
            )));
        }

        if probability < self.moderate {
            Ok(RiskTier::Low)
        } else if probability < self.high {
            Ok(RiskTier::Moderate)
        } else {
            Ok(RiskTier::High)
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: 0.3,
            high: 0.6,
        }
    }
}

/// Raw classifier output before tier interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Risk probability in `[0, 1]`
    pub probability: f64,
    /// Binary prediction: 1 at probability >= 0.5, else 0
    pub class: u8,
}

impl Prediction {
    /// Derive the binary class from a probability.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        let class = u8::from(probability >= 0.5);
        Self { probability, class }
    }
}

/// The assembled output of one assessment request. Not persisted; carries no
/// timestamp or identifier so identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk probability in `[0, 1]`
    pub probability: f64,
    /// Binary prediction (0 = non-diabetic, 1 = diabetic)
    pub predicted_class: u8,
    /// Ordinal risk tier
    pub tier: RiskTier,
    /// Tier guidance first, then parameter guidance in canonical feature order
    pub recommendations: Vec<String>,
    /// Input parameters outside their healthy reference sub-range,
    /// in canonical feature order
    pub flagged: Vec<Feature>,
}
