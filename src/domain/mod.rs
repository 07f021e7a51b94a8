//! Domain layer: core business types and pure logic.
//!
//! Plain Rust types with no I/O. Everything here is either an immutable
//! configuration value built once at startup (bounds tables, thresholds,
//! the model artifact) or an ephemeral per-request value.

mod artifact;
mod assessment;
mod bounds;
mod feature;
mod patient;

pub use artifact::{ArtifactError, ModelArtifact, ScaleParams, StandardizedVector};
pub use assessment::{DomainError, Prediction, RiskAssessment, RiskThresholds, RiskTier};
pub use bounds::{Bound, ClinicalBounds, HealthyRange, HealthyRanges};
pub use feature::Feature;
pub use patient::{PatientFeatures, RawMeasurements, ValidationError};
