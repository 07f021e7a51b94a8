//! # Glycora
//!
//! Diabetes risk assessment engine over the Pima clinical feature set.
//!
//! This crate provides:
//! - Clinical plausibility validation of raw measurements
//! - Missing-value imputation and standardization with frozen training statistics
//! - Logistic-regression inference producing a calibrated probability
//! - Ordinal risk-tier classification and tailored guidance
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (features, bounds, artifact, assessment)
//! - `ports`: Trait definitions for external collaborators
//! - `adapters`: Concrete implementations (JSON artifact source)
//! - `application`: The pipeline components and the orchestrating service
//!
//! The model artifact is produced by an offline training pipeline, loaded
//! once at startup, and shared read-only across requests; every assessment
//! is a self-contained pure computation.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::AssessmentService;
pub use domain::{RawMeasurements, RiskAssessment, RiskTier};

/// Result type for Glycora operations
pub type Result<T> = std::result::Result<T, GlycoraError>;

/// Main error type for Glycora
#[derive(Debug, thiserror::Error)]
pub enum GlycoraError {
    #[error("invalid patient data: {0}")]
    Validation(#[from] domain::ValidationError),

    #[error("model artifact error: {0}")]
    Artifact(#[from] domain::ArtifactError),

    #[error("{0}")]
    Domain(#[from] domain::DomainError),
}
