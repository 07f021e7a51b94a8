//! Artifact source port: how a frozen model artifact reaches the engine.

use crate::domain::{ArtifactError, ModelArtifact};

/// Trait for loading the frozen, externally-trained model artifact.
///
/// Loading happens once at startup; the resulting [`ModelArtifact`] is
/// immutable and shared read-only across all assessment requests. A load
/// failure is fatal to engine startup.
pub trait ArtifactSource: Send + Sync {
    /// Load and contract-validate the artifact.
    ///
    /// # Errors
    /// Returns [`ArtifactError::Load`] if the blob is missing or unreadable,
    /// [`ArtifactError::Mismatch`] if it diverges from the training contract.
    fn load(&self) -> Result<ModelArtifact, ArtifactError>;
}
