//! Ports layer: trait definitions for external collaborators.
//!
//! The engine's only external dependency is the source of the frozen model
//! artifact; the trait keeps the loading mechanism swappable in tests.

mod artifact_source;

pub use artifact_source::ArtifactSource;
