//! Adapters layer: concrete implementations of the ports.

mod artifact_file;

pub use artifact_file::{parse_artifact, FileArtifactSource};
