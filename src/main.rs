//! Glycora health check: validates the model artifact and system readiness.
//!
//! Runs the checks an operator wants green before exposing the engine:
//! artifact file present, artifact loads and passes contract validation, a
//! canonical assessment completes with a sane probability, and repeated runs
//! are deterministic. Exits 0 when every check passes, 1 otherwise.
//!
//! Model path: first CLI argument, else `GLYCORA_MODEL`, else
//! `models/model.json`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use glycora::adapters::FileArtifactSource;
use glycora::application::AssessmentService;
use glycora::domain::RiskTier;
use glycora::ports::ArtifactSource;
use glycora::RawMeasurements;

/// Known-good sample: first record of the Pima reference dataset.
fn canonical_sample() -> RawMeasurements {
    RawMeasurements {
        pregnancies: Some(6.0),
        glucose: Some(148.0),
        blood_pressure: Some(72.0),
        skin_thickness: Some(35.0),
        insulin: Some(0.0),
        bmi: Some(33.6),
        pedigree: Some(0.627),
        age: Some(50.0),
    }
}

fn model_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GLYCORA_MODEL").ok())
        .unwrap_or_else(|| "models/model.json".to_string())
        .into()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = model_path();
    tracing::info!(
        timestamp = %chrono::Utc::now().to_rfc3339(),
        model = %path.display(),
        "starting Glycora health check"
    );

    let mut failures = 0u32;

    // 1. Artifact file present.
    if path.exists() {
        tracing::info!("artifact file - OK");
    } else {
        tracing::error!("artifact file - MISSING at {}", path.display());
        failures += 1;
    }

    // 2. Artifact loads and passes contract validation.
    let artifact = match FileArtifactSource::new(&path).load() {
        Ok(artifact) => {
            tracing::info!(version = artifact.version(), "artifact contract - OK");
            Some(artifact)
        }
        Err(e) => {
            tracing::error!("artifact contract - FAILED: {e}");
            failures += 1;
            None
        }
    };

    // 3 & 4. Canonical assessment and determinism.
    if let Some(artifact) = artifact {
        let service = AssessmentService::new(Arc::new(artifact));

        match service.assess(canonical_sample()) {
            Ok(first) => {
                let sane = (0.0..=1.0).contains(&first.probability)
                    && matches!(first.tier, RiskTier::Low | RiskTier::Moderate | RiskTier::High);
                if sane {
                    tracing::info!(
                        probability = first.probability,
                        tier = %first.tier,
                        "canonical assessment - OK"
                    );
                } else {
                    tracing::error!("canonical assessment - FAILED: implausible output");
                    failures += 1;
                }

                match service.assess(canonical_sample()) {
                    Ok(second) if second == first => {
                        tracing::info!("deterministic re-run - OK");
                    }
                    Ok(_) => {
                        tracing::error!("deterministic re-run - FAILED: outputs differ");
                        failures += 1;
                    }
                    Err(e) => {
                        tracing::error!("deterministic re-run - FAILED: {e}");
                        failures += 1;
                    }
                }
            }
            Err(e) => {
                tracing::error!("canonical assessment - FAILED: {e}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        tracing::info!("all health checks passed");
        Ok(())
    } else {
        tracing::error!(failures, "health check failed");
        std::process::exit(1);
    }
}
