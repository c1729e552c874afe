use std::fs;
use std::path::Path;

use hrg_core::{GasError, PdgCode};
use hrg_gas::serde::to_canonical_json_bytes;
use hrg_gas::{GasObservables, SpeciesCollection};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::{config_error, SweepConfig};
use crate::grid::{PointOutcome, PointStatus};

/// Schema identifier embedded in every manifest.
pub const SCHEMA_VERSION: &str = "hrg-sweep/1";

/// Manifest summarising one sweep run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepManifest {
    /// Report schema identifier.
    pub schema_version: String,
    /// RFC 3339 creation timestamp (UTC).
    pub created_at: String,
    /// Number of species in the collection.
    pub species_count: usize,
    /// Number of species in the stable subset.
    pub stable_count: usize,
    /// Stable subset codes in output-index order.
    pub stable_species: Vec<PdgCode>,
    /// Number of enumerated grid points.
    pub points_total: usize,
    /// Number of points whose evaluation failed.
    pub points_failed: usize,
    /// Canonical SHA-256 over the observable blocks, the determinism witness.
    pub observables_hash: String,
}

/// Full sweep artefact: manifest, configuration echo and per-point outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Run summary and determinism witness.
    pub manifest: SweepManifest,
    /// Configuration the sweep ran with.
    pub config: SweepConfig,
    /// Per-point outcomes in grid order.
    pub outcomes: Vec<PointOutcome>,
}

impl SweepReport {
    pub(crate) fn new(
        collection: &SpeciesCollection,
        config: &SweepConfig,
        outcomes: Vec<PointOutcome>,
    ) -> Result<Self, GasError> {
        let points_failed = outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, PointStatus::Failed { .. }))
            .count();
        let manifest = SweepManifest {
            schema_version: SCHEMA_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            species_count: collection.len(),
            stable_count: collection.stable_count(),
            stable_species: collection.stable_codes(),
            points_total: outcomes.len(),
            points_failed,
            observables_hash: observables_hash(&outcomes)?,
        };
        Ok(Self {
            manifest,
            config: config.clone(),
            outcomes,
        })
    }

    /// Writes the report, manifest and density table into `dir`.
    pub fn write(&self, dir: &Path) -> Result<(), GasError> {
        fs::create_dir_all(dir).map_err(|err| config_error("report_dir", err))?;
        let report_bytes = to_canonical_json_bytes(self)?;
        fs::write(dir.join(&self.config.output.report_file), report_bytes)
            .map_err(|err| config_error("report_write", err))?;
        let manifest_bytes = to_canonical_json_bytes(&self.manifest)?;
        fs::write(dir.join(&self.config.output.manifest_file), manifest_bytes)
            .map_err(|err| config_error("manifest_write", err))?;
        self.write_densities(&dir.join(&self.config.output.densities_file))
    }

    /// Writes the per-point stable density table as CSV.
    ///
    /// Failed points keep their grid coordinates and status but leave the
    /// density columns empty.
    fn write_densities(&self, path: &Path) -> Result<(), GasError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|err| config_error("densities_open", err))?;
        let mut header = vec![
            "index".to_string(),
            "temperature".to_string(),
            "mu_baryon".to_string(),
            "mu_strange".to_string(),
            "status".to_string(),
        ];
        for code in &self.manifest.stable_species {
            header.push(format!("rho1_{}", code.as_raw()));
        }
        writer
            .write_record(&header)
            .map_err(|err| config_error("densities_write", err))?;

        for outcome in &self.outcomes {
            let mut record = vec![
                outcome.index.to_string(),
                outcome.point.temperature.to_string(),
                outcome.point.mu_baryon.to_string(),
                outcome.point.mu_strange.to_string(),
                match &outcome.status {
                    PointStatus::Complete => "complete".to_string(),
                    PointStatus::Failed { error } => format!("failed: {error}"),
                },
            ];
            match &outcome.observables {
                Some(observables) => {
                    record.extend(observables.rho1.iter().map(|rho| rho.to_string()));
                }
                None => {
                    record.extend(
                        std::iter::repeat(String::new())
                            .take(self.manifest.stable_species.len()),
                    );
                }
            }
            writer
                .write_record(&record)
                .map_err(|err| config_error("densities_write", err))?;
        }
        writer
            .flush()
            .map_err(|err| config_error("densities_flush", err))
    }
}

/// Canonical SHA-256 hash over the per-point observable blocks.
///
/// Timestamps and file paths are excluded, so two sweeps over identical
/// inputs hash identically.
pub fn observables_hash(outcomes: &[PointOutcome]) -> Result<String, GasError> {
    let blocks: Vec<&Option<GasObservables>> =
        outcomes.iter().map(|outcome| &outcome.observables).collect();
    let bytes = to_canonical_json_bytes(&blocks)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
