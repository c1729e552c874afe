use std::fs;
use std::path::{Path, PathBuf};

use hrg_core::{ErrorInfo, GasError};
use hrg_gas::GraphTolerances;
use serde::{Deserialize, Serialize};

/// Inclusive linear axis specification for one grid dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// First value of the axis.
    pub start: f64,
    /// Last value of the axis (ignored when `steps` is 1).
    pub stop: f64,
    /// Number of samples, at least 1.
    pub steps: usize,
}

impl AxisSpec {
    /// Creates a single-valued axis.
    pub fn fixed(value: f64) -> Self {
        Self {
            start: value,
            stop: value,
            steps: 1,
        }
    }

    /// Returns the sampled values, endpoints included.
    pub fn values(&self) -> Vec<f64> {
        if self.steps <= 1 {
            return vec![self.start];
        }
        let span = self.stop - self.start;
        let denominator = (self.steps - 1) as f64;
        (0..self.steps)
            .map(|step| self.start + span * step as f64 / denominator)
            .collect()
    }
}

/// YAML-configurable parameters governing one grid sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Temperature axis in GeV.
    #[serde(default = "default_temperature_axis")]
    pub temperature: AxisSpec,
    /// Baryon chemical potential axis in GeV.
    #[serde(default = "default_potential_axis")]
    pub mu_baryon: AxisSpec,
    /// Strangeness chemical potential axis in GeV.
    #[serde(default = "default_potential_axis")]
    pub mu_strange: AxisSpec,
    /// Cluster expansion order for quantum statistics.
    #[serde(default = "default_expansion_order")]
    pub expansion_order: usize,
    /// Decay graph validation tolerances.
    #[serde(default)]
    pub tolerances: GraphTolerances,
    /// Number of grid points evaluated in parallel.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Output file layout.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_temperature_axis() -> AxisSpec {
    AxisSpec {
        start: 0.100,
        stop: 0.180,
        steps: 5,
    }
}

fn default_potential_axis() -> AxisSpec {
    AxisSpec::fixed(0.0)
}

fn default_expansion_order() -> usize {
    10
}

fn default_concurrency() -> usize {
    1
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature_axis(),
            mu_baryon: default_potential_axis(),
            mu_strange: default_potential_axis(),
            expansion_order: default_expansion_order(),
            tolerances: GraphTolerances::default(),
            concurrency: default_concurrency(),
            output: OutputConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, GasError> {
        let bytes = fs::read(path).map_err(|err| config_error("config_read", err))?;
        let config: Self =
            serde_yaml::from_slice(&bytes).map_err(|err| config_error("config_parse", err))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates axis and expansion settings.
    pub fn validate(&self) -> Result<(), GasError> {
        for (axis, name) in [
            (&self.temperature, "temperature"),
            (&self.mu_baryon, "mu_baryon"),
            (&self.mu_strange, "mu_strange"),
        ] {
            if axis.steps == 0 {
                return Err(GasError::Argument(
                    ErrorInfo::new("empty-axis", "grid axes need at least one sample")
                        .with_context("axis", name),
                ));
            }
        }
        if self.temperature.start <= 0.0 || self.temperature.stop <= 0.0 {
            return Err(GasError::Argument(
                ErrorInfo::new("non-positive-temperature", "temperature axis must be positive")
                    .with_context("start", self.temperature.start)
                    .with_context("stop", self.temperature.stop),
            ));
        }
        if self.expansion_order == 0 {
            return Err(GasError::Argument(ErrorInfo::new(
                "non-positive-expansion-order",
                "the cluster expansion needs at least one term",
            )));
        }
        Ok(())
    }
}

/// Output file names, resolved relative to the sweep output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Full report filename.
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
    /// Manifest filename.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: PathBuf,
    /// Per-point stable density table filename.
    #[serde(default = "default_densities_file")]
    pub densities_file: PathBuf,
}

fn default_report_file() -> PathBuf {
    PathBuf::from("report.json")
}

fn default_manifest_file() -> PathBuf {
    PathBuf::from("manifest.json")
}

fn default_densities_file() -> PathBuf {
    PathBuf::from("densities.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: default_report_file(),
            manifest_file: default_manifest_file(),
            densities_file: default_densities_file(),
        }
    }
}

pub(crate) fn config_error(code: &str, err: impl ToString) -> GasError {
    GasError::Serde(ErrorInfo::new(code, err.to_string()))
}
