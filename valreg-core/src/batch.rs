//! Batch runs over a network directory.

use serde::Serialize;
use tracing::info;

use crate::config::{RegistryConfig, RECORD_EXTENSION};
use crate::error::RegistryError;
use crate::report::ValidationReport;
use crate::scan::list_record_files;
use crate::validator::RecordValidator;

/// Appends the record extension when a caller passes a bare key.
pub fn normalize_filename(name: &str) -> String {
    if name.ends_with(RECORD_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, RECORD_EXTENSION)
    }
}

/// Files to check: the explicit list when given, otherwise every record in
/// the network directory (without the aggregate artifact), sorted.
pub fn resolve_filenames(
    config: &RegistryConfig,
    network: &str,
    explicit: Option<&[String]>,
) -> Result<Vec<String>, RegistryError> {
    match explicit {
        Some(names) => Ok(names.iter().map(|n| normalize_filename(n)).collect()),
        None => list_record_files(
            &config.network_dir(network),
            Some(&RegistryConfig::artifact_name(network)),
        ),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub network: String,
    pub reports: Vec<ValidationReport>,
    pub failed: Vec<String>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Reports worth printing: all of them when verbose, failures otherwise.
    pub fn printable(&self, verbose: bool) -> impl Iterator<Item = &ValidationReport> {
        self.reports.iter().filter(move |r| verbose || !r.ok)
    }

    pub fn ensure_success(&self) -> Result<(), RegistryError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(RegistryError::ValidationFailed {
                failed: self.failed.clone(),
            })
        }
    }
}

/// Validates `filenames` one after another.
///
/// Stops at the first on-chain lookup failure; every other failure is
/// collected and the run continues.
pub async fn run_batch(
    validator: &RecordValidator<'_>,
    network: &str,
    filenames: &[String],
) -> Result<BatchOutcome, RegistryError> {
    let mut reports = Vec::with_capacity(filenames.len());
    let mut failed = Vec::new();

    for filename in filenames {
        info!("checking {}", filename);
        let report = validator.validate(network, filename).await?;
        if !report.ok {
            failed.push(filename.clone());
        }
        reports.push(report);
    }

    Ok(BatchOutcome {
        network: network.to_string(),
        reports,
        failed,
    })
}
