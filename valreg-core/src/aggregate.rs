//! Registry aggregation: one `secp`-keyed artifact per network.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::record::ValidatorRecord;
use crate::scan::list_record_files;

/// Networks the aggregator publishes.
pub const AGGREGATED_NETWORKS: [&str; 2] = ["mainnet", "testnet"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Records keyed by `secp`. Later files overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    pub entries: Map<String, Value>,
    pub skipped: Vec<SkippedFile>,
    /// Keys seen more than once, in the order the repeat was found.
    pub duplicates: Vec<String>,
}

impl RegistryIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, mut record: ValidatorRecord) {
        let secp = match record.get("secp") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        if record.name().map_or(true, |n| n.trim().is_empty()) {
            record.set("name", Value::String(secp.clone()));
        }

        if self.entries.contains_key(&secp) {
            warn!("duplicate secp key {:?}; keeping the later record", secp);
            self.duplicates.push(secp.clone());
        }
        self.entries.insert(secp, Value::Object(record.into_fields()));
    }
}

/// Reads every record in `dir`. Unreadable or malformed files are skipped.
pub fn read_validators(dir: &Path, exclude: Option<&str>) -> Result<RegistryIndex, RegistryError> {
    let mut index = RegistryIndex::default();

    for filename in list_record_files(dir, exclude)? {
        let path = dir.join(&filename);
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|raw| ValidatorRecord::parse(&raw).map_err(|e| e.to_string()));

        match parsed {
            Ok(record) => index.insert(record),
            Err(reason) => {
                warn!("Failed to read {}: {}", path.display(), reason);
                index.skipped.push(SkippedFile { filename, reason });
            }
        }
    }

    Ok(index)
}

/// Writes the index as pretty-printed JSON.
pub fn write_registry(index: &RegistryIndex, output: &Path) -> Result<(), RegistryError> {
    let mut content = serde_json::to_string_pretty(&index.entries)?;
    content.push('\n');
    std::fs::write(output, content).map_err(|source| RegistryError::Io {
        path: output.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub network: String,
    pub path: PathBuf,
    pub index: RegistryIndex,
}

/// Aggregates one network directory into its artifact.
pub fn generate(config: &RegistryConfig, network: &str) -> Result<GeneratedArtifact, RegistryError> {
    let artifact_name = RegistryConfig::artifact_name(network);
    let index = read_validators(&config.network_dir(network), Some(&artifact_name))?;
    let path = config.artifact_path(network);
    write_registry(&index, &path)?;
    info!("wrote {} validators to {}", index.len(), path.display());

    Ok(GeneratedArtifact {
        network: network.to_string(),
        path,
        index,
    })
}

pub fn generate_all(config: &RegistryConfig) -> Result<Vec<GeneratedArtifact>, RegistryError> {
    AGGREGATED_NETWORKS
        .iter()
        .map(|network| generate(config, network))
        .collect()
}
