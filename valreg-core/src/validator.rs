//! Per-record validation pipeline.
//!
//! Stages run in a fixed order: load, schema, name, logo, identity, filename.
//! Load and schema failures end the pass early because nothing after them can
//! trust the record's shape. The later stages always all run, so a report
//! lists every problem with the record at once.

use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::filename::check_filename;
use crate::identity::{reconcile_keys, KeySource};
use crate::logo::{check_logo, AssetFetcher};
use crate::record::{ReferenceSchema, ValidatorRecord};
use crate::report::{CheckOutcome, ValidationReport};
use crate::schema::check_schema;

pub const SUCCESS_BANNER: &str = "🎉 Validation successful!";

pub struct RecordValidator<'a> {
    config: &'a RegistryConfig,
    schema: &'a ReferenceSchema,
    assets: &'a dyn AssetFetcher,
    keys: &'a dyn KeySource,
}

impl<'a> RecordValidator<'a> {
    pub fn new(
        config: &'a RegistryConfig,
        schema: &'a ReferenceSchema,
        assets: &'a dyn AssetFetcher,
        keys: &'a dyn KeySource,
    ) -> Self {
        Self {
            config,
            schema,
            assets,
            keys,
        }
    }

    /// Validates `<base_dir>/<network>/<filename>`.
    ///
    /// Returns `Err` only when the chain cannot be queried; every other
    /// problem is reported in the returned [`ValidationReport`].
    pub async fn validate(&self, network: &str, filename: &str) -> Result<ValidationReport, RegistryError> {
        let mut report = ValidationReport::new(network, filename);
        let path = self.config.network_dir(network).join(filename);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                report.push(format!("❌ Failed to read file: {}", e));
                return Ok(report);
            }
        };
        let record = match ValidatorRecord::parse(&raw) {
            Ok(record) => record,
            Err(e) => {
                report.push(format!("❌ Invalid JSON format: {}", e));
                return Ok(report);
            }
        };

        report.push("");
        report.push(format!("🌐 Network: {}", network));
        report.push(format!("🆔 Validator ID: {}", record.display_field("id")));
        report.push(format!("🔑 SECP: {}", record.display_field("secp")));
        report.push(format!("🔑 BLS : {}", record.display_field("bls")));
        report.push("");
        report.push("✅ JSON is valid");

        let schema = check_schema(self.schema, &record);
        report.extend(schema.messages);
        if !schema.ok {
            report.push("❌ Schema check failed");
            return Ok(report);
        }
        report.push("✅ Schema and types match");

        // Schema passed, so the string fields below are present and typed.
        let secp = record.secp().unwrap_or_default();
        let bls = record.bls().unwrap_or_default();
        let mut is_valid = true;

        match record.name().map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => report.push(format!("✅ Name is valid: '{}'", name)),
            None => {
                report.push("❌ Invalid 'name': field is empty or missing");
                is_valid = false;
            }
        }

        let logo = record.logo().unwrap_or_default();
        let logo_check = check_logo(self.assets, logo).await;
        if logo_check.ok {
            report.push("✅ Logo is valid");
        } else {
            report.extend(logo_check.messages);
            report.push(format!("❌ Logo {} check failed", logo));
            is_valid = false;
        }

        let identity = match record.validator_id() {
            Some(id) => {
                debug!("reconciling validator {} on {}", id, network);
                let chain = self
                    .keys
                    .get_validator_keys(id, network)
                    .await
                    .map_err(|source| RegistryError::Oracle {
                        id,
                        network: network.to_string(),
                        source,
                    })?;
                reconcile_keys(secp, bls, &chain)
            }
            None => {
                let mut outcome = CheckOutcome::pass();
                outcome.fail(format!(
                    "❌ Invalid 'id': expected a non-negative 64-bit integer, got {}",
                    record.display_field("id")
                ));
                outcome
            }
        };
        is_valid &= identity.ok;
        report.extend(identity.messages);

        let naming = check_filename(secp, filename);
        is_valid &= naming.ok;
        report.extend(naming.messages);

        if is_valid {
            report.push("");
            report.push(SUCCESS_BANNER);
        }
        report.ok = is_valid;
        Ok(report)
    }
}
