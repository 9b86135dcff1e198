//! Naming policy: a record lives at `<secp>.json`.

use std::path::Path;

use crate::config::RECORD_EXTENSION;
use crate::report::CheckOutcome;

pub fn expected_filename(secp: &str) -> String {
    format!("{}{}", secp, RECORD_EXTENSION)
}

/// Exact, case-sensitive comparison of the basename with `<secp>.json`.
pub fn check_filename(secp: &str, filename: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::pass();
    let basename = Path::new(filename)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let expected = expected_filename(secp);

    if basename != expected {
        outcome.fail(format!(
            "❌ Filename mismatch: expected '{}', got '{}'",
            expected, basename
        ));
    } else {
        outcome.note("✅ Filename matches secp key");
    }
    outcome
}
