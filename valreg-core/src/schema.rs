//! Structural comparison of a record against the reference example.

use crate::record::{value_type_name, ReferenceSchema, ValidatorRecord};
use crate::report::CheckOutcome;

/// Every reference field must be present with the same value type.
/// Fields the reference does not know about are reported but tolerated.
pub fn check_schema(schema: &ReferenceSchema, record: &ValidatorRecord) -> CheckOutcome {
    let mut outcome = CheckOutcome::pass();

    for (key, expected) in schema.fields() {
        let Some(actual) = record.get(key) else {
            outcome.fail(format!("❌ Missing field: '{}'", key));
            continue;
        };
        let (expected_type, actual_type) = (value_type_name(expected), value_type_name(actual));
        if expected_type != actual_type {
            outcome.fail(format!(
                "❌ Type mismatch for '{}': expected {}, got {}",
                key, expected_type, actual_type
            ));
        }
    }

    for key in record.fields().keys() {
        if !schema.fields().contains_key(key) {
            outcome.note(format!("⚠️ Extra field not in schema: '{}'", key));
        }
    }

    outcome
}
