//! Check verdicts and per-record validation reports.

use serde::Serialize;

/// Result of one check: a verdict plus the lines it contributes to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub ok: bool,
    pub messages: Vec<String>,
}

impl Default for CheckOutcome {
    fn default() -> Self {
        Self::pass()
    }
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            ok: true,
            messages: Vec::new(),
        }
    }

    /// Records a failing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.ok = false;
        self.messages.push(message.into());
    }

    /// Records a message without affecting the verdict.
    pub fn note(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Full diagnostic for one record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub network: String,
    pub filename: String,
    pub ok: bool,
    pub lines: Vec<String>,
}

impl ValidationReport {
    pub fn new(network: &str, filename: &str) -> Self {
        Self {
            network: network.to_string(),
            filename: filename.to_string(),
            ok: false,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_keeps_verdict() {
        let mut outcome = CheckOutcome::pass();
        outcome.note("⚠️ heads up");
        assert!(outcome.ok);
        outcome.fail("❌ broken");
        assert!(!outcome.ok);
        assert_eq!(outcome.messages.len(), 2);
    }

    #[test]
    fn test_render_joins_lines() {
        let mut report = ValidationReport::new("mainnet", "ab.json");
        report.push("one");
        report.push("two");
        assert_eq!(report.render(), "one\ntwo");
        assert!(report.contains("tw"));
        assert!(!report.ok);
    }
}
