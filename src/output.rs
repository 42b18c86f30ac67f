//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::services::{CaseOutcome, CaseResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of processing a batch of lines
#[derive(Debug, Serialize)]
pub struct BatchResult {
    /// Number of lines processed
    pub total: usize,
    /// Number of lines that passed validation
    pub reversed: usize,
    /// Number of lines rejected by validation
    pub rejected: usize,
    /// Per-line results, in input order
    pub cases: Vec<CaseEntry>,
}

/// Result for a single line
#[derive(Debug, Serialize)]
pub struct CaseEntry {
    /// 1-based case number
    pub case: usize,
    /// Whether the line passed validation
    pub ok: bool,
    /// Reversed text, present when the line passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Validation message, present when the line was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Measured character count, present when the line was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl CaseEntry {
    /// The text shown after the `Case {n}:` label
    #[must_use]
    pub fn text(&self) -> &str {
        self.output
            .as_deref()
            .or_else(|| self.error.as_deref())
            .unwrap_or_default()
    }
}

impl BatchResult {
    /// Build a batch result from per-line processing outcomes
    #[must_use]
    pub fn from_cases(results: &[CaseResult]) -> Self {
        let cases: Vec<CaseEntry> = results
            .iter()
            .map(|r| match &r.outcome {
                CaseOutcome::Reversed(text) => CaseEntry {
                    case: r.index,
                    ok: true,
                    output: Some(text.clone()),
                    error: None,
                    length: None,
                },
                CaseOutcome::OutOfBounds { length, .. } => CaseEntry {
                    case: r.index,
                    ok: false,
                    output: None,
                    error: Some(r.outcome.to_string()),
                    length: Some(*length),
                },
            })
            .collect();
        let reversed = cases.iter().filter(|c| c.ok).count();
        Self {
            total: results.len(),
            reversed,
            rejected: results.len() - reversed,
            cases,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for case in &self.cases {
            println!("Case {}: {}", case.case, case.text());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
