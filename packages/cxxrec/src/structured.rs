use serde::{Deserialize, Serialize};

/// The structured outcome of a run.
///
/// Logged as a single json line so tools wrapping the CLI can tell what happened without parsing
/// the formatted blocks.
#[non_exhaustive]
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub(crate) enum StructuredOutput {
    Formatted { emitted: usize, skipped: usize },
    Error { message: String },
}

impl std::fmt::Debug for StructuredOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_json::to_string(self).map_err(|_e| std::fmt::Error)?)
    }
}

impl From<cxx_records::Summary> for StructuredOutput {
    fn from(summary: cxx_records::Summary) -> Self {
        StructuredOutput::Formatted {
            emitted: summary.emitted,
            skipped: summary.skipped,
        }
    }
}
