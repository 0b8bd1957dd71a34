// ============================================================
// Layer 3 — Label Domain Type
// ============================================================
// The three-way tag assigned to every query token:
//   - Include — the token sits inside an inclusion-criterion span
//   - Exclude — the token sits inside an exclusion-criterion span
//   - Neither — the token matched no criterion phrase
//
// Example:
//   query  = "undergoing routine antenatal care but don't have
//             adverse effect caused by medicinal substance"
//   labels = Neither, include, include, include, Neither, ...,
//            exclude, exclude, ...
//
// The wire form written to the output CSV is lowercase
// "include" / "exclude" but capitalised "Neither" — that exact
// spelling is what downstream training scripts already consume,
// so it is part of the output contract.
//
// Reference: Rust Book §6 (Enums)

use serde::{Deserialize, Serialize};

/// Per-token label for the span-extraction training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Token is part of a matched inclusion-criterion span
    #[serde(rename = "include")]
    Include,

    /// Token is part of a matched exclusion-criterion span
    #[serde(rename = "exclude")]
    Exclude,

    /// Token matched no criterion phrase
    #[serde(rename = "Neither")]
    Neither,
}

impl Label {
    /// The exact string written to the output CSV for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Include => "include",
            Label::Exclude => "exclude",
            Label::Neither => "Neither",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a label sequence as the comma-joined CSV cell value,
/// e.g. "Neither, include, include, Neither".
pub fn join_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spelling_is_exact() {
        // Downstream consumers rely on this exact casing
        assert_eq!(Label::Include.as_str(), "include");
        assert_eq!(Label::Exclude.as_str(), "exclude");
        assert_eq!(Label::Neither.as_str(), "Neither");
    }

    #[test]
    fn test_join_labels() {
        let seq = [Label::Neither, Label::Include, Label::Exclude];
        assert_eq!(join_labels(&seq), "Neither, include, exclude");
    }

    #[test]
    fn test_join_empty_sequence() {
        assert_eq!(join_labels(&[]), "");
    }
}
