//! Differ Domain Service
//!
//! Line diffs between a generated artifact and the file on disk, used by
//! the drift check.

use similar::{ChangeTag, TextDiff};

/// Line counts and unified rendering of one file diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Unified diff text; empty when nothing changed
    pub unified: String,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short summary (e.g., "+5, -3")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Differ service for computing file differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Diff `old` (on disk) against `new` (generated), labelling both sides
    /// with `label`
    pub fn diff(&self, old: &str, new: &str, label: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Delete => result.deletions += 1,
                ChangeTag::Insert => result.additions += 1,
                ChangeTag::Equal => {}
            }
        }

        if result.has_changes() {
            result.unified = text_diff
                .unified_diff()
                .context_radius(3)
                .header(&format!("a/{label}"), &format!("b/{label}"))
                .to_string();
        }
        result
    }
}
