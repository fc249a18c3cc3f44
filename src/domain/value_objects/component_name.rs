//! Component Name Value Object
//!
//! Derives generated component names from files under the optimized tree:
//! `illustrations/32px/warning.svg` -> `WarningIllustrations32Icon`.

use std::fmt;
use std::path::{Component, Path};

use super::asset_path::{is_asset, size_value};
use crate::error::{IconforgeError, IconforgeResult};

/// Marker directory that never contributes to a component name
pub const OPTIMIZED_MARKER: &str = "optimized";

const COMPONENT_SUFFIX: &str = "Icon";

/// Human-readable suffix for the directories an asset lives in
///
/// Descriptive segments come first (pascal-cased), size segments last with
/// their unit stripped. The `optimized` marker is skipped.
pub fn component_suffix<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut descriptive = String::new();
    let mut sizes = String::new();

    for segment in segments {
        if segment == OPTIMIZED_MARKER || segment.is_empty() {
            continue;
        }
        match size_value(segment) {
            Some(size) => sizes.push_str(size),
            None => descriptive.push_str(&pascal_case(segment)),
        }
    }

    descriptive + &sizes
}

/// Camel case with a leading capital
///
/// Splits on `-`, `_`, `.` and whitespace as well as on lower-to-upper
/// case boundaries, then capitalizes each word and any letter that follows
/// a digit run.
pub fn pascal_case(input: &str) -> String {
    let trimmed = input.trim();
    let split = if trimmed.chars().any(char::is_uppercase) {
        split_case_boundaries(trimmed)
    } else {
        trimmed.to_string()
    };
    let lowered = split.trim_start_matches(is_separator).to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut upper_next = true;
    let mut after_digit = false;
    for c in lowered.chars() {
        if is_separator(c) {
            upper_next = true;
            after_digit = false;
            continue;
        }
        if upper_next || after_digit {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper_next = false;
        after_digit = c.is_ascii_digit();
    }
    out
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

/// Insert `-` at `aB` and `ABc` boundaries (`XMLParser` -> `XML-Parser`)
fn split_case_boundaries(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || acronym_end {
                out.push('-');
            }
        }
        out.push(c);
    }
    out
}

/// Name of a generated component
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    /// Derive the name from a path relative to the optimized root
    pub fn derive(relative: &Path) -> IconforgeResult<Self> {
        let invalid = || IconforgeError::InvalidAssetPath {
            path: relative.to_path_buf(),
            expected: "<dir>/.../<name>.svg below the optimized root".to_string(),
        };

        if !is_asset(relative) {
            return Err(invalid());
        }
        let base = relative
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        let mut dirs = Vec::new();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                match component {
                    Component::CurDir => continue,
                    Component::Normal(segment) => dirs.push(segment.to_str().ok_or_else(invalid)?),
                    _ => return Err(invalid()),
                }
            }
        }

        let raw = format!("{}{}{}", base, component_suffix(dirs), COMPONENT_SUFFIX);
        Ok(Self(pascal_case(&raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
