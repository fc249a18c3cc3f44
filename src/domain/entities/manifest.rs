//! Manifest entities - aggregate artifacts built from one entry per asset
//!
//! `IconManifest` backs the TypeScript enum; `ExportIndex` backs the
//! component index files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::{ComponentName, IconPath};
use crate::error::{IconforgeError, IconforgeResult};

/// Header line of the generated enum
pub const ENUM_HEADER: &str = "export enum Icons {";
/// Footer line of the generated enum
pub const ENUM_FOOTER: &str = "}";

/// Enum manifest keyed by identifier
///
/// Entries render in lexicographic order of their full line, so the output
/// does not depend on scan order.
#[derive(Debug, Default)]
pub struct IconManifest {
    entries: BTreeMap<String, (String, PathBuf)>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one icon; fails when its identifier is already taken
    pub fn insert(&mut self, icon: &IconPath) -> IconforgeResult<()> {
        let identifier = icon.identifier();
        if let Some((_, first)) = self.entries.get(&identifier) {
            return Err(IconforgeError::DuplicateIdentifier {
                identifier,
                first: first.clone(),
                second: icon.source().to_path_buf(),
            });
        }
        self.entries.insert(
            identifier,
            (icon.qualified_value(), icon.source().to_path_buf()),
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry lines, sorted
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|(identifier, (value, _))| enum_line(identifier, value))
            .collect();
        lines.sort();
        lines
    }

    /// Full enum source
    pub fn render(&self) -> String {
        let mut out = String::from(ENUM_HEADER);
        out.push('\n');
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(ENUM_FOOTER);
        out.push('\n');
        out
    }
}

/// One enum member line: `  alert_16 = "icons_16px_alert",`
pub fn enum_line(identifier: &str, value: &str) -> String {
    format!("  {} = \"{}\",", identifier, value)
}

/// Registry of component names, used to reject collisions across the tree
#[derive(Debug, Default)]
pub struct ExportIndex {
    names: BTreeMap<ComponentName, PathBuf>,
}

impl ExportIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component; fails when the name is already taken
    pub fn register(&mut self, name: &ComponentName, source: PathBuf) -> IconforgeResult<()> {
        if let Some(first) = self.names.get(name) {
            return Err(IconforgeError::DuplicateIdentifier {
                identifier: name.to_string(),
                first: first.clone(),
                second: source,
            });
        }
        self.names.insert(name.clone(), source);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
