//! Icon Path Value Object
//!
//! Parses the `<category>/<size>px/<name>.svg` layout used by the enum
//! generator. The layout is positional, so parsing is strict: anything that
//! does not have exactly three segments, a `px` size and an `.svg` leaf is
//! rejected instead of producing a malformed identifier.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{IconforgeError, IconforgeResult};

/// Extension of leaf asset files
pub const ASSET_EXTENSION: &str = "svg";

/// Unit suffix carried by size directories (`16px`)
pub const SIZE_UNIT: &str = "px";

const EXPECTED_SHAPE: &str = "<category>/<size>px/<name>.svg";

/// True when the path names an SVG asset
pub fn is_asset(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == ASSET_EXTENSION)
}

/// Strip the `px` unit from a size-like segment (`32px` -> `32`)
///
/// Returns `None` for segments that are not sizes.
pub fn size_value(segment: &str) -> Option<&str> {
    let digits = segment.strip_suffix(SIZE_UNIT).unwrap_or(segment);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

/// A parsed `<category>/<size>/<name>.svg` path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPath {
    source: PathBuf,
    category: String,
    size: String,
    name: String,
}

impl IconPath {
    /// Parse a path relative to the project root
    ///
    /// Leading `./` components are ignored.
    pub fn parse(path: &Path) -> IconforgeResult<Self> {
        let invalid = || IconforgeError::InvalidAssetPath {
            path: path.to_path_buf(),
            expected: EXPECTED_SHAPE.to_string(),
        };

        let mut segments = Vec::with_capacity(3);
        for component in path.components() {
            match component {
                Component::CurDir => continue,
                Component::Normal(segment) => segments.push(segment.to_str().ok_or_else(invalid)?),
                _ => return Err(invalid()),
            }
        }

        let [category, size, file] = segments.as_slice() else {
            return Err(invalid());
        };

        if !is_asset(Path::new(file)) || !size.ends_with(SIZE_UNIT) || size_value(size).is_none()
        {
            return Err(invalid());
        }

        let name = Path::new(file)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        Ok(Self {
            source: path.to_path_buf(),
            category: category.to_string(),
            size: size.to_string(),
            name: name.to_string(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Size segment as found on disk, unit included
    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enum member name: `<name>_<size without unit>`
    pub fn identifier(&self) -> String {
        let size = size_value(&self.size).unwrap_or(&self.size);
        format!("{}_{}", self.name, size)
    }

    /// Enum member value: `<category>_<size>_<name>`
    pub fn qualified_value(&self) -> String {
        format!("{}_{}_{}", self.category, self.size, self.name)
    }
}

impl fmt::Display for IconPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_icon_path() {
        let icon = IconPath::parse(Path::new("icons/16px/alert.svg")).unwrap();
        assert_eq!(icon.category(), "icons");
        assert_eq!(icon.size(), "16px");
        assert_eq!(icon.name(), "alert");
        assert_eq!(icon.identifier(), "alert_16");
        assert_eq!(icon.qualified_value(), "icons_16px_alert");
    }

    #[test]
    fn parse_ignores_leading_current_dir() {
        let icon = IconPath::parse(Path::new("./icons/24px/arrow-down.svg")).unwrap();
        assert_eq!(icon.identifier(), "arrow-down_24");
        assert_eq!(icon.qualified_value(), "icons_24px_arrow-down");
    }

    #[test]
    fn parse_rejects_missing_size_segment() {
        let err = IconPath::parse(Path::new("icons/alert.svg")).unwrap_err();
        assert!(matches!(err, IconforgeError::InvalidAssetPath { .. }));
        assert!(err.to_string().contains("<category>/<size>px/<name>.svg"));
    }

    #[test]
    fn parse_rejects_extra_depth() {
        let result = IconPath::parse(Path::new("icons/status/16px/alert.svg"));
        assert!(matches!(result, Err(IconforgeError::InvalidAssetPath { .. })));
    }

    #[test]
    fn parse_rejects_size_without_unit() {
        assert!(IconPath::parse(Path::new("icons/16/alert.svg")).is_err());
        assert!(IconPath::parse(Path::new("icons/px/alert.svg")).is_err());
        assert!(IconPath::parse(Path::new("icons/largepx/alert.svg")).is_err());
    }

    #[test]
    fn parse_rejects_non_svg_leaf() {
        assert!(IconPath::parse(Path::new("icons/16px/alert.png")).is_err());
    }

    #[test]
    fn parse_rejects_parent_components() {
        assert!(IconPath::parse(Path::new("../16px/alert.svg")).is_err());
    }

    #[test]
    fn size_value_strips_unit() {
        assert_eq!(size_value("32px"), Some("32"));
        assert_eq!(size_value("32"), Some("32"));
        assert_eq!(size_value("illustrations"), None);
        assert_eq!(size_value("px"), None);
    }

    #[test]
    fn is_asset_matches_svg_extension_only() {
        assert!(is_asset(Path::new("a/b.svg")));
        assert!(!is_asset(Path::new("a/b.svg.bak")));
        assert!(!is_asset(Path::new("a/svg")));
    }
}
