//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconforgeError, IconforgeResult};

use super::types::{ColorMode, Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IconforgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IconforgeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config (explicit file, then `<root>/iconforge.toml`,
/// then defaults) and apply environment overrides.
///
/// An explicit file must exist; the implicit one is optional.
pub fn load_for_project(
    project_root: &Path,
    explicit: Option<&Path>,
) -> IconforgeResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let implicit = project_root.join(CONFIG_FILE_NAME);
            if implicit.is_file() {
                load_with_warnings(&implicit)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ICONFORGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // ICONFORGE_ICONS_DIR
    if let Some(dir) = get_env("ICONFORGE_ICONS_DIR").filter(|v| !v.is_empty()) {
        config.enum_gen.source = PathBuf::from(dir);
    }

    // ICONFORGE_ENUM_OUTPUT
    if let Some(output) = get_env("ICONFORGE_ENUM_OUTPUT").filter(|v| !v.is_empty()) {
        config.enum_gen.output = PathBuf::from(output);
    }

    // ICONFORGE_COMPONENTS_OUTPUT
    if let Some(output) = get_env("ICONFORGE_COMPONENTS_OUTPUT").filter(|v| !v.is_empty()) {
        config.components.output = PathBuf::from(output);
    }

    // ICONFORGE_COLOR (auto|always|never)
    if let Some(mode) = get_env("ICONFORGE_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = mode;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "enum",
        "components",
        "copy",
        "headers",
        "output",
        "source",
        "target",
        "name",
        "package_src",
        "directories",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
