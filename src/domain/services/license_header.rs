//! License Header Maintenance
//!
//! Inserts or refreshes the Apache copyright comment at the top of SVG
//! sources. Applying the header twice yields the same content as applying
//! it once.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::{NoExpand, Regex};

/// First copyright year of the asset sources
pub const START_YEAR: i32 = 2023;

/// Copyright holder line, including the trailing sentence
pub const COPYRIGHT_HOLDER: &str = "Solace Systems. All rights reserved.";

/// Category directories processed by default
pub const DEFAULT_HEADER_DIRS: [&str; 4] = ["icons", "illustrations", "images", "logo"];

static EXISTING_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?s)<!--\s*Copyright [\d-]+ {}.*?-->\n?",
        regex::escape(COPYRIGHT_HOLDER)
    );
    Regex::new(&pattern).expect("header pattern is valid")
});

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<\?xml[^>]*\?>").expect("declaration pattern is valid"));

/// What applying the header did to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderChange {
    /// No header was present; one was added
    Inserted,
    /// An older header was replaced
    Replaced,
    /// The file already carried this exact header
    Unchanged,
}

/// Result of applying the header to file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOutcome {
    pub change: HeaderChange,
    pub content: String,
}

/// The copyright comment for a year range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    text: String,
}

impl LicenseHeader {
    pub fn new(start_year: i32, current_year: i32) -> Self {
        let text = format!(
            "<!--\n \
Copyright {start_year}-{current_year} {COPYRIGHT_HOLDER}\n\
\n \
Licensed under the Apache License, Version 2.0 (the \"License\");\n \
you may not use this file except in compliance with the License.\n \
You may obtain a copy of the License at\n\
\n     \
http://www.apache.org/licenses/LICENSE-2.0\n\
\n \
Unless required by applicable law or agreed to in writing, software\n \
distributed under the License is distributed on an \"AS IS\" BASIS,\n \
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n \
See the License for the specific language governing permissions and\n \
limitations under the License.\n\
-->\n"
        );
        Self { text }
    }

    /// Header ending in the current calendar year
    pub fn current() -> Self {
        Self::new(START_YEAR, chrono::Local::now().year())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insert or replace the header
    ///
    /// An existing header is replaced in place (first match only). Otherwise
    /// the header goes right after a leading XML declaration, or at the very
    /// top when there is none.
    pub fn apply(&self, content: &str) -> HeaderOutcome {
        if let Some(found) = EXISTING_HEADER.find(content) {
            if found.as_str() == self.text {
                return HeaderOutcome {
                    change: HeaderChange::Unchanged,
                    content: content.to_string(),
                };
            }
            let updated = EXISTING_HEADER.replacen(content, 1, NoExpand(&self.text));
            return HeaderOutcome {
                change: HeaderChange::Replaced,
                content: updated.into_owned(),
            };
        }

        let content = match XML_DECLARATION.find(content) {
            Some(decl) => format!(
                "{}\n{}{}",
                decl.as_str(),
                self.text,
                &content[decl.end()..]
            ),
            None => format!("{}{}", self.text, content),
        };
        HeaderOutcome {
            change: HeaderChange::Inserted,
            content,
        }
    }
}
