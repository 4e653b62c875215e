//! Rendered manifest handling
//!
//! A release manifest is every rendered document concatenated, each one
//! preceded by a `---` separator and a `# Source: <pack>/<template>` comment
//! naming the template that produced it.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static DOCUMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s*\n)---\s*").expect("valid separator regex"));

static SOURCE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"# Source: ([^/\n]+)/(.+)").expect("valid source regex"));

/// Split a multi-document manifest into its documents, in order
///
/// Empty documents are dropped and every document is trimmed.
pub fn split_manifests(manifest: &str) -> Vec<String> {
    DOCUMENT_SEPARATOR
        .split(manifest.trim())
        .filter(|doc| !doc.is_empty())
        .map(|doc| doc.trim().to_string())
        .collect()
}

/// Template origin of a document, read from its `# Source:` annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    /// Pack name, the part before the first `/`
    pub chart: String,
    /// Template path relative to the pack, always `/`-separated
    pub template: String,
}

impl SourcePath {
    /// Find the first source annotation in a document
    pub fn find(document: &str) -> Option<Self> {
        let caps = SOURCE_ANNOTATION.captures(document)?;
        let template = caps[2].trim_end().to_string();
        if template.is_empty() {
            return None;
        }
        Some(Self {
            chart: caps[1].to_string(),
            template,
        })
    }

    /// The template path using the host path separator
    ///
    /// Annotations are always rendered with `/`, whatever the platform.
    pub fn relative_path(&self) -> PathBuf {
        self.template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// `pack/template`, exactly as annotated
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.chart, self.template)
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
