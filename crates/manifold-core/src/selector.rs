//! `--show-only` template selectors
//!
//! A selector is either an exact template path or a glob pattern. It may be
//! written with the pack name (`mychart/templates/svc.yaml`) or relative to
//! the pack (`templates/svc.yaml`).

use glob::{MatchOptions, Pattern};

use crate::error::{CoreError, Result};
use crate::manifest::SourcePath;

/// `*` and `?` stay within one path segment
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Selector {
    raw: String,
    pattern: Pattern,
    matched: bool,
}

/// Restricts which documents are written
///
/// An empty selector list keeps every document.
#[derive(Debug, Default)]
pub struct ShowOnly {
    selectors: Vec<Selector>,
}

impl ShowOnly {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let selectors = patterns
            .iter()
            .map(|raw| {
                // Selectors may be typed with the host separator
                let raw = raw.as_ref().replace('\\', "/");
                let pattern = Pattern::new(&raw).map_err(|e| CoreError::InvalidSelector {
                    pattern: raw.clone(),
                    message: e.msg.to_string(),
                })?;
                Ok(Selector {
                    raw,
                    pattern,
                    matched: false,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { selectors })
    }

    /// Check a document's source against the selectors, remembering hits
    pub fn allows(&mut self, source: &SourcePath) -> bool {
        if self.selectors.is_empty() {
            return true;
        }

        let full_name = source.full_name();
        let mut allowed = false;
        for selector in &mut self.selectors {
            let hit = [full_name.as_str(), source.template.as_str()]
                .into_iter()
                .any(|name| {
                    selector.raw == name || selector.pattern.matches_with(name, MATCH_OPTIONS)
                });
            if hit {
                selector.matched = true;
                allowed = true;
            }
        }
        allowed
    }

    /// Selectors that have not matched any document so far
    pub fn unmatched(&self) -> Vec<&str> {
        self.selectors
            .iter()
            .filter(|s| !s.matched)
            .map(|s| s.raw.as_str())
            .collect()
    }
}
