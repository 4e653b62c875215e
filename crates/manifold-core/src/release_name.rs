//! Release name and namespace validation
//!
//! Release names end up in storage paths, labels and, for `get manifest`, as
//! the output directory. They follow the DNS-1123 subdomain rules with a
//! shorter length limit so generated resource names stay under 63 characters.
//! Namespaces are DNS-1123 labels.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CoreError, Result};

/// Maximum length of a release name
pub const MAX_RELEASE_NAME_LEN: usize = 53;

static RELEASE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid release name regex")
});

/// Maximum length of a namespace
pub const MAX_NAMESPACE_LEN: usize = 63;

static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid namespace regex"));

/// Check that `name` is usable as a release name
pub fn validate_release_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| CoreError::InvalidReleaseName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is required"));
    }
    if name.len() > MAX_RELEASE_NAME_LEN {
        return Err(invalid(&format!(
            "must be no more than {} characters",
            MAX_RELEASE_NAME_LEN
        )));
    }
    if !RELEASE_NAME.is_match(name) {
        return Err(invalid(
            "must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character",
        ));
    }

    Ok(())
}

/// Check that `namespace` is a DNS-1123 label
pub fn validate_namespace(namespace: &str) -> Result<()> {
    let invalid = |reason: &str| CoreError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: reason.to_string(),
    };

    if namespace.is_empty() {
        return Err(invalid("namespace is required"));
    }
    if namespace.len() > MAX_NAMESPACE_LEN {
        return Err(invalid(&format!(
            "must be no more than {} characters",
            MAX_NAMESPACE_LEN
        )));
    }
    if !NAMESPACE.is_match(namespace) {
        return Err(invalid(
            "must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character",
        ));
    }

    Ok(())
}
