//! Pack metadata recorded with each release

use semver::Version;
use serde::{Deserialize, Serialize};

/// Metadata of the pack (chart) a release was deployed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackMetadata {
    /// Pack name
    pub name: String,

    /// Pack version (SemVer)
    #[serde(with = "version_serde")]
    pub version: Version,

    #[serde(default)]
    pub description: Option<String>,

    /// Application version
    #[serde(default)]
    pub app_version: Option<String>,
}

impl PackMetadata {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            description: None,
            app_version: None,
        }
    }
}

mod version_serde {
    use semver::Version;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(version: &Version, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&version.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_serialized_as_string() {
        let mut pack = PackMetadata::new("nginx", Version::new(0, 4, 0));
        pack.app_version = Some("1.25".to_string());

        let value = serde_json::to_value(&pack).unwrap();
        assert_eq!(value["version"], json!("0.4.0"));
        assert_eq!(value["appVersion"], json!("1.25"));
    }

    #[test]
    fn test_optional_fields_default() {
        let pack: PackMetadata =
            serde_json::from_value(json!({"name": "redis", "version": "7.0.1"})).unwrap();
        assert_eq!(pack.version, Version::new(7, 0, 1));
        assert!(pack.description.is_none());
        assert!(pack.app_version.is_none());
    }

    #[test]
    fn test_invalid_version_rejected() {
        let result: Result<PackMetadata, _> =
            serde_json::from_value(json!({"name": "redis", "version": "latest"}));
        assert!(result.is_err());
    }
}
