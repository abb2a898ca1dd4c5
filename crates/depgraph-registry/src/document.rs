//! Registry package documents and version selection.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{Dependencies, LATEST};

/// The package document served by the registry for `GET <base>/<name>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDocument {
    #[serde(default, rename = "dist-tags")]
    pub dist_tags: HashMap<String, String>,
    #[serde(default)]
    pub versions: BTreeMap<String, VersionMetadata>,
}

/// Metadata for one published version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionMetadata {
    #[serde(default)]
    pub dependencies: Dependencies,
}

impl PackageDocument {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Pick the concrete version that answers `requested`.
    ///
    /// In order: the `latest` dist-tag when `latest` is requested, an exact key
    /// under `versions`, the `latest` dist-tag, then the highest published version.
    pub fn select_version(&self, requested: &str) -> Option<&str> {
        let latest_tag = self.dist_tags.get(LATEST).map(String::as_str);
        if requested == LATEST {
            if let Some(tag) = latest_tag {
                return Some(tag);
            }
        }
        if let Some((key, _)) = self.versions.get_key_value(requested) {
            return Some(key.as_str());
        }
        latest_tag.or_else(|| highest_version(self.versions.keys().map(String::as_str)))
    }

    /// Direct dependencies of the version selected for `requested`, empty if none resolves.
    pub fn dependencies_for(&self, requested: &str) -> Dependencies {
        self.select_version(requested)
            .and_then(|v| self.versions.get(v))
            .map(|meta| meta.dependencies.clone())
            .unwrap_or_default()
    }
}

/// Highest version by semantic-version ordering.
///
/// Strings that do not parse as semver rank below every parsable one; ties
/// between them are broken lexicographically.
pub fn highest_version<'a>(versions: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    versions
        .into_iter()
        .max_by(|a, b| {
            let pa = semver::Version::parse(a).ok();
            let pb = semver::Version::parse(b).ok();
            pa.cmp(&pb).then_with(|| a.cmp(b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "name": "demo",
        "dist-tags": { "latest": "1.2.0", "next": "2.0.0-rc.1" },
        "versions": {
            "1.0.0": { "dependencies": { "a": "^1.0.0" } },
            "1.2.0": { "dependencies": { "a": "^1.1.0", "b": "~2.0.0" } },
            "2.0.0-rc.1": { "dependencies": {} }
        }
    }"#;

    fn doc() -> PackageDocument {
        PackageDocument::parse(DOC).unwrap()
    }

    #[test]
    fn latest_uses_dist_tag() {
        assert_eq!(doc().select_version("latest"), Some("1.2.0"));
    }

    #[test]
    fn exact_version_wins() {
        assert_eq!(doc().select_version("1.0.0"), Some("1.0.0"));
        let deps = doc().dependencies_for("1.0.0");
        assert_eq!(deps.get("a").map(String::as_str), Some("^1.0.0"));
        assert!(!deps.contains_key("b"));
    }

    #[test]
    fn unknown_specifier_falls_back_to_latest_tag() {
        assert_eq!(doc().select_version("^1.0.0"), Some("1.2.0"));
    }

    #[test]
    fn no_tags_falls_back_to_highest_version() {
        let mut d = doc();
        d.dist_tags.clear();
        assert_eq!(d.select_version("latest"), Some("2.0.0-rc.1"));
        assert_eq!(d.select_version("9.9.9"), Some("2.0.0-rc.1"));
    }

    #[test]
    fn highest_version_uses_semver_not_string_order() {
        let v = highest_version(["1.9.0", "1.10.0", "1.2.0"]);
        assert_eq!(v, Some("1.10.0"));
    }

    #[test]
    fn unparsable_versions_rank_lowest() {
        assert_eq!(highest_version(["banana", "0.0.1", "zebra"]), Some("0.0.1"));
        assert_eq!(highest_version(["banana", "zebra"]), Some("zebra"));
        assert_eq!(highest_version([]), None);
    }

    #[test]
    fn empty_document_resolves_nothing() {
        let d = PackageDocument::parse("{}").unwrap();
        assert_eq!(d.select_version("latest"), None);
        assert!(d.dependencies_for("latest").is_empty());
    }

    #[test]
    fn version_without_dependencies_field() {
        let d = PackageDocument::parse(
            r#"{ "dist-tags": { "latest": "0.1.0" }, "versions": { "0.1.0": {} } }"#,
        )
        .unwrap();
        assert!(d.dependencies_for("latest").is_empty());
    }

    #[test]
    fn dangling_latest_tag_yields_no_dependencies() {
        let d = PackageDocument::parse(
            r#"{ "dist-tags": { "latest": "3.0.0" }, "versions": { "1.0.0": { "dependencies": { "x": "1" } } } }"#,
        )
        .unwrap();
        assert_eq!(d.select_version("latest"), Some("3.0.0"));
        assert!(d.dependencies_for("latest").is_empty());
    }
}
