//! Projection helpers for Maven repository metadata
//!
//! A snapshot repository publishes two metadata shapes: the artifact index
//! (`maven-metadata.xml` listing `<version>` children) and the per-version
//! build index (listing `<snapshotVersion>` records). These helpers pull the
//! interesting fields out of a parsed [`Value`] tree; the rest of the tree is
//! discarded.

use tracing::debug;

use crate::value::Value;

/// One `<snapshotVersion>` record from a per-version build index
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotArtifact {
    pub classifier: Option<String>,
    pub extension: Option<String>,
    pub value: Option<String>,
    pub updated: Option<String>,
}

impl SnapshotArtifact {
    fn from_value(record: &Value) -> Self {
        let field = |key| record.get(key).and_then(Value::as_text).map(str::to_owned);
        Self {
            classifier: field("classifier"),
            extension: field("extension"),
            value: field("value"),
            updated: field("updated"),
        }
    }

    /// True when both classifier and extension match exactly.
    ///
    /// Records without a classifier (plain jars, poms) never match.
    pub fn matches(&self, classifier: &str, extension: &str) -> bool {
        self.classifier.as_deref() == Some(classifier)
            && self.extension.as_deref() == Some(extension)
    }
}

/// Version strings listed by an artifact index document.
///
/// Returns them in document order; empty when the document does not carry a
/// `metadata/versioning/versions` listing. A single `<version>` child
/// collapses to map shape and is handled the same as the repeated form.
pub fn versions(doc: &Value) -> Vec<String> {
    let listing = doc.dig(&["metadata", "versioning", "versions"]);
    let found: Vec<String> = listing
        .map(|listing| {
            listing
                .children("version")
                .iter()
                .filter_map(|v| v.as_text())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    debug!(count = found.len(), "projected version listing");
    found
}

/// Snapshot build records listed by a per-version build index document.
pub fn snapshot_artifacts(doc: &Value) -> Vec<SnapshotArtifact> {
    let listing = doc.dig(&["metadata", "versioning", "snapshotVersions"]);
    let found: Vec<SnapshotArtifact> = listing
        .map(|listing| {
            listing
                .children("snapshotVersion")
                .iter()
                .map(|record| SnapshotArtifact::from_value(record))
                .collect()
        })
        .unwrap_or_default();
    debug!(count = found.len(), "projected snapshot build records");
    found
}

/// URL of the artifact index document.
pub fn index_url(base: &str) -> String {
    format!("{base}/maven-metadata.xml")
}

/// URL of the build index document for one version.
pub fn builds_url(base: &str, version: &str) -> String {
    format!("{base}/{version}/maven-metadata.xml")
}

/// URL of the archive for one resolved snapshot build.
pub fn archive_url(
    base: &str,
    version: &str,
    artifact: &str,
    build: &str,
    classifier: &str,
    extension: &str,
) -> String {
    format!("{base}/{version}/{artifact}-{build}-{classifier}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_str;

    const VERSION_INDEX: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<metadata>\n",
        "  <groupId>org.jruby</groupId>\n",
        "  <artifactId>jruby-dist</artifactId>\n",
        "  <versioning>\n",
        "    <versions>\n",
        "      <version>9.3.15.0-SNAPSHOT</version>\n",
        "      <version>9.4.9.0-SNAPSHOT</version>\n",
        "    </versions>\n",
        "    <lastUpdated>20250802121314</lastUpdated>\n",
        "  </versioning>\n",
        "</metadata>\n",
    );

    const BUILD_INDEX: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<metadata modelVersion=\"1.1.0\">\n",
        "  <versioning>\n",
        "    <snapshotVersions>\n",
        "      <snapshotVersion>\n",
        "        <extension>pom</extension>\n",
        "        <value>9.4.9.0-20250801.020302-51</value>\n",
        "        <updated>20250801020302</updated>\n",
        "      </snapshotVersion>\n",
        "      <snapshotVersion>\n",
        "        <classifier>bin</classifier>\n",
        "        <extension>tar.gz</extension>\n",
        "        <value>9.4.9.0-20250801.020302-51</value>\n",
        "        <updated>20250801020302</updated>\n",
        "      </snapshotVersion>\n",
        "    </snapshotVersions>\n",
        "  </versioning>\n",
        "</metadata>\n",
    );

    #[test]
    fn test_versions_projection() {
        let doc = from_str(VERSION_INDEX).unwrap();
        assert_eq!(
            versions(&doc),
            vec!["9.3.15.0-SNAPSHOT", "9.4.9.0-SNAPSHOT"]
        );
    }

    #[test]
    fn test_versions_single_entry_collapse() {
        let doc = from_str(concat!(
            "<?xml version=\"1.0\"?>\n",
            "<metadata><versioning><versions>",
            "<version>9.4.9.0-SNAPSHOT</version>",
            "</versions></versioning></metadata>",
        ))
        .unwrap();
        assert_eq!(versions(&doc), vec!["9.4.9.0-SNAPSHOT"]);
    }

    #[test]
    fn test_versions_missing_listing() {
        let doc = from_str("<?xml version=\"1.0\"?>\n<metadata></metadata>").unwrap();
        assert!(versions(&doc).is_empty());
    }

    #[test]
    fn test_snapshot_artifacts_projection() {
        let doc = from_str(BUILD_INDEX).unwrap();
        let artifacts = snapshot_artifacts(&doc);
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].classifier, None);
        assert_eq!(artifacts[0].extension.as_deref(), Some("pom"));
        assert_eq!(artifacts[1].classifier.as_deref(), Some("bin"));
        assert_eq!(
            artifacts[1].value.as_deref(),
            Some("9.4.9.0-20250801.020302-51")
        );
    }

    #[test]
    fn test_matches_requires_classifier() {
        let doc = from_str(BUILD_INDEX).unwrap();
        let artifacts = snapshot_artifacts(&doc);
        assert!(!artifacts[0].matches("bin", "tar.gz"));
        assert!(artifacts[1].matches("bin", "tar.gz"));
        assert!(!artifacts[1].matches("bin", "zip"));
    }

    #[test]
    fn test_url_formatting() {
        let base = "https://repo.example/org/jruby/jruby-dist";
        assert_eq!(
            index_url(base),
            "https://repo.example/org/jruby/jruby-dist/maven-metadata.xml"
        );
        assert_eq!(
            builds_url(base, "9.4.9.0-SNAPSHOT"),
            "https://repo.example/org/jruby/jruby-dist/9.4.9.0-SNAPSHOT/maven-metadata.xml"
        );
        assert_eq!(
            archive_url(
                base,
                "9.4.9.0-SNAPSHOT",
                "jruby-dist",
                "9.4.9.0-20250801.020302-51",
                "bin",
                "tar.gz"
            ),
            "https://repo.example/org/jruby/jruby-dist/9.4.9.0-SNAPSHOT/jruby-dist-9.4.9.0-20250801.020302-51-bin.tar.gz"
        );
    }
}
