//! The resolve flow over fixture documents, minus the network.

use mvnsnap::{from_str, metadata, Version};

const VERSION_INDEX: &str = include_str!("fixtures/valid/version-index.xml");
const BUILD_INDEX: &str = include_str!("fixtures/valid/build-index.xml");
const SINGLE_VERSION: &str = include_str!("fixtures/valid/single-version.xml");

#[test]
fn test_resolve_flow() {
    let base = "https://oss.sonatype.org/content/repositories/snapshots/org/jruby/jruby-dist";

    let index = from_str(VERSION_INDEX).unwrap();
    let mut versions = metadata::versions(&index);
    versions.retain(|v| v != "9000.dev-SNAPSHOT");
    let newest = versions.into_iter().max_by_key(|v| Version::new(v)).unwrap();
    assert_eq!(newest, "9.4.9.0-SNAPSHOT");

    let builds = from_str(BUILD_INDEX).unwrap();
    let build = metadata::snapshot_artifacts(&builds)
        .into_iter()
        .filter(|artifact| artifact.matches("bin", "tar.gz"))
        .filter_map(|artifact| artifact.value)
        .last()
        .unwrap();
    assert_eq!(build, "9.4.9.0-20250801.020302-51");

    assert_eq!(
        metadata::archive_url(base, &newest, "jruby-dist", &build, "bin", "tar.gz"),
        "https://oss.sonatype.org/content/repositories/snapshots/org/jruby/jruby-dist\
         /9.4.9.0-SNAPSHOT/jruby-dist-9.4.9.0-20250801.020302-51-bin.tar.gz"
    );
}

#[test]
fn test_without_exclusion_dev_build_wins() {
    let index = from_str(VERSION_INDEX).unwrap();
    let newest = metadata::versions(&index)
        .into_iter()
        .max_by_key(|v| Version::new(v))
        .unwrap();
    assert_eq!(newest, "9000.dev-SNAPSHOT");
}

#[test]
fn test_single_version_collapse_form() {
    let index = from_str(SINGLE_VERSION).unwrap();
    assert_eq!(metadata::versions(&index), vec!["9.4.9.0-SNAPSHOT"]);
}

#[test]
fn test_classifier_filter_skips_other_artifacts() {
    let builds = from_str(BUILD_INDEX).unwrap();
    let artifacts = metadata::snapshot_artifacts(&builds);
    assert_eq!(artifacts.len(), 4);
    let matching: Vec<_> = artifacts
        .iter()
        .filter(|artifact| artifact.matches("bin", "tar.gz"))
        .collect();
    assert_eq!(matching.len(), 1);
    // the pom record has no classifier and never matches
    assert!(artifacts.iter().any(|a| a.classifier.is_none()));
}
