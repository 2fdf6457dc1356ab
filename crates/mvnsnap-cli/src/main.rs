use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mvnsnap::{metadata, Version};

const DEFAULT_BASE_URL: &str =
    "https://oss.sonatype.org/content/repositories/snapshots/org/jruby/jruby-dist";

#[derive(Debug, Parser)]
#[command(
    name = "mvnsnap",
    version,
    about = "Resolve the download URL of the newest Maven snapshot build"
)]
struct Args {
    /// Repository directory holding the artifact's maven-metadata.xml
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Artifact id used in the archive file name
    #[arg(long, default_value = "jruby-dist")]
    artifact: String,
    /// Classifier of the archive to select
    #[arg(long, default_value = "bin")]
    classifier: String,
    /// Extension of the archive to select
    #[arg(long, default_value = "tar.gz")]
    extension: String,
    /// Versions to ignore when picking the newest
    #[arg(
        long = "exclude",
        value_name = "VERSION",
        default_values_t = vec![String::from("9000.dev-SNAPSHOT")]
    )]
    exclude: Vec<String>,
    /// Suppress the stderr echo of fetched URLs and response bodies
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let url = resolve(&args)?;
    println!("{url}");
    Ok(())
}

/// Fetch, parse, and project the two metadata documents in sequence, then
/// format the archive URL of the newest matching build.
fn resolve(args: &Args) -> Result<String> {
    let index = fetch(&metadata::index_url(&args.base_url), args.quiet)?;
    let doc = mvnsnap::from_str(&index).context("malformed version index")?;
    let mut versions = metadata::versions(&doc);
    versions.retain(|version| !args.exclude.contains(version));
    let newest = versions
        .into_iter()
        .max_by_key(|version| Version::new(version))
        .with_context(|| format!("no versions listed under {}", args.base_url))?;
    debug!(version = %newest, "picked newest snapshot version");

    let builds = fetch(&metadata::builds_url(&args.base_url, &newest), args.quiet)?;
    let doc = mvnsnap::from_str(&builds).context("malformed build index")?;
    let build = metadata::snapshot_artifacts(&doc)
        .into_iter()
        .filter(|artifact| artifact.matches(&args.classifier, &args.extension))
        .filter_map(|artifact| artifact.value)
        .last()
        .with_context(|| {
            format!(
                "no {}.{} build listed for {newest}",
                args.classifier, args.extension
            )
        })?;
    debug!(build = %build, "picked last matching build");

    Ok(metadata::archive_url(
        &args.base_url,
        &newest,
        &args.artifact,
        &build,
        &args.classifier,
        &args.extension,
    ))
}

/// GET a metadata document, echoing the URL and the raw body to stderr.
fn fetch(url: &str, quiet: bool) -> Result<String> {
    if !quiet {
        eprintln!("{url}");
    }
    let response = reqwest::blocking::get(url).with_context(|| format!("failed to fetch {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("request to {url} failed"))?;
    let body = response
        .text()
        .with_context(|| format!("failed to read body of {url}"))?;
    if !quiet {
        eprintln!("{body}");
    }
    Ok(body)
}
