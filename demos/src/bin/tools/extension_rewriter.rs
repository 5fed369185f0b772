//! Extension Rewriter (Manifest-driven)
//!
//! Plans a bulk rename for paths listed in an untrusted manifest, e.g. a file list
//! exported from a Windows build agent and processed on a Linux box. Each entry is parsed
//! with the manifest's platform syntax, so drive letters and UNC shares keep their meaning
//! on any host. Entries with illegal characters are reported and skipped. The plan is
//! printed as JSON; no file is touched.

use anyhow::{Context, Result};
use portable_path::{PathSyntax, Platform, PortablePathError};
use std::env;
use tracing_subscriber::EnvFilter;

const DEMO_MANIFEST: &str = "\
C:\\agent\\out\\report.htm
C:\\agent\\out\\index.htm
\\\\share\\drops\\build 17\\notes.htm
C:\\agent\\out\\<injected>.htm
C:\\agent\\out\\README
";

#[derive(Debug)]
struct Rename {
    from: String,
    to: String,
    directory: Option<String>,
}

fn main() -> Result<()> {
    // stdout carries the JSON plan; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (manifest, platform, extension) = if args.len() < 4 {
        eprintln!(
            "Usage: {} <manifest.txt> <windows|posix> <new-extension>",
            args[0]
        );
        eprintln!("No args provided; running with a built-in Windows manifest...\n");
        (DEMO_MANIFEST.to_owned(), Platform::Windows, ".html".to_owned())
    } else {
        let manifest = std::fs::read_to_string(&args[1])
            .with_context(|| format!("reading manifest '{}'", args[1]))?;
        let platform: Platform = args[2].parse()?;
        (manifest, platform, args[3].clone())
    };

    let plan = plan_renames(&manifest, PathSyntax::new(platform), &extension)?;
    let json: Vec<serde_json::Value> = plan
        .iter()
        .map(|r| {
            serde_json::json!({
                "from": r.from,
                "to": r.to,
                "directory": r.directory,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn plan_renames(manifest: &str, syntax: PathSyntax, extension: &str) -> Result<Vec<Rename>> {
    let mut plan = Vec::new();
    let mut blocked = 0usize;

    for (line_no, line) in manifest.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        match plan_one(entry, &syntax, extension) {
            Ok(Some(rename)) => plan.push(rename),
            Ok(None) => tracing::info!(line = line_no + 1, entry, "extension already matches"),
            Err(e @ PortablePathError::InvalidFormat { .. }) => {
                blocked += 1;
                tracing::warn!(line = line_no + 1, error = %e, "entry blocked");
            }
            Err(e) => return Err(e.into()),
        }
    }
    tracing::info!(planned = plan.len(), blocked, "rename plan ready");
    Ok(plan)
}

fn plan_one(
    entry: &str,
    syntax: &PathSyntax,
    extension: &str,
) -> portable_path::Result<Option<Rename>> {
    let to = syntax
        .change_extension(Some(entry), Some(extension))?
        .map(|p| p.into_owned())
        .unwrap_or_default();
    if to == entry {
        return Ok(None);
    }
    let directory = syntax
        .get_directory_name(Some(entry))?
        .map(|d| d.into_owned());
    Ok(Some(Rename {
        from: entry.to_owned(),
        to,
        directory,
    }))
}
