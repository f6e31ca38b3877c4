//! `<stem>.provenance.json` next to every file the CLI writes.
//!
//! A sidecar records which build produced the file and from what: the
//! subcommand, its typed parameters and the grid files it read.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Sidecar<'a, P> {
    version: &'static str,
    code_rev: String,
    command: &'a str,
    params: &'a P,
    inputs: Vec<String>,
    output: String,
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar<P: Serialize>(
    artifact: &Path,
    command: &str,
    params: &P,
    inputs: &[&Path],
) -> Result<PathBuf> {
    let doc = Sidecar {
        version: pipemaze::VERSION,
        code_rev: code_rev(),
        command,
        params,
        inputs: inputs.iter().map(|p| p.display().to_string()).collect(),
        output: artifact.display().to_string(),
    };
    let path = sidecar_path(artifact);
    ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display())),
        _ => Ok(()),
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` if set, else the short hash of the checkout, else `unknown`.
pub fn code_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
