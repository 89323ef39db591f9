//! `<stem>.provenance.json` sidecars written next to every CLI output.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which code produced an artifact.
#[derive(Debug, Serialize)]
pub struct Build {
    pub code_rev: String,
    pub octohull: &'static str,
}

impl Build {
    pub fn current() -> Self {
        Self {
            code_rev: code_rev(),
            octohull: octohull::VERSION,
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a, P: Serialize> {
    #[serde(flatten)]
    build: Build,
    command: &'a str,
    params: &'a P,
    output: &'a Path,
}

/// Write the sidecar for `artifact` recording the build, the subcommand and
/// its typed parameters. Returns the sidecar path.
pub fn write_sidecar<P: Serialize>(artifact: &Path, command: &str, params: &P) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        build: Build::current(),
        command,
        params,
        output: artifact,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
}
