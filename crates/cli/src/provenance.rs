//! Provenance sidecars: `<artifact>.provenance.json` next to every output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters recorded in a sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

#[derive(Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub hullmerge: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Sidecar {
    fn new(payload: Payload, outputs: Vec<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            hullmerge: hullmerge::VERSION,
            tag: payload.tag,
            params: payload.params,
            outputs,
        }
    }
}

/// Provenance document without outputs, as printed by `cli report`.
pub fn summary(tag: Option<String>) -> Sidecar {
    Sidecar::new(Payload::new(Value::Object(Default::default())).with_tag(tag), Vec::new())
}

/// Write the sidecar for `artifact`; returns its path.
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let path = artifact.with_extension("provenance.json");
    let doc = Sidecar::new(payload, vec![artifact.to_string_lossy().into_owned()]);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
