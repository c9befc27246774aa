//! Build identity for the startup log line and GET /health
//!
//! Exposes GIT_HASH, BUILD_TIMESTAMP and BUILD_PROFILE to the crate.
//! No rerun-if-changed directives, so the script runs on every build.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned()).filter(|h| !h.is_empty())
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={}={}", key, value);
}

fn main() {
    let commit = short_commit().unwrap_or_else(|| UNKNOWN.to_owned());
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let profile = env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_owned());

    emit("GIT_HASH", &commit);
    emit("BUILD_TIMESTAMP", &built_at);
    emit("BUILD_PROFILE", &profile);
}
