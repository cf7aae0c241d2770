//! Generates `build_info.rs` in OUT_DIR: commit, build date and profile for `serpent --version`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const PACKAGE: &str = "serpent";

/// `SERPENT_<NAME>` from the environment, so packagers can pin values.
fn override_var(name: &str) -> Option<String> {
    env::var(format!("{}_{}", PACKAGE.to_uppercase(), name))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let commit = override_var("BUILD_COMMIT")
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let date = override_var("BUILD_DATE")
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    let generated = [
        ("BUILD_COMMIT", commit),
        ("BUILD_DATE", date),
        ("BUILD_PROFILE", profile),
    ]
    .iter()
    .map(|(name, value)| format!("pub const {}: &str = {:?};\n", name, value))
    .collect::<String>();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));
    fs::write(out_dir.join("build_info.rs"), generated).expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    for name in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={}_{}", PACKAGE.to_uppercase(), name);
    }
}
