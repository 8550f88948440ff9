use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MEASUREPACK_COMMIT");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    // Explicit override first, then CI, then the local checkout.
    let commit = ["MEASUREPACK_COMMIT", "GITHUB_SHA"]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .map(|sha| short_sha(sha.trim()))
        .or_else(|| git(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=MEASUREPACK_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=MEASUREPACK_BUILD_DATE={date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn short_sha(sha: &str) -> String {
    sha.chars().take(7).collect()
}
