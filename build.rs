use std::env;
use std::process::Command;

/// Run a git command, falling back to an env var (Docker builds have no .git)
fn git(args: &[&str], fallback_var: &str) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| env::var(fallback_var).ok())
}

fn main() {
    let git_hash = git(&["rev-parse", "--short", "HEAD"], "GIT_HASH");
    let git_date = git(&["log", "-1", "--format=%ci"], "GIT_DATE");
    let git_branch = git(&["rev-parse", "--abbrev-ref", "HEAD"], "GIT_BRANCH");

    let git_dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| !output.stdout.is_empty())
        .or_else(|| env::var("GIT_DIRTY").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(false);

    let rust_version = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let unknown = || "unknown".to_string();
    println!("cargo:rustc-env=GIT_HASH={}", git_hash.unwrap_or_else(unknown));
    println!("cargo:rustc-env=GIT_DATE={}", git_date.unwrap_or_else(unknown));
    println!("cargo:rustc-env=GIT_BRANCH={}", git_branch.unwrap_or_else(unknown));
    println!("cargo:rustc-env=GIT_DIRTY={}", git_dirty);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", chrono::Utc::now().to_rfc3339());
    println!("cargo:rustc-env=RUST_VERSION={}", rust_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
