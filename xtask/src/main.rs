//! Custom cargo commands for the vitrine crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + tests + clippy)
//!   cargo xtask wasm      - Build the browser bindings
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + wasm build + weights)
  test      Run all Rust tests
  check     Quick check (cargo check + tests + clippy)
  wasm      Build the wasm32 bindings (no default features)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("vitrine Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking scoring weights...");
    verify_weights()?;
    println!("✓ Weights keep title matches above body matches\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building wasm bindings...");
    wasm()?;
    println!("✓ wasm32 build succeeded\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("Running tests...");
    run_cargo(&["test", "--quiet"])?;

    println!("Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("✓ Quick check passed");
    Ok(())
}

fn wasm() -> Result<()> {
    run_cargo(&[
        "build",
        "--lib",
        "--release",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm",
    ])
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The ranking contract depends on relative weights, not exact values: any
/// title match must outrank the best possible body-only match.
fn verify_weights() -> Result<()> {
    let path = project_root()?.join("src/scoring/core.rs");
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let title = extract_weight(&content, "TITLE_MATCH_SCORE")?;
    let body = extract_weight(&content, "BODY_MATCH_SCORE")?;
    let bonus = extract_weight(&content, "MAX_BODY_POSITION_BONUS")?;

    println!("  title={} body={} position_bonus<={}", title, body, bonus);
    if title <= body + bonus {
        bail!(
            "TITLE_MATCH_SCORE ({}) must exceed BODY_MATCH_SCORE + MAX_BODY_POSITION_BONUS ({})",
            title,
            body + bonus
        );
    }
    Ok(())
}

/// Parse `pub const NAME: f64 = <value>;` out of a source file.
fn extract_weight(content: &str, name: &str) -> Result<f64> {
    let prefix = format!("pub const {}: f64 =", name);
    let line = content
        .lines()
        .find(|line| line.trim_start().starts_with(&prefix))
        .with_context(|| format!("{} not found", name))?;
    let value = line
        .trim_start()
        .trim_start_matches(&prefix)
        .trim()
        .trim_end_matches(';')
        .trim();
    value
        .parse()
        .with_context(|| format!("{} has a non-numeric value: {}", name, value))
}
