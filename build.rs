use chrono::Utc;
use std::env;
use std::fs::{metadata, File};
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");

    // Regenerate only when Cargo.toml is newer than the generated file
    let should_regenerate = if dest_path.exists() {
        let version_rs_modified = metadata(&dest_path).unwrap().modified().unwrap();
        let cargo_toml_modified = metadata(&cargo_toml_path).unwrap().modified().unwrap();
        cargo_toml_modified > version_rs_modified
    } else {
        true
    };

    if !should_regenerate {
        return;
    }

    let manifest = std::fs::read_to_string(&cargo_toml_path)
        .ok()
        .and_then(|content| content.parse::<toml::Table>().ok());

    let task_api_version = read_task_api_version(manifest.as_ref());
    let (major, minor, patch) = read_version_triple(manifest.as_ref());
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let git_hash = git_short_hash();

    let mut f = File::create(&dest_path).unwrap();
    writeln!(
        &mut f,
        r###"pub const TASK_API_VERSION: &str = "{task_api_version}";
pub const BUILD_TIME: &str = "{build_time}";
pub const GIT_HASH: &str = "{git_hash}";
pub const VERSION_MAJOR: u32 = {major};
pub const VERSION_MINOR: u32 = {minor};
pub const VERSION_PATCH: u32 = {patch};
pub const VERSION: &str = "{major}.{minor}.{patch}";"###
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Task API version from `[package.metadata] task_api_version`
fn read_task_api_version(manifest: Option<&toml::Table>) -> String {
    manifest
        .and_then(|t| t.get("package"))
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.as_table())
        .and_then(|m| m.get("task_api_version"))
        .and_then(|v| v.as_integer())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Package version split into its numeric components. Non-numeric
/// trailers (pre-release tags) are ignored, missing components are zero.
fn read_version_triple(manifest: Option<&toml::Table>) -> (u32, u32, u32) {
    let version = manifest
        .and_then(|t| t.get("package"))
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .unwrap_or("0.0.0")
        .to_string();

    let mut parts = version.split('.');
    let mut next_component = || {
        parts
            .next()
            .map(|part| {
                part.chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect::<String>()
            })
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap_or(0)
    };
    let major = next_component();
    let minor = next_component();
    let patch = next_component();
    (major, minor, patch)
}

fn git_short_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
