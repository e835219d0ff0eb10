use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// The domain crate stays free of UI, runtime and browser bindings
const DOMAIN_CRATE: &str = "adgorithm-domain";
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tokio",
    "wasm-bindgen",
    "web-sys",
    "gloo-timers",
    "directories",
    "adgorithm-web",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} is not a workspace member"))?;

    let mut violations = forbidden_deps(domain);

    let src = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    violations.extend(forbidden_imports(&src)?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn forbidden_deps(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| FORBIDDEN_DOMAIN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

/// Catches `use dioxus::..`-style paths that slipped in through a re-export
fn forbidden_imports(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(
        r"\b(dioxus|tokio|web_sys|wasm_bindgen|adgorithm_web)::",
    )
    .context("compiling import pattern")?;

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            found.extend(forbidden_imports(&path)?);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (number, line) in text.lines().enumerate() {
            if let Some(m) = pattern.find(line) {
                found.push(format!(
                    "{}:{} references {}",
                    path.display(),
                    number + 1,
                    m.as_str().trim_end_matches("::")
                ));
            }
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(deps: &[&str]) -> Package {
        Package {
            name: DOMAIN_CRATE.to_string(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: deps
                .iter()
                .map(|name| Dependency {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_flags_ui_dependencies() {
        let violations = forbidden_deps(&package(&["serde", "dioxus", "chrono"]));
        assert_eq!(violations, vec!["adgorithm-domain depends on dioxus"]);
    }

    #[test]
    fn test_pure_dependencies_pass() {
        assert!(forbidden_deps(&package(&["serde", "thiserror", "uuid"])).is_empty());
    }

    #[test]
    fn test_parses_cargo_metadata_shape() {
        let json = r#"{
            "packages": [{
                "name": "adgorithm-domain",
                "manifest_path": "/w/crates/domain/Cargo.toml",
                "dependencies": [{"name": "serde", "req": "^1.0"}],
                "version": "0.1.0"
            }],
            "workspace_root": "/w"
        }"#;
        let metadata: Metadata = serde_json::from_str(json).expect("valid metadata");
        assert_eq!(metadata.packages[0].dependencies[0].name, "serde");
    }

    #[test]
    fn test_domain_sources_are_clean() {
        let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("../domain/src");
        let found = forbidden_imports(&src).expect("domain sources readable");
        assert!(found.is_empty(), "{found:?}");
    }
}
