//! Project scaffolding
//!
//! - `init` writes vitrine.toml
//! - `add` copies component sources into the components directory, rewriting
//!   their imports to the project's aliases, and registers them in `mod.rs`

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{AliasConfig, VitrineConfig, CONFIG_FILE};
use crate::registry::ComponentEntry;

/// Path prefix the templates use for sibling components
const TEMPLATE_COMPONENTS_PATH: &str = "crate::components::";

/// Path prefix the templates use for the engine crate
const TEMPLATE_GLASS_PATH: &str = "vitrine_glass::";

/// Outcome of an `add` run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write vitrine.toml into `root`
pub fn init_project(root: &Path, config: &VitrineConfig, force: bool) -> Result<PathBuf> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create {}", root.display()))?;
    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(config_path)
}

/// Copy `entries` into the project's components directory
pub fn add_components(
    root: &Path,
    config: &VitrineConfig,
    entries: &[&ComponentEntry],
    overwrite: bool,
) -> Result<AddReport> {
    let dir = config.components_dir(root);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut report = AddReport::default();
    for entry in entries {
        let target = dir.join(entry.file_name());
        if target.exists() && !overwrite {
            info!("Skipping {} (already exists)", target.display());
            report.skipped.push(target);
            continue;
        }

        let source = rewrite_imports(entry.source, &config.aliases);
        fs::write(&target, source)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        debug!("Wrote {}", target.display());
        report.written.push(target);
    }

    let modules: Vec<&str> = entries.iter().map(|entry| entry.name).collect();
    register_modules(&dir.join("mod.rs"), &modules)?;

    Ok(report)
}

/// Point template imports at the project's aliases
pub fn rewrite_imports(source: &str, aliases: &AliasConfig) -> String {
    let components = format!("{}::", aliases.components.trim_end_matches("::"));
    let glass = format!("{}::", aliases.glass.trim_end_matches("::"));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    loop {
        let next_components = find_path(source, cursor, TEMPLATE_COMPONENTS_PATH);
        let next_glass = find_path(source, cursor, TEMPLATE_GLASS_PATH);

        let (pos, pattern, replacement) = match (next_components, next_glass) {
            (Some(c), Some(g)) if c <= g => (c, TEMPLATE_COMPONENTS_PATH, &components),
            (_, Some(g)) => (g, TEMPLATE_GLASS_PATH, &glass),
            (Some(c), None) => (c, TEMPLATE_COMPONENTS_PATH, &components),
            (None, None) => break,
        };

        out.push_str(&source[cursor..pos]);
        out.push_str(replacement);
        cursor = pos + pattern.len();
    }
    out.push_str(&source[cursor..]);
    out
}

/// First occurrence of `path` at or after `from` that starts a path rather
/// than continuing one
///
/// `other_crate::components::` does not match `crate::components::`.
fn find_path(source: &str, from: usize, path: &str) -> Option<usize> {
    source[from..]
        .match_indices(path)
        .map(|(offset, _)| from + offset)
        .find(|&pos| {
            !source[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == ':')
        })
}

/// Make sure `mod.rs` declares every module in `modules`
fn register_modules(mod_path: &Path, modules: &[&str]) -> Result<()> {
    let mut content = if mod_path.exists() {
        fs::read_to_string(mod_path)
            .with_context(|| format!("Failed to read {}", mod_path.display()))?
    } else {
        String::new()
    };

    let mut changed = false;
    for module in modules {
        let declaration = format!("pub mod {};", module);
        if content.lines().any(|line| line.trim() == declaration) {
            continue;
        }
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&declaration);
        content.push('\n');
        changed = true;
    }

    if changed {
        fs::write(mod_path, content)
            .with_context(|| format!("Failed to write {}", mod_path.display()))?;
    }
    Ok(())
}
