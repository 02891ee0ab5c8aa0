//! Component registry
//!
//! Component sources ship inside the binary. Each entry names the registry
//! components it imports so `vitrine add` can pull them in too.

use anyhow::Result;

/// A component that can be copied into a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Registry name, also the module name
    pub name: &'static str,
    pub description: &'static str,
    /// Other registry components this one imports
    pub dependencies: &'static [&'static str],
    /// Source text before import rewriting
    pub source: &'static str,
}

impl ComponentEntry {
    /// File name inside the components directory
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

/// Every component the CLI knows about, in display order
pub const REGISTRY: &[ComponentEntry] = &[
    ComponentEntry {
        name: "glass_surface",
        description: "Base glass surface with pointer-driven refraction and tilt",
        dependencies: &[],
        source: include_str!("../templates/glass_surface.rs"),
    },
    ComponentEntry {
        name: "glass_button",
        description: "Interactive glass button in three sizes",
        dependencies: &["glass_surface"],
        source: include_str!("../templates/glass_button.rs"),
    },
    ComponentEntry {
        name: "glass_card",
        description: "Frosted content card",
        dependencies: &["glass_surface"],
        source: include_str!("../templates/glass_card.rs"),
    },
    ComponentEntry {
        name: "glass_input",
        description: "Light glass text input with invalid state",
        dependencies: &["glass_surface"],
        source: include_str!("../templates/glass_input.rs"),
    },
    ComponentEntry {
        name: "glass_modal",
        description: "Strong glass card over a dimmed backdrop",
        dependencies: &["glass_card"],
        source: include_str!("../templates/glass_modal.rs"),
    },
];

/// Look up a component by name
///
/// Accepts the kebab-case spelling too (`glass-button`).
pub fn find(name: &str) -> Option<&'static ComponentEntry> {
    let normalized = name.trim().replace('-', "_").to_lowercase();
    REGISTRY.iter().find(|entry| entry.name == normalized)
}

/// Resolve `names` plus everything they depend on
///
/// Dependencies come before their dependents and every component appears
/// once.
pub fn resolve(names: &[String]) -> Result<Vec<&'static ComponentEntry>> {
    let mut resolved = Vec::new();
    for name in names {
        let Some(entry) = find(name) else {
            anyhow::bail!(
                "Unknown component '{}'. Run `vitrine list` to see available components.",
                name
            );
        };
        visit(entry, &mut resolved, &mut Vec::new())?;
    }
    Ok(resolved)
}

fn visit(
    entry: &'static ComponentEntry,
    resolved: &mut Vec<&'static ComponentEntry>,
    stack: &mut Vec<&'static str>,
) -> Result<()> {
    if resolved.iter().any(|e| e.name == entry.name) {
        return Ok(());
    }
    if stack.contains(&entry.name) {
        anyhow::bail!("Dependency cycle in registry at '{}'", entry.name);
    }

    stack.push(entry.name);
    for dep in entry.dependencies {
        let Some(dep_entry) = find(dep) else {
            anyhow::bail!("Component '{}' depends on unknown '{}'", entry.name, dep);
        };
        visit(dep_entry, resolved, stack)?;
    }
    stack.pop();

    resolved.push(entry);
    Ok(())
}
