//! Vitrine CLI
//!
//! Copy liquid glass components into your project and preview the CSS the
//! engine derives for a configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vitrine_glass::{
    DeviceCapabilities, GlassConfig, GlassEngine, GlassIntensity, GlassVariant, OpacityTier,
    PerformanceLevel,
};

mod config;
mod project;
mod registry;

use config::VitrineConfig;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Vitrine liquid glass component CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root
    #[arg(short = 'C', long, global = true, default_value = ".")]
    cwd: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create vitrine.toml in the project root
    Init {
        /// Module path components are reachable under
        #[arg(long, default_value = "crate::components")]
        components_alias: String,

        /// Path of the glass engine crate
        #[arg(long, default_value = "vitrine_glass")]
        glass_crate: String,

        /// Directory components are copied into
        #[arg(long, default_value = "src/components")]
        components_dir: String,

        /// Overwrite an existing vitrine.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Copy components (and what they depend on) into the project
    Add {
        /// Component names, see `vitrine list`
        #[arg(required = true)]
        components: Vec<String>,

        /// Replace files that already exist
        #[arg(short, long)]
        overwrite: bool,
    },

    /// List available components
    List,

    /// Print the CSS derived for a glass configuration
    Css {
        /// clear, frosted, tinted or dark
        #[arg(long, default_value = "frosted")]
        variant: String,

        /// light (subtle), regular or strong
        #[arg(long, default_value = "regular")]
        intensity: String,

        /// light, regular, medium or strong
        #[arg(long, default_value = "regular")]
        opacity: String,

        /// CSS selector for the rule
        #[arg(long, default_value = ".glass")]
        selector: String,

        /// Derive styles for a device without backdrop-filter support
        #[arg(long)]
        no_backdrop: bool,

        /// Derive styles for a low performance device
        #[arg(long)]
        low_performance: bool,

        /// Print the style record as JSON instead of CSS
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Commands::Init {
            components_alias,
            glass_crate,
            components_dir,
            force,
        } => cmd_init(
            &cli.cwd,
            &components_alias,
            &glass_crate,
            &components_dir,
            force,
        ),

        Commands::Add {
            components,
            overwrite,
        } => cmd_add(&cli.cwd, &components, overwrite),

        Commands::List => cmd_list(),

        Commands::Css {
            variant,
            intensity,
            opacity,
            selector,
            no_backdrop,
            low_performance,
            json,
        } => cmd_css(
            &variant,
            &intensity,
            &opacity,
            &selector,
            no_backdrop,
            low_performance,
            json,
        ),
    }
}

fn cmd_init(
    root: &Path,
    components_alias: &str,
    glass_crate: &str,
    components_dir: &str,
    force: bool,
) -> Result<()> {
    let config = VitrineConfig::default()
        .with_components_alias(components_alias)
        .with_glass_alias(glass_crate)
        .with_components_dir(components_dir);

    let path = project::init_project(root, &config, force)?;

    info!("Created {}", path.display());
    info!("Add components with `vitrine add <name>`");
    Ok(())
}

fn cmd_add(root: &Path, components: &[String], overwrite: bool) -> Result<()> {
    let config = VitrineConfig::load_from_dir(root)?;
    let entries = registry::resolve(components)?;

    info!(
        "Adding {} component(s) to {}",
        entries.len(),
        config.components_dir(root).display()
    );

    let report = project::add_components(root, &config, &entries, overwrite)?;

    for path in &report.written {
        info!("  + {}", path.display());
    }
    if !report.skipped.is_empty() {
        warn!(
            "Skipped {} existing file(s); pass --overwrite to replace them",
            report.skipped.len()
        );
    }

    Ok(())
}

fn cmd_list() -> Result<()> {
    println!("Available components:");
    println!();
    for entry in registry::REGISTRY {
        println!("  {:<16} {}", entry.name, entry.description);
        if !entry.dependencies.is_empty() {
            println!("  {:<16} requires: {}", "", entry.dependencies.join(", "));
        }
    }
    Ok(())
}

fn cmd_css(
    variant: &str,
    intensity: &str,
    opacity: &str,
    selector: &str,
    no_backdrop: bool,
    low_performance: bool,
    json: bool,
) -> Result<()> {
    // Unknown names still render (with defaults), but say so
    if let Err(err) = variant.parse::<GlassVariant>() {
        warn!("{}", err);
    }
    if let Err(err) = intensity.parse::<GlassIntensity>() {
        warn!("{}", err);
    }
    if let Err(err) = opacity.parse::<OpacityTier>() {
        warn!("{}", err);
    }

    let config = GlassConfig::new()
        .variant(variant)
        .intensity(intensity)
        .opacity(opacity);

    let engine = GlassEngine::with_capabilities(css_capabilities(no_backdrop, low_performance));

    let style = engine.generate_glass_css(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&style)?);
    } else {
        println!("{}", style.to_css_rule(selector));
    }

    Ok(())
}

/// Device the `css` command derives styles for
fn css_capabilities(no_backdrop: bool, low_performance: bool) -> DeviceCapabilities {
    DeviceCapabilities {
        supports_backdrop_filter: !no_backdrop,
        performance_level: if low_performance {
            PerformanceLevel::Low
        } else {
            PerformanceLevel::Medium
        },
        reduced_motion: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_capabilities_default() {
        let caps = css_capabilities(false, false);
        assert!(caps.supports_backdrop_filter);
        assert_eq!(caps.performance_level, PerformanceLevel::Medium);
        assert!(!caps.reduced_motion);

        let style = GlassEngine::with_capabilities(caps).generate_glass_css(&GlassConfig::new());
        assert_eq!(style.backdrop_filter, "blur(12px)");
        assert_eq!(style.background, "rgba(255, 255, 255, 0.25)");
    }

    #[test]
    fn test_css_capabilities_flags() {
        let no_backdrop = css_capabilities(true, false);
        assert!(!no_backdrop.supports_backdrop_filter);
        assert_eq!(no_backdrop.performance_level, PerformanceLevel::Medium);
        let style = GlassEngine::with_capabilities(no_backdrop).generate_glass_css(&GlassConfig::new());
        assert_eq!(style.background, "rgba(245, 245, 247, 0.375)");

        let low = css_capabilities(false, true);
        assert!(low.supports_backdrop_filter);
        assert_eq!(low.performance_level, PerformanceLevel::Low);
        let style = GlassEngine::with_capabilities(low)
            .generate_glass_css(&GlassConfig::new().intensity(GlassIntensity::Strong));
        assert_eq!(style.backdrop_filter, "blur(5px)");
        assert!(style.box_shadow.is_none());

        let both = css_capabilities(true, true);
        assert!(!both.supports_backdrop_filter);
        assert!(both.is_low_performance());
    }
}
