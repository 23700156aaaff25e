// SPDX-License-Identifier: MIT
//
// tint — command-line front end for the OKLCH design-token engine.
//
// This binary only wires files and flags to the library crates:
//
//   tint-color  → OKLCH ↔ sRGB conversion, hex, gamut clipping
//   tint-tokens → scales, semantic roles, WCAG checks, exporters
//
// Subcommands:
//
//   tokens <config>      [palette] through the token generator
//   semantic <config>    [semantic] roles + palette scales through an exporter
//   components <hex>     the eight component recipes as JSON
//   check <fg> <bg>      WCAG contrast report for one pair, with fixes
//
// Exports go to stdout. Logs go to stderr (RUST_LOG, or -v for debug).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tint_color::{Lch, Rgb};
use tint_tokens::{
    ExportFormat, Mode, TailwindFlavor, TextSize, TintConfig, TokenGenerator, WcagLevel, auto_adjust_contrast,
    generate_component_themes, generate_scales, suggest_adjustment, to_css, to_dtcg, to_tailwind_config,
    validate_pair,
};
use tracing::debug;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tint", about = "OKLCH design-token generator", version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate tokens for every [palette] entry
    Tokens {
        /// Path to a tint.toml file
        config: PathBuf,
        /// Output format: css, json, js or ts
        #[arg(long, default_value = "css")]
        format: ExportFormat,
    },
    /// Export light and dark semantic roles plus palette scales
    Semantic {
        /// Path to a tint.toml file with a [semantic] section
        config: PathBuf,
        #[arg(long, value_enum, default_value_t = Target::Css)]
        target: Target,
    },
    /// Print the eight component themes for a seed color as JSON
    Components {
        /// Seed color as hex (#rrggbb or #rgb)
        seed: String,
    },
    /// Report the WCAG contrast between two hex colors
    Check {
        fg: String,
        bg: String,
        /// AA or AAA
        #[arg(long, default_value = "AA")]
        level: WcagLevel,
        /// Use the large-text threshold
        #[arg(long)]
        large: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Css,
    Dtcg,
    TailwindJs,
    TailwindTs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Command::Tokens { config, format } => tokens(&config, format)?,
        Command::Semantic { config, target } => semantic(&config, target)?,
        Command::Components { seed } => components(&seed)?,
        Command::Check { fg, bg, level, large } => check(&fg, &bg, level, large)?,
    };
    println!("{output}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn load(path: &Path) -> Result<TintConfig> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = TintConfig::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), entries = config.palette.len(), "loaded config");
    Ok(config)
}

fn tokens(path: &Path, format: ExportFormat) -> Result<String> {
    let config = load(path)?;
    let palette = config.palette()?;
    let mut generator = TokenGenerator::new(config.generator);
    generator
        .export_tokens(&palette, format)
        .with_context(|| format!("Failed to generate tokens from {}", path.display()))
}

fn semantic(path: &Path, target: Target) -> Result<String> {
    let config = load(path)?;
    let palette = config.palette()?;
    let seeds = config
        .semantic
        .as_ref()
        .with_context(|| format!("No [semantic] section in {}", path.display()))?;

    let light = seeds.token_set(Mode::Light, &palette)?;
    let dark = seeds.token_set(Mode::Dark, &palette)?;
    let scales = generate_scales(&palette);

    Ok(match target {
        Target::Css => to_css(&light, Some(&dark), &scales, &config.css),
        Target::Dtcg => to_dtcg(&light, Some(&dark), &scales)?,
        Target::TailwindJs => to_tailwind_config(&light, Some(&dark), &scales, TailwindFlavor::Js),
        Target::TailwindTs => to_tailwind_config(&light, Some(&dark), &scales, TailwindFlavor::Ts),
    })
}

fn components(seed: &str) -> Result<String> {
    let seed = Lch::from_hex(seed).with_context(|| format!("Invalid seed color '{seed}'"))?;
    Ok(serde_json::to_string_pretty(&generate_component_themes(seed))?)
}

const SEARCH_ITERATIONS: u32 = 32;

fn check(fg: &str, bg: &str, level: WcagLevel, large: bool) -> Result<String> {
    let fg_rgb = Rgb::from_hex(fg).with_context(|| format!("Invalid foreground '{fg}'"))?;
    let bg_rgb = Rgb::from_hex(bg).with_context(|| format!("Invalid background '{bg}'"))?;
    let size = TextSize::from(large);

    let result = validate_pair(fg_rgb, bg_rgb, level, size);
    let verdict = if result.passed { "pass" } else { "fail" };
    let mut report = format!(
        "{fg_rgb} on {bg_rgb}: {:.2}:1  {level} {}  {verdict} (needs {:.1}:1)",
        result.contrast_ratio,
        if large { "large" } else { "normal" },
        level.threshold(size),
    );
    if let Some(l) = suggest_adjustment(fg_rgb, bg_rgb, level) {
        report.push_str(&format!("\nsuggested lightness: {l:.2}"));
        match auto_adjust_contrast(Lch::from(fg_rgb), bg_rgb, level, SEARCH_ITERATIONS) {
            Some(fixed) => report.push_str(&format!("\nnearest passing foreground: {}", fixed.to_hex())),
            None => report.push_str(&format!("\nno foreground lightness reaches {level} on {bg_rgb}")),
        }
    }
    Ok(report)
}
