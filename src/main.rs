// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Resume Sorter: keyword-driven CV classifier
//!
//! Files loose resumes into role folders based on the technologies and roles
//! they mention. Runs as a dry run unless `--execute` is given.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use resume_sorter::classifier::Classification;
use resume_sorter::config::{AppConfig, ManualMappings};
use resume_sorter::organizer::Organizer;
use resume_sorter::report;
use resume_sorter::taxonomy::Taxonomy;
use resume_sorter::Result;

/// Resume Sorter CLI - file resumes into role folders
#[derive(Parser, Debug)]
#[command(name = "resume-sorter")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "1.0.0")]
#[command(about = "Organize resume files into role folders based on content analysis", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "resume-sorter.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify and move resumes in the root directory
    Organize {
        /// Root directory containing CVs (overrides config)
        #[arg(long)]
        root_dir: Option<PathBuf>,

        /// Actually move files (default: dry-run mode)
        #[arg(long)]
        execute: bool,

        /// Path to JSON file with manual filename-to-folder mappings
        #[arg(long)]
        mappings: Option<PathBuf>,
    },

    /// Show per-role scores and the decision for one file
    Explain {
        /// Resume file to analyze
        file: PathBuf,

        /// Path to JSON file with manual filename-to-folder mappings
        #[arg(long)]
        mappings: Option<PathBuf>,
    },

    /// List roles and their keywords in tie-break order
    Roles,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "resume-sorter.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Some(Commands::Organize { root_dir, execute, mappings }) => {
            run_organize(config, root_dir, execute, mappings, &cli.format)
        }
        Some(Commands::Explain { file, mappings }) => {
            run_explain(config, file, mappings, &cli.format)
        }
        Some(Commands::Roles) => run_roles(),
        Some(Commands::Config { action }) => run_config_command(config, action),
        None => run_organize(config, None, false, None, &cli.format),
    }
}

/// Defaults, then config file mappings, then the mappings file
fn resolve_mappings(config: &AppConfig, mappings_file: Option<&Path>) -> ManualMappings {
    let mut mappings = ManualMappings::defaults();
    mappings.merge(config.mappings.clone());

    if let Some(path) = mappings_file {
        match ManualMappings::load(path) {
            Ok(loaded) => {
                info!("Loaded {} manual mappings from {:?}", loaded.len(), path);
                mappings.merge(loaded);
            }
            Err(e) => warn!("Could not load mappings file: {}", e),
        }
    }

    mappings
}

/// Run the organizer over the root directory
fn run_organize(
    mut config: AppConfig,
    root_dir: Option<PathBuf>,
    execute: bool,
    mappings_file: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    if let Some(root) = root_dir {
        config.root_dir = root;
    }
    let dry_run = !execute;

    info!("Resume Sorter - {}", if dry_run { "DRY RUN MODE" } else { "LIVE MODE" });
    info!("Root directory: {:?}", config.root_dir);

    let mappings = resolve_mappings(&config, mappings_file.as_deref());
    let taxonomy = Taxonomy::builtin()?;
    let organizer = Organizer::new(config, dry_run, taxonomy, mappings);

    let stats = organizer.run()?;

    match format {
        "json" => println!("{}", report::render_json(&stats)?),
        _ => {
            print!("{}", report::render_text(&stats));
            if dry_run {
                println!("\n[INFO] This was a dry run. Use --execute to actually move files.");
            }
        }
    }

    Ok(())
}

/// Explain the classification of a single file
fn run_explain(config: AppConfig, file: PathBuf, mappings_file: Option<PathBuf>, format: &str) -> Result<()> {
    let mappings = resolve_mappings(&config, mappings_file.as_deref());
    let taxonomy = Taxonomy::builtin()?;
    let root = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.root_dir.clone());

    let config = AppConfig { root_dir: root, ..config };
    let organizer = Organizer::new(config, true, taxonomy, mappings);
    let explanation = organizer.classifier().explain(&file);

    if format == "json" {
        let decision = match &explanation.classification {
            Classification::Matched(result) => serde_json::to_value(result)?,
            Classification::Unmatched => serde_json::Value::Null,
        };
        let output = serde_json::json!({
            "path": file.to_string_lossy(),
            "manual_role": explanation.manual_role,
            "used_filename_fallback": explanation.used_filename_fallback,
            "scores": explanation.scores.ranked(),
            "classification": decision,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", file.display());
    if let Some(role) = &explanation.manual_role {
        println!("  Manual mapping: {}", role);
    } else {
        if explanation.used_filename_fallback {
            println!("  (content too short, filename included in analysis)");
        }
        let ranked = explanation.scores.ranked();
        if ranked.is_empty() {
            println!("  No keyword hits");
        }
        for entry in ranked {
            println!("  {:>4}  {}", entry.score, entry.role);
        }
    }

    match explanation.classification {
        Classification::Matched(result) => println!(
            "Decision: {}/ (score: {}{})",
            result.role,
            result.score,
            if result.folder_must_be_created { ", new folder" } else { "" }
        ),
        Classification::Unmatched => println!("Decision: unmatched"),
    }

    Ok(())
}

/// Print the taxonomy
fn run_roles() -> Result<()> {
    let taxonomy = Taxonomy::builtin()?;
    for (i, role) in taxonomy.roles().iter().enumerate() {
        let keywords: Vec<&str> = role.keywords().iter().map(|k| k.phrase()).collect();
        println!("{:3}. {}: {}", i + 1, role.name(), keywords.join(", "));
    }
    Ok(())
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
    }

    Ok(())
}
