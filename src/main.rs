// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! KartQA command line.
//!
//! Builds question/answer and caption datasets from racing-game scene
//! documents, either from a list of image files or by scanning a directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kartqa::generate::{batch, statements};
use kartqa::io::filename::SceneRef;
use kartqa::io::scene_reader::{JsonSceneReader, SceneReader};
use kartqa::io::serialization::{export_json, import_image_list};
use kartqa::{assemble_all, Dataset, DatasetKind, GeneratorConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kartqa")]
#[command(about = "Generate QA and caption datasets from racing-game scene metadata", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory that image file paths are relative to
    #[arg(long, global = true, default_value = ".")]
    data_root: PathBuf,

    /// YAML file overriding generation settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Question/answer pairs for every image in a JSON list
    Qa { input: PathBuf, output: PathBuf },

    /// Caption pairs for every image in a JSON list
    Captions { input: PathBuf, output: PathBuf },

    /// Pairs for every view of every info file in a directory
    Scan {
        dir: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value = "qa")]
        kind: Kind,
    },

    /// Print the caption sentences for one view
    Check { info_file: PathBuf, view_index: usize },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Kind {
    Qa,
    Captions,
}

impl From<Kind> for DatasetKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Qa => DatasetKind::Qa,
            Kind::Captions => DatasetKind::Captions,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = GeneratorConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Qa { input, output } => {
            run_list(&cli.data_root, &config, &input, &output, DatasetKind::Qa)
        }
        Commands::Captions { input, output } => {
            run_list(&cli.data_root, &config, &input, &output, DatasetKind::Captions)
        }
        Commands::Scan { dir, output, kind } => run_scan(&config, &dir, &output, kind.into()),
        Commands::Check {
            info_file,
            view_index,
        } => check(&config, info_file, view_index),
    }
}

fn run_list(
    data_root: &Path,
    config: &GeneratorConfig,
    input: &Path,
    output: &Path,
    kind: DatasetKind,
) -> Result<()> {
    let entries = import_image_list(input)?;
    log::info!("Loaded {} images from {}", entries.len(), input.display());

    let reader = JsonSceneReader::new(data_root, config);
    let dataset = batch::run_image_list(&reader, config, &entries)?;
    save(&dataset, kind, output)
}

fn run_scan(config: &GeneratorConfig, dir: &Path, output: &Path, kind: DatasetKind) -> Result<()> {
    let views = batch::scan_views(dir, config)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    log::info!("Processed {} views", views.len());

    let dataset = assemble_all(&views);
    save(&dataset, kind, output)
}

fn save(dataset: &Dataset, kind: DatasetKind, output: &Path) -> Result<()> {
    match kind {
        DatasetKind::Qa => export_json(&dataset.qa_pairs, output)?,
        DatasetKind::Captions => export_json(&dataset.captions, output)?,
    }
    log::info!("Saved {} records to {}", dataset.len(kind), output.display());
    Ok(())
}

fn check(config: &GeneratorConfig, info_file: PathBuf, view_index: usize) -> Result<()> {
    let reader = JsonSceneReader::new(PathBuf::new(), config);
    let scene = SceneRef {
        info_path: info_file,
        view_index,
    };
    let (objects, track) = reader.read_view(&scene, config.image_width, config.image_height)?;

    println!("\nCaptions:");
    println!("{}", "-".repeat(50));
    for (i, sentence) in statements::generate(&objects, &track).iter().enumerate() {
        println!("{}. {}", i + 1, sentence);
    }
    println!("{}", "-".repeat(50));
    Ok(())
}
