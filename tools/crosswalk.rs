use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use deposit_crosswalk::application::mets::MetsAssembler;
use deposit_crosswalk::dto::MapDepositRequest;
use deposit_crosswalk::infrastructure::manifest::{StaticRenderer, WorkManifest};
use deposit_crosswalk::use_cases::{ExportWorkUseCase, MapDepositUseCase};
use deposit_crosswalk::value_objects::{DepositDocument, FileMetadataRecord};
use deposit_crosswalk::Config;

#[derive(Parser)]
#[command(about = "Map deposit metadata and export METS packages")]
struct Cli {
    /// TOML config file; CROSSWALK_* environment variables otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map a deposit metadata document to model attributes (JSON)
    Map {
        deposit: PathBuf,

        /// Declared work model (article, dataset, thesis, ...)
        #[arg(long)]
        model: Option<String>,

        /// JSON list of file metadata records
        #[arg(long)]
        files: Option<PathBuf>,
    },
    /// Assemble the METS package for a JSON work manifest
    Mets { manifest: PathBuf },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path).map_err(anyhow::Error::msg)?,
        None => Config::from_env(),
    };
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(cli.config.as_ref())?;
    info!("Configuration loaded and validated");

    match cli.command {
        Command::Map {
            deposit,
            model,
            files,
        } => {
            let metadata: DepositDocument = read_json(&deposit)?;
            let files: Vec<FileMetadataRecord> = match files {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };

            let response = MapDepositUseCase::new(config)
                .execute(MapDepositRequest {
                    model,
                    metadata,
                    files,
                })
                .context("Failed to map deposit metadata")?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Mets { manifest } => {
            let manifest = WorkManifest::from_file(&manifest)
                .with_context(|| format!("Failed to load manifest {:?}", manifest))?;
            let renderer = Arc::new(
                StaticRenderer::from_manifest(&manifest)
                    .context("Failed to parse descriptive documents")?,
            );

            let assembler = MetsAssembler::new(renderer.clone(), renderer, &config)?;
            let xml = ExportWorkUseCase::new(Arc::new(assembler))
                .execute(&manifest)
                .context("Failed to assemble METS package")?;
            println!("{}", xml);
        }
    }

    Ok(())
}
