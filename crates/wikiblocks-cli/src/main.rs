use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};
use wikiblocks_config::Config;
use wikiblocks_engine::parsing::parse_html_with_warnings;
use wikiblocks_engine::{File, HttpFetcher, Importer, WikiUrl, read_html_file};

#[derive(Parser)]
#[command(
    name = "wikiblocks",
    version,
    about = "Import Wikipedia pages as annotated text blocks"
)]
struct Cli {
    /// Config file (default: ~/.config/wikiblocks/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the block JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Write the block JSON to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch an article (https://LANGUAGE.wikipedia.org/wiki/TOPIC) and convert it
    Import {
        /// Article URL
        url: String,
    },

    /// Convert a saved article HTML page
    Convert {
        /// HTML file
        file: PathBuf,
    },

    /// Write a config file with the default settings
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let (file, name, config) = match cli.command {
        Command::InitConfig { force } => return init_config(&config_path, force),
        Command::Import { url } => {
            let config = load_config(&config_path)?;
            let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;
            let file = Importer::new(fetcher).import(Some(url.as_str()))?;
            let name = WikiUrl::parse(Some(url.as_str()))?.topic().to_string();
            (file, name, config)
        }
        Command::Convert { file: path } => {
            let config = load_config(&config_path)?;
            let html = read_html_file(&path)?;
            let converted = parse_html_with_warnings(&html);
            if !converted.warnings.is_empty() {
                log::warn!(
                    "{} part(s) of {} could not be converted",
                    converted.warnings.len(),
                    path.display()
                );
            }
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "page".to_string());
            (File::new(converted.blocks), name, config)
        }
    };

    let json = file
        .to_json(cli.pretty || config.pretty)
        .context("Failed to serialize blocks")?;

    match destination(cli.output, config.output_dir.as_deref(), &name) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} block(s) to {}", file.blocks.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_or_default(config_path)?;
    log::debug!("Config: {config:?}");
    Ok(config)
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to replace it)",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Explicit output path first, then `<output_dir>/<name>.json`, else stdout (`None`).
fn destination(output: Option<PathBuf>, output_dir: Option<&Path>, name: &str) -> Option<PathBuf> {
    output.or_else(|| output_dir.map(|dir| dir.join(format!("{}.json", file_safe(name)))))
}

/// Article names may contain path separators (`Honey_badger/subpage`).
fn file_safe(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
