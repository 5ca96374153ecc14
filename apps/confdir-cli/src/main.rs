//! Confdir CLI
//!
//! Command-line interface for inspecting and editing configured directories:
//! directories holding a single structured configuration file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use confdir_core::{
    ConfigFormat, ConfiguredDirectory, DEFAULT_CONFIG_FILE_NAME, DirectoryOptions, FsAdapter,
    StdFsAdapter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

mod value;

/// Configuration of a directory edited from the command line: an untyped table.
type TableDir = ConfiguredDirectory<toml::Table>;

/// Confdir - manage directory-backed configuration files
#[derive(Parser)]
#[command(name = "confdir", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Name of the configuration file inside each directory
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE_NAME)]
    file: String,

    /// Configuration file format (toml or json); inferred from the file name by default
    #[arg(long, global = true)]
    format: Option<ConfigFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available confdir commands
#[derive(Subcommand)]
enum Commands {
    /// Create a configured directory, or open it if it already exists
    Init {
        /// Directory to initialize
        dir: PathBuf,
    },

    /// Print the configuration of an existing directory
    Show {
        /// Configured directory
        dir: PathBuf,
    },

    /// Print one top-level configuration value
    Get {
        /// Configured directory
        dir: PathBuf,
        /// Top-level key
        key: String,
    },

    /// Set one top-level configuration value
    ///
    /// VALUE is parsed as a TOML value (`42`, `true`, `[1, 2]`, `"text"`);
    /// anything that does not parse is stored as a plain string.
    Set {
        /// Configured directory
        dir: PathBuf,
        /// Top-level key
        key: String,
        /// New value
        value: String,
    },

    /// Remove one top-level configuration value
    Unset {
        /// Configured directory
        dir: PathBuf,
        /// Top-level key
        key: String,
    },

    /// Exit successfully if PATH is a configured directory
    Check {
        /// Candidate path
        path: PathBuf,
    },

    /// List configured directories directly under PARENT
    Scan {
        /// Directory to scan
        parent: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run_command(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for structured logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("confdir=debug,confdir_core=debug")
    } else {
        EnvFilter::new("confdir=warn,confdir_core=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

impl Cli {
    fn options(&self) -> DirectoryOptions {
        let options = DirectoryOptions::new(self.file.clone());
        match self.format {
            Some(format) => options.with_format(format),
            None => options,
        }
    }

    fn open(&self, fs: Arc<dyn FsAdapter>, dir: &Path, auto_init: bool) -> Result<TableDir> {
        let options = self.options().with_auto_init(auto_init);
        TableDir::open(fs, dir, options)
            .with_context(|| format!("Failed to open configured directory {}", dir.display()))
    }
}

/// Execute the specified command; `Ok(false)` means a negative answer.
fn run_command(cli: &Cli) -> Result<bool> {
    let fs: Arc<dyn FsAdapter> = Arc::new(StdFsAdapter::new());

    match &cli.command {
        Commands::Init { dir } => {
            info!("Initializing {}", dir.display());
            let dir = cli.open(fs, dir, true)?;
            println!("{}", dir.configuration_path().display());
        }
        Commands::Show { dir } => {
            let dir = cli.open(fs, dir, false)?;
            let text = dir
                .format()
                .encode(dir.configuration())
                .context("Failed to encode configuration")?;
            print!("{}", text);
        }
        Commands::Get { dir, key } => {
            let dir = cli.open(fs, dir, false)?;
            let Some(value) = dir.configuration().get(key) else {
                bail!("key not found: {}", key);
            };
            println!("{}", value::display(value));
        }
        Commands::Set { dir, key, value } => {
            let mut dir = cli.open(fs, dir, false)?;
            let parsed = value::parse(value);
            debug!(key = %key, value = ?parsed, "setting value");
            dir.update(|table| table.insert(key.clone(), parsed));
            dir.save(false).context("Failed to save configuration")?;
        }
        Commands::Unset { dir, key } => {
            let mut dir = cli.open(fs, dir, false)?;
            if dir.configuration_mut().remove(key).is_some() {
                dir.mark_dirty();
            } else {
                info!("key not present: {}", key);
            }
            dir.save(false).context("Failed to save configuration")?;
        }
        Commands::Check { path } => {
            let found = TableDir::is_path_to_such_object(fs.as_ref(), path, &cli.file);
            debug!(path = %path.display(), found, "checked path");
            return Ok(found);
        }
        Commands::Scan { parent } => {
            let found = TableDir::discover(fs.as_ref(), parent, &cli.file)
                .with_context(|| format!("Failed to scan {}", parent.display()))?;
            for path in found {
                println!("{}", path.display());
            }
        }
    }

    Ok(true)
}
