//! Build-step CLI around the release output sanitizer.
//!
//! Invoked by the owning build system with the active configuration name, so
//! the destructive paths only run for Release builds. The CI marker and the
//! config file are resolved here and passed into the library explicitly.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use relclean::clear::run_clear;
use relclean::core::gate::CiStatus;
use relclean::exit_codes;
use relclean::io::config::load_config;
use relclean::io::publisher::ToolPublisher;
use relclean::publish::{run_publish, run_ship};
use relclean::logging;

#[derive(Parser)]
#[command(
    name = "relclean",
    version,
    about = "Clears stale Release output and scrubs dev config files after publish"
)]
struct Cli {
    /// Path to the tool configuration file.
    #[arg(long, global = true, default_value = "relclean.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delete the files directly inside each directory before a Release build.
    Clear {
        /// Build configuration name as reported by the build system.
        configuration: String,
        /// Directories whose immediate files should be removed.
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
    /// Publish a project in Release configuration, then scrub dev config files.
    Publish {
        /// Build configuration name as reported by the build system.
        configuration: String,
        /// Project reference passed to the publish tool.
        project: PathBuf,
        /// Directory the publish tool writes artifacts into.
        out_dir: PathBuf,
    },
    /// Publish the working directory's project to the configured output path.
    Ship,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let ci = detect_ci();

    match cli.command {
        Command::Clear {
            configuration,
            dirs,
        } => {
            run_clear(&configuration, &dirs, ci)?;
        }
        Command::Publish {
            configuration,
            project,
            out_dir,
        } => {
            let publisher = ToolPublisher::new(config.publish.clone());
            run_publish(
                &publisher,
                &configuration,
                &project,
                &out_dir,
                &config.dev_suffix,
            )?;
        }
        Command::Ship => {
            let publisher = ToolPublisher::new(config.publish.clone());
            run_ship(
                &publisher,
                Path::new(&config.ship_output_dir),
                &config.dev_suffix,
            )?;
        }
    }
    Ok(())
}

/// Presence of the `CI` variable (any value) marks a CI build.
fn detect_ci() -> CiStatus {
    if std::env::var_os("CI").is_some() {
        CiStatus::Detected
    } else {
        CiStatus::NotDetected
    }
}
