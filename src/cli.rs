//! Command-line interface implementation for fcgenerator.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_CONFIG_DIR;

/// Command-line arguments structure for fcgenerator.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fcgenerator: Farmer's Delight cutting recipe data pack generator",
    long_about = None
)]
pub struct Args {
    /// Directory holding generator_config.json and the mod configurations
    #[arg(value_name = "CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Directory the mod data packs are generated in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Only regenerate mods matching this glob pattern (can be repeated)
    #[arg(short = 'm', long = "mod", value_name = "PATTERN")]
    pub mods: Vec<String>,

    /// Keep stale output directories instead of removing them first
    #[arg(long)]
    pub skip_cleanup: bool,

    /// Report what would be generated or removed without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
