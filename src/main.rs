//! fcgenerator's main application entry point.
//! Handles command-line argument parsing and hands the loaded
//! configuration over to the generator.

use fcgenerator::{
    cli::{get_args, Args},
    config::load_generator_config,
    error::{default_error_handler, Result},
    filter::build_mod_filter,
    generator::{Generator, Summary},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(summary) => {
            if summary.has_failures() {
                log::warn!("Generation finished with errors: {summary}.");
            } else {
                log::info!("Generation completed: {summary}.");
            }
        }
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<Summary>` - Tally of the run, or the error that prevented it
///
/// # Flow
/// 1. Compiles the mod filter
/// 2. Loads the generator configuration
/// 3. Cleans up and regenerates every selected mod
fn run(args: Args) -> Result<Summary> {
    let filter = build_mod_filter(&args.mods)?;
    let generator_config = load_generator_config(&args.config_dir)?;

    let generator = Generator::new(&args.config_dir, &args.output_dir, args.dry_run);
    Ok(generator.generate(&generator_config, &filter, args.skip_cleanup))
}
