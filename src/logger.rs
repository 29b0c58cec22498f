//! Logger initialisation for fcgenerator.

/// Initialises `env_logger`: `Debug` level when `verbose`, `Info` otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}
