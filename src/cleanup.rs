//! Removal of stale output before a full regeneration.

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::constants::CLEANUP_DIRS;
use crate::error::Error;

/// Outcome of a cleanup pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub failed: usize,
}

/// Removes the known output directories of every mod in `mods`.
///
/// Failures are logged and counted, never returned: one directory that
/// can't be removed must not stop the others. With `dry_run` nothing is
/// removed and each directory is only reported.
pub fn cleanup_old_files<P: AsRef<Path>, S: AsRef<str>>(
    output_root: P,
    mods: &[S],
    dry_run: bool,
) -> CleanupReport {
    info!("Cleaning up old files...");
    let mut report = CleanupReport::default();

    for mod_id in mods {
        let mod_dir = output_root.as_ref().join(mod_id.as_ref());
        for directory in CLEANUP_DIRS {
            let path = mod_dir.join(directory);
            if !path.exists() {
                continue;
            }
            if dry_run {
                info!("Would remove {}/", path.display());
                report.removed += 1;
                continue;
            }
            match fs::remove_dir_all(&path) {
                Ok(()) => {
                    info!("Removed {}/", path.display());
                    report.removed += 1;
                }
                Err(source) => {
                    error!("{}", Error::CleanupError { path, source });
                    report.failed += 1;
                }
            }
        }
    }

    report
}
