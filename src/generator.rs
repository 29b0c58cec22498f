//! Generation orchestration.
//! Loads each mod configuration, plans its recipes and manifests per
//! platform and writes them. Failures are reported and skipped at the
//! narrowest scope possible: a file, a platform, or a mod. Nothing short of
//! a broken generator configuration stops the whole run.

use globset::GlobSet;
use log::{debug, error, info, log, warn, Level};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cleanup::{cleanup_old_files, CleanupReport};
use crate::config::{load_mod_config, GeneratorConfig, ModConfig};
use crate::constants::{BUILD_MANIFEST, MANIFEST_INDENT, RECIPE_INDENT, RUNTIME_MANIFEST};
use crate::error::{Error, Result};
use crate::filter::select_mods;
use crate::manifest::build_manifests;
use crate::planner::{plan_recipes, OutputLayout};
use crate::platform::Platform;

/// Tally of a generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files_written: usize,
    pub files_failed: usize,
    pub dirs_removed: usize,
    pub dirs_failed: usize,
    pub mods_skipped: usize,
    pub platforms_skipped: usize,
    /// Counts describe what would have happened; nothing touched the disk.
    pub dry_run: bool,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.files_failed + self.dirs_failed + self.mods_skipped + self.platforms_skipped > 0
    }

    fn record_cleanup(&mut self, report: CleanupReport) {
        self.dirs_removed += report.removed;
        self.dirs_failed += report.failed;
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (written, removed) = if self.dry_run {
            ("would be written", "would be removed")
        } else {
            ("written", "removed")
        };
        write!(
            f,
            "{} files {written}, {} failed; {} directories {removed}, {} failed; {} mods and {} platforms skipped",
            self.files_written,
            self.files_failed,
            self.dirs_removed,
            self.dirs_failed,
            self.mods_skipped,
            self.platforms_skipped
        )
    }
}

/// Serializes `document` as JSON indented by `indent` spaces.
pub fn to_pretty_json<T: Serialize>(document: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

pub struct Generator {
    config_dir: PathBuf,
    output_root: PathBuf,
    dry_run: bool,
}

impl Generator {
    /// Creates a generator reading mod configurations from `config_dir` and
    /// writing below `output_root`. With `dry_run` nothing is written or removed.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(config_dir: P, output_root: Q, dry_run: bool) -> Self {
        Self {
            config_dir: config_dir.into(),
            output_root: output_root.into(),
            dry_run,
        }
    }

    /// Regenerates every mod of `generator_config` selected by `filter`.
    ///
    /// # Flow
    /// 1. Removes stale output of the selected mods unless `skip_cleanup`
    /// 2. Processes each selected mod in the configured order
    pub fn generate(
        &self,
        generator_config: &GeneratorConfig,
        filter: &GlobSet,
        skip_cleanup: bool,
    ) -> Summary {
        let mut summary = Summary {
            dry_run: self.dry_run,
            ..Default::default()
        };
        let mods = select_mods(&generator_config.mods, filter);

        if skip_cleanup {
            debug!("Skipping cleanup of old files");
        } else {
            summary.record_cleanup(cleanup_old_files(&self.output_root, &mods, self.dry_run));
        }

        for mod_id in mods {
            self.process_mod(mod_id, &generator_config.minecraft_version, &mut summary);
        }

        summary
    }

    /// Loads and generates a single mod on each of its platforms.
    ///
    /// A mod whose configuration can't be loaded is skipped. A platform
    /// whose recipes can't be planned or whose directories can't be created
    /// is skipped without affecting the other platforms.
    pub fn process_mod(&self, mod_id: &str, minecraft_version: &str, summary: &mut Summary) {
        let config = match load_mod_config(&self.config_dir, mod_id) {
            Ok(config) => config,
            Err(e) => {
                error!("Skipping mod '{mod_id}': {e}");
                summary.mods_skipped += 1;
                return;
            }
        };

        info!("Generating '{}' ({})", config.name, mod_id);
        if config.platforms.is_empty() {
            warn!("Mod '{mod_id}' declares no platforms; nothing to generate");
        }

        for &platform in &config.platforms {
            if let Err(e) = self.process_platform(&config, platform, minecraft_version, summary) {
                error!("Error processing platform {platform} of mod '{mod_id}': {e}");
                summary.platforms_skipped += 1;
            }
        }
    }

    /// Writes all recipes and both manifests of `config` on `platform`.
    ///
    /// # Errors
    /// * `Error::UnknownToolError` if a custom recipe can't be built
    /// * `Error::IoError` if the recipe directory can't be created
    ///
    /// Failures to write individual files are counted in `summary` instead.
    pub fn process_platform(
        &self,
        config: &ModConfig,
        platform: Platform,
        minecraft_version: &str,
        summary: &mut Summary,
    ) -> Result<()> {
        let layout = OutputLayout::new(&self.output_root, config, platform);
        let plan = plan_recipes(config, platform, &layout.recipe_dir)?;
        debug!("Planned {} recipes for {platform}", plan.len());

        if !self.dry_run {
            fs::create_dir_all(&layout.recipe_dir)?;
        }

        let level = if config.enable_logging { Level::Info } else { Level::Debug };

        for (path, recipe) in &plan {
            self.emit(path, recipe, RECIPE_INDENT, level, summary);
        }

        let (build, runtime) = build_manifests(config, platform, minecraft_version);
        let build_path = layout.base_dir.join(BUILD_MANIFEST);
        if !self.emit(&build_path, &build, MANIFEST_INDENT, level, summary) {
            error!("Error writing {BUILD_MANIFEST} for platform {platform}");
            return Ok(());
        }
        let runtime_path = layout.base_dir.join(RUNTIME_MANIFEST);
        if !self.emit(&runtime_path, &runtime, MANIFEST_INDENT, level, summary) {
            error!("Error writing {RUNTIME_MANIFEST} for platform {platform}");
        }

        Ok(())
    }

    // Returns whether the document was written, logging and counting the outcome.
    fn emit<T: Serialize>(
        &self,
        path: &Path,
        document: &T,
        indent: usize,
        level: Level,
        summary: &mut Summary,
    ) -> bool {
        if self.dry_run {
            log!(level, "Would generate: {}", path.display());
            summary.files_written += 1;
            return true;
        }

        match write_document(path, document, indent) {
            Ok(()) => {
                log!(level, "Generated: {}", path.display());
                summary.files_written += 1;
                true
            }
            Err(e) => {
                error!("{e}");
                summary.files_failed += 1;
                false
            }
        }
    }
}

fn write_document<T: Serialize>(path: &Path, document: &T, indent: usize) -> Result<()> {
    let content = to_pretty_json(document, indent)?;
    fs::write(path, content).map_err(|source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    })
}
