//! Configuration handling for fcgenerator.
//! This module loads the top-level generator configuration and the
//! per-mod configurations it lists. Both JSON and YAML are supported
//! (`name.json`, `name.yml`, `name.yaml`).

use crate::constants::{CONFIG_EXTENSIONS, GENERATOR_CONFIG};
use crate::error::{Error, Result};
use crate::overrides::Override;
use crate::platform::Platform;
use crate::recipe::RecipeKind;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration listing the mods to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub minecraft_version: String,
    pub mods: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WoodRecipes {
    pub woods: Vec<String>,
    pub types: Vec<RecipeKind>,
}

/// A dye recipe; `input` is an item of the mod or a `#`-prefixed tag.
#[derive(Debug, Clone, Deserialize)]
pub struct DyeRecipe {
    pub input: String,
    pub color: String,
    pub count: u32,
}

/// A hand-written recipe that does not follow the wood patterns.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRecipe {
    pub ingredient: String,
    pub result: String,
    pub count: u32,
    pub filename: String,
    /// `knife`, `axe`, `axe_strip` or `pickaxe`. Checked when the recipe is built.
    pub tool: String,
}

/// Configuration of a single mod.
#[derive(Debug, Clone, Deserialize)]
pub struct ModConfig {
    pub namespace: String,
    pub name: String,
    pub id_suffix: String,
    pub data_pack_version: String,
    pub pack_format: u32,
    pub wood_recipes: WoodRecipes,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub dye_recipes: Vec<DyeRecipe>,
    #[serde(default)]
    pub overrides: Vec<Override>,
    #[serde(default)]
    pub custom_recipes: Vec<CustomRecipe>,
    #[serde(default)]
    pub enable_logging: bool,
}

fn default_platforms() -> Vec<Platform> {
    vec![Platform::DEFAULT]
}

impl ModConfig {
    /// Multi-platform mods get one output tree per platform.
    pub fn is_multi_platform(&self) -> bool {
        self.platforms.len() > 1
    }
}

/// Finds the configuration file `base_name` in `config_dir`, trying every
/// supported extension in order.
///
/// # Errors
/// * `Error::ConfigNotFoundError` if no candidate exists
pub fn find_config_file<P: AsRef<Path>>(config_dir: P, base_name: &str) -> Result<PathBuf> {
    let config_dir = config_dir.as_ref();
    for extension in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("{base_name}.{extension}"));
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(config_path);
        }
    }

    Err(Error::ConfigNotFoundError {
        dir: config_dir.join(base_name),
        tried: CONFIG_EXTENSIONS.join(", "),
    })
}

/// Reads and deserializes a configuration file, choosing the format from
/// its extension.
///
/// # Errors
/// * `Error::IoError` if the file can't be read
/// * `Error::ConfigParseError` if the content is malformed, misses a
///   required field or holds an unknown value
pub fn parse_config_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| Error::ConfigParseError {
        path: path.to_path_buf(),
        reason,
    })
}

/// Loads the generator configuration from `config_dir`.
pub fn load_generator_config<P: AsRef<Path>>(config_dir: P) -> Result<GeneratorConfig> {
    let path = find_config_file(config_dir, GENERATOR_CONFIG)?;
    parse_config_file(&path)
}

/// Loads the configuration of mod `mod_id` from `config_dir`.
pub fn load_mod_config<P: AsRef<Path>>(config_dir: P, mod_id: &str) -> Result<ModConfig> {
    let path = find_config_file(config_dir, mod_id)?;
    parse_config_file(&path)
}
