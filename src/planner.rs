//! Recipe planning: decides which recipe documents a mod needs on a
//! platform and where each one goes. Planning is pure; writing the plan
//! to disk is the generator's job.

use indexmap::IndexMap;
use log::warn;
use std::path::{Path, PathBuf};

use crate::config::ModConfig;
use crate::constants::RECIPE_DIR;
use crate::error::Result;
use crate::overrides::{recipe_kinds_for, single_recipe_override};
use crate::platform::Platform;
use crate::recipe::{
    build_custom_recipe, build_cutting_recipe, build_dye_recipe, CuttingRecipe, RecipeKind,
};

/// Recipe documents keyed by output path, in generation order.
pub type RecipePlan = IndexMap<PathBuf, CuttingRecipe>;

/// Where the output of one mod on one platform is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Holds the manifests; the data pack root.
    pub base_dir: PathBuf,
    /// Holds the recipe documents.
    pub recipe_dir: PathBuf,
}

impl OutputLayout {
    /// `{root}/{namespace}[/{platform}]/data/fc{id_suffix}/recipe`, with the
    /// platform level only present for multi-platform mods.
    pub fn new<P: AsRef<Path>>(output_root: P, config: &ModConfig, platform: Platform) -> Self {
        let mut base_dir = output_root.as_ref().join(&config.namespace);
        if config.is_multi_platform() {
            base_dir.push(platform.as_str());
        }
        let recipe_dir = base_dir
            .join("data")
            .join(format!("fc{}", config.id_suffix))
            .join(RECIPE_DIR);

        Self {
            base_dir,
            recipe_dir,
        }
    }
}

/// File name of a dye recipe.
pub fn dye_recipe_filename(input: &str, color: &str) -> String {
    if input.starts_with('#') {
        format!("{color}_dye_from_tag.json")
    } else {
        format!("{input}.json")
    }
}

/// Plans every recipe of `config` on `platform`, placing them in `recipe_dir`.
///
/// Wood recipes come first (woods and kinds in declaration order), then dye
/// recipes, then custom recipes.
///
/// # Errors
/// * `Error::UnknownToolError` if a custom recipe names an unknown tool
pub fn plan_recipes(config: &ModConfig, platform: Platform, recipe_dir: &Path) -> Result<RecipePlan> {
    let mut plan = RecipePlan::new();

    for wood in &config.wood_recipes.woods {
        let kinds = recipe_kinds_for(&config.overrides, wood)
            .unwrap_or(config.wood_recipes.types.as_slice());
        for &kind in kinds {
            let recipe = plan_wood_recipe(config, wood, kind, platform);
            insert(&mut plan, recipe_dir.join(format!("{wood}_{kind}.json")), recipe);
        }
    }

    for dye in &config.dye_recipes {
        let recipe = build_dye_recipe(&config.namespace, &dye.input, &dye.color, dye.count);
        insert(&mut plan, recipe_dir.join(dye_recipe_filename(&dye.input, &dye.color)), recipe);
    }

    for custom in &config.custom_recipes {
        let recipe = build_custom_recipe(custom, platform)?;
        insert(&mut plan, recipe_dir.join(&custom.filename), recipe);
    }

    Ok(plan)
}

fn plan_wood_recipe(
    config: &ModConfig,
    wood: &str,
    kind: RecipeKind,
    platform: Platform,
) -> CuttingRecipe {
    let recipe_override = single_recipe_override(&config.overrides, wood, kind);
    build_cutting_recipe(&config.namespace, wood, kind, platform, recipe_override.as_ref())
}

// A later recipe for the same path replaces the earlier one in place.
fn insert(plan: &mut RecipePlan, path: PathBuf, recipe: CuttingRecipe) {
    if plan.contains_key(&path) {
        warn!("Recipe '{}' is generated more than once; keeping the last one", path.display());
    }
    plan.insert(path, recipe);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dye_recipe_filename() {
        assert_eq!(dye_recipe_filename("#c:dyes/red", "red"), "red_dye_from_tag.json");
        assert_eq!(dye_recipe_filename("rose", "red"), "rose.json");
    }
}
