//! Common constants used throughout fcgenerator.

/// Recipe type tag carried by every generated recipe
pub const CUTTING_RECIPE_TYPE: &str = "farmersdelight:cutting";

/// Capability marker of platform item-ability tool requirements
pub const ITEM_ABILITY: &str = "farmersdelight:item_ability";

/// Tool tag required by dye recipes and `knife` custom recipes
pub const KNIFE_TOOL_TAG: &str = "c:tools/knife";

/// Sound played by stripping recipes
pub const STRIPPING_SOUND: &str = "minecraft:item.axe.strip";

/// Side product of stripping recipes unless overridden
pub const DEFAULT_SIDE_PRODUCT: &str = "farmersdelight:tree_bark";

/// Directory under the data pack namespace holding recipes
pub const RECIPE_DIR: &str = "recipe";

/// Stale directories removed from each mod before regeneration
pub const CLEANUP_DIRS: [&str; 4] = ["fabric", "neoforge", "forge", "data"];

/// Default directory holding the generator and mod configuration files
pub const DEFAULT_CONFIG_DIR: &str = "fcgenerator";

/// Base name of the top-level generator configuration file
pub const GENERATOR_CONFIG: &str = "generator_config";

/// Supported configuration file extensions, in lookup order
pub const CONFIG_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// Manifest consumed by `beet build`
pub const BUILD_MANIFEST: &str = "beet-build.json";

/// Manifest consumed by `beet` during development
pub const RUNTIME_MANIFEST: &str = "beet.json";

/// Indentation of generated recipe documents
pub const RECIPE_INDENT: usize = 2;

/// Indentation of generated manifests
pub const MANIFEST_INDENT: usize = 4;
