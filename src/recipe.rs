//! Cutting recipe documents and the builders that produce them.
//! Builders are pure: they never touch the file system and know nothing
//! about where their output ends up.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::config::CustomRecipe;
use crate::constants::{
    CUTTING_RECIPE_TYPE, DEFAULT_SIDE_PRODUCT, ITEM_ABILITY, KNIFE_TOOL_TAG, STRIPPING_SOUND,
};
use crate::error::{Error, Result};
use crate::overrides::RecipeOverride;
use crate::platform::{Platform, ToolAction};

/// A variant of a wood type that can be processed on a cutting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    Door,
    HangingSign,
    Sign,
    Trapdoor,
    Log,
    Wood,
    Bark,
    Stem,
    Hyphae,
}

/// What cutting a [`RecipeKind`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeCategory {
    /// Cut back into a single plank.
    PlanksRecycle,
    /// Stripped with an axe, dropping bark.
    Stripping,
}

impl RecipeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeKind::Door => "door",
            RecipeKind::HangingSign => "hanging_sign",
            RecipeKind::Sign => "sign",
            RecipeKind::Trapdoor => "trapdoor",
            RecipeKind::Log => "log",
            RecipeKind::Wood => "wood",
            RecipeKind::Bark => "bark",
            RecipeKind::Stem => "stem",
            RecipeKind::Hyphae => "hyphae",
        }
    }

    pub fn category(&self) -> RecipeCategory {
        match self {
            RecipeKind::Door | RecipeKind::HangingSign | RecipeKind::Sign | RecipeKind::Trapdoor => {
                RecipeCategory::PlanksRecycle
            }
            RecipeKind::Log
            | RecipeKind::Wood
            | RecipeKind::Bark
            | RecipeKind::Stem
            | RecipeKind::Hyphae => RecipeCategory::Stripping,
        }
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single input of a cutting recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Item(String),
    Tag(String),
}

impl Ingredient {
    /// Parses an ingredient reference where a leading `#` marks a tag.
    ///
    /// Item references are prefixed with `namespace` when one is given and
    /// taken verbatim otherwise.
    pub fn parse(reference: &str, namespace: Option<&str>) -> Self {
        match reference.strip_prefix('#') {
            Some(tag) => Ingredient::Tag(tag.to_string()),
            None => match namespace {
                Some(namespace) => Ingredient::Item(format!("{namespace}:{reference}")),
                None => Ingredient::Item(reference.to_string()),
            },
        }
    }
}

/// Tool requirement of a cutting recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// Any item in the given tag.
    Tag(String),
    /// Any item able to perform `action`, encoded the way `platform` expects.
    Ability {
        platform: Platform,
        action: ToolAction,
    },
}

impl Tool {
    pub fn knife() -> Self {
        Tool::Tag(KNIFE_TOOL_TAG.to_string())
    }

    pub fn ability(platform: Platform, action: ToolAction) -> Self {
        Tool::Ability { platform, action }
    }
}

impl Serialize for Tool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Tool::Tag(tag) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("tag", tag)?;
                map.end()
            }
            Tool::Ability { platform, action } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(platform.type_key(), ITEM_ABILITY)?;
                map.serialize_entry("action", action.as_str())?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    pub count: u32,
    pub id: String,
}

/// One entry of a recipe's `result` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeResult {
    pub item: ItemStack,
}

impl RecipeResult {
    pub fn new<S: Into<String>>(id: S, count: u32) -> Self {
        Self {
            item: ItemStack {
                count,
                id: id.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sound {
    pub sound_id: String,
}

/// A `farmersdelight:cutting` recipe document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuttingRecipe {
    #[serde(rename = "type")]
    pub recipe_type: &'static str,
    pub ingredients: Vec<Ingredient>,
    pub tool: Tool,
    pub result: Vec<RecipeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<Sound>,
}

impl CuttingRecipe {
    fn new(ingredient: Ingredient, tool: Tool, result: Vec<RecipeResult>) -> Self {
        Self {
            recipe_type: CUTTING_RECIPE_TYPE,
            ingredients: vec![ingredient],
            tool,
            result,
            sound: None,
        }
    }
}

/// Builds the cutting recipe for one variant of a wood type.
///
/// Fields present on `recipe_override` replace the computed defaults verbatim.
pub fn build_cutting_recipe(
    namespace: &str,
    wood: &str,
    kind: RecipeKind,
    platform: Platform,
    recipe_override: Option<&RecipeOverride>,
) -> CuttingRecipe {
    let ingredient = recipe_override
        .and_then(|o| o.ingredient.clone())
        .unwrap_or_else(|| format!("{namespace}:{wood}_{kind}"));
    let ingredient = Ingredient::Item(ingredient);

    match kind.category() {
        RecipeCategory::PlanksRecycle => CuttingRecipe::new(
            ingredient,
            Tool::ability(platform, ToolAction::AxeDig),
            vec![RecipeResult::new(format!("{namespace}:{wood}_planks"), 1)],
        ),
        RecipeCategory::Stripping => {
            let stripped = recipe_override
                .and_then(|o| o.result.clone())
                .unwrap_or_else(|| format!("{namespace}:stripped_{wood}_{kind}"));
            let side_product = recipe_override
                .and_then(|o| o.side_product.clone())
                .unwrap_or_else(|| DEFAULT_SIDE_PRODUCT.to_string());

            let mut recipe = CuttingRecipe::new(
                ingredient,
                Tool::ability(platform, ToolAction::AxeStrip),
                vec![RecipeResult::new(stripped, 1), RecipeResult::new(side_product, 1)],
            );
            recipe.sound = Some(Sound {
                sound_id: STRIPPING_SOUND.to_string(),
            });
            recipe
        }
    }
}

/// Builds a recipe cutting `input` into `count` dyes of `color`.
///
/// A `#`-prefixed input is a tag; anything else is an item in `namespace`.
/// The knife requirement is the same on every platform.
pub fn build_dye_recipe(namespace: &str, input: &str, color: &str, count: u32) -> CuttingRecipe {
    CuttingRecipe::new(
        Ingredient::parse(input, Some(namespace)),
        Tool::knife(),
        vec![RecipeResult::new(format!("minecraft:{color}_dye"), count)],
    )
}

/// Builds a hand-written recipe from a mod configuration.
///
/// # Errors
/// * `Error::UnknownToolError` if the tool is neither `knife` nor a known
///   tool action selector
pub fn build_custom_recipe(spec: &CustomRecipe, platform: Platform) -> Result<CuttingRecipe> {
    let tool = resolve_tool(&spec.tool, platform).ok_or_else(|| Error::UnknownToolError {
        tool: spec.tool.clone(),
        filename: spec.filename.clone(),
    })?;

    Ok(CuttingRecipe::new(
        Ingredient::parse(&spec.ingredient, None),
        tool,
        vec![RecipeResult::new(spec.result.as_str(), spec.count)],
    ))
}

fn resolve_tool(selector: &str, platform: Platform) -> Option<Tool> {
    if selector == "knife" {
        return Some(Tool::knife());
    }
    ToolAction::from_selector(selector).map(|action| Tool::ability(platform, action))
}
