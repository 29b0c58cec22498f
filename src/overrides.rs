//! Override records and their resolution.
//! Overrides replace computed defaults for one wood type, or for one
//! (wood type, recipe kind) pair. When several records match, the first one
//! listed wins and the rest are ignored.

use serde::Deserialize;

use crate::recipe::RecipeKind;

/// A declarative exception to the default recipe plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Override {
    /// Generate `recipe_types` for `wood` instead of the mod-wide list.
    ReplaceRecipeTypes {
        wood: String,
        recipe_types: Vec<RecipeKind>,
    },
    /// Replace individual fields of the recipe for `wood` and `recipe_type`.
    ReplaceSingleRecipe {
        wood: String,
        recipe_type: RecipeKind,
        ingredient: Option<String>,
        result: Option<String>,
        side_product: Option<String>,
    },
}

/// Discriminant of [`Override`] used to select records by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    ReplaceRecipeTypes,
    ReplaceSingleRecipe,
}

/// Field values a record must carry to match. `None` means "don't care".
#[derive(Debug, Default, Clone, Copy)]
pub struct OverrideConditions<'a> {
    pub wood: Option<&'a str>,
    pub recipe_type: Option<RecipeKind>,
}

/// The replaceable fields of a single recipe.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeOverride {
    pub ingredient: Option<String>,
    pub result: Option<String>,
    pub side_product: Option<String>,
}

impl Override {
    pub fn kind(&self) -> OverrideKind {
        match self {
            Override::ReplaceRecipeTypes { .. } => OverrideKind::ReplaceRecipeTypes,
            Override::ReplaceSingleRecipe { .. } => OverrideKind::ReplaceSingleRecipe,
        }
    }

    pub fn wood(&self) -> &str {
        match self {
            Override::ReplaceRecipeTypes { wood, .. } | Override::ReplaceSingleRecipe { wood, .. } => {
                wood
            }
        }
    }

    pub fn recipe_type(&self) -> Option<RecipeKind> {
        match self {
            Override::ReplaceRecipeTypes { .. } => None,
            Override::ReplaceSingleRecipe { recipe_type, .. } => Some(*recipe_type),
        }
    }

    fn satisfies(&self, conditions: &OverrideConditions<'_>) -> bool {
        let wood_matches = conditions.wood.map_or(true, |wood| self.wood() == wood);
        let kind_matches = conditions
            .recipe_type
            .map_or(true, |kind| self.recipe_type() == Some(kind));
        wood_matches && kind_matches
    }
}

/// Returns the first record of type `kind` satisfying every condition.
pub fn find_override<'a>(
    overrides: &'a [Override],
    kind: OverrideKind,
    conditions: OverrideConditions<'_>,
) -> Option<&'a Override> {
    overrides
        .iter()
        .find(|candidate| candidate.kind() == kind && candidate.satisfies(&conditions))
}

/// Projects a record onto the fields a single recipe may replace.
///
/// Records without such fields project to an empty [`RecipeOverride`].
pub fn extract_override_fields(record: Option<&Override>) -> Option<RecipeOverride> {
    let record = record?;
    match record {
        Override::ReplaceSingleRecipe {
            ingredient,
            result,
            side_product,
            ..
        } => Some(RecipeOverride {
            ingredient: ingredient.clone(),
            result: result.clone(),
            side_product: side_product.clone(),
        }),
        Override::ReplaceRecipeTypes { .. } => Some(RecipeOverride::default()),
    }
}

/// Recipe kinds replacing the mod-wide list for `wood`, if overridden.
pub fn recipe_kinds_for<'a>(overrides: &'a [Override], wood: &str) -> Option<&'a [RecipeKind]> {
    let conditions = OverrideConditions {
        wood: Some(wood),
        ..Default::default()
    };
    match find_override(overrides, OverrideKind::ReplaceRecipeTypes, conditions)? {
        Override::ReplaceRecipeTypes { recipe_types, .. } => Some(recipe_types),
        Override::ReplaceSingleRecipe { .. } => None,
    }
}

/// Field overrides for the recipe of `wood` and `kind`, if any.
pub fn single_recipe_override(
    overrides: &[Override],
    wood: &str,
    kind: RecipeKind,
) -> Option<RecipeOverride> {
    let conditions = OverrideConditions {
        wood: Some(wood),
        recipe_type: Some(kind),
    };
    extract_override_fields(find_override(
        overrides,
        OverrideKind::ReplaceSingleRecipe,
        conditions,
    ))
}
