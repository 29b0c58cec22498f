use fcgenerator::config::CustomRecipe;
use fcgenerator::error::Error;
use fcgenerator::overrides::RecipeOverride;
use fcgenerator::platform::Platform;
use fcgenerator::recipe::{
    build_custom_recipe, build_cutting_recipe, build_dye_recipe, Ingredient, RecipeKind,
};
use serde_json::json;

const PLANKS_RECYCLE: [RecipeKind; 4] = [
    RecipeKind::Door,
    RecipeKind::HangingSign,
    RecipeKind::Sign,
    RecipeKind::Trapdoor,
];

const STRIPPING: [RecipeKind; 5] = [
    RecipeKind::Log,
    RecipeKind::Wood,
    RecipeKind::Bark,
    RecipeKind::Stem,
    RecipeKind::Hyphae,
];

fn custom(tool: &str) -> CustomRecipe {
    CustomRecipe {
        ingredient: "#c:glass_panes".to_string(),
        result: "minecraft:glass_pane".to_string(),
        count: 2,
        filename: "glass.json".to_string(),
        tool: tool.to_string(),
    }
}

#[test]
fn test_planks_recycle_recipes() {
    for wood in ["fir", "dead", "jacaranda"] {
        for kind in PLANKS_RECYCLE {
            let recipe = build_cutting_recipe("bop", wood, kind, Platform::Fabric, None);
            let value = serde_json::to_value(&recipe).unwrap();

            assert_eq!(
                value["result"],
                json!([{"item": {"count": 1, "id": format!("bop:{wood}_planks")}}])
            );
            assert_eq!(value["tool"]["action"], "axe_dig");
            assert!(value.get("sound").is_none());
        }
    }
}

#[test]
fn test_stripping_recipes() {
    for kind in STRIPPING {
        let recipe = build_cutting_recipe("bop", "fir", kind, Platform::Neoforge, None);
        let value = serde_json::to_value(&recipe).unwrap();

        assert_eq!(
            value["result"],
            json!([
                {"item": {"count": 1, "id": format!("bop:stripped_fir_{kind}")}},
                {"item": {"count": 1, "id": "farmersdelight:tree_bark"}}
            ])
        );
        assert_eq!(value["sound"], json!({"sound_id": "minecraft:item.axe.strip"}));
        assert_eq!(
            value["tool"],
            json!({"type": "farmersdelight:item_ability", "action": "axe_strip"})
        );
    }
}

#[test]
fn test_full_log_recipe_document() {
    let recipe = build_cutting_recipe("bop", "fir", RecipeKind::Log, Platform::Fabric, None);

    assert_eq!(
        serde_json::to_value(&recipe).unwrap(),
        json!({
            "type": "farmersdelight:cutting",
            "ingredients": [{"item": "bop:fir_log"}],
            "tool": {"fabric:type": "farmersdelight:item_ability", "action": "axe_strip"},
            "result": [
                {"item": {"count": 1, "id": "bop:stripped_fir_log"}},
                {"item": {"count": 1, "id": "farmersdelight:tree_bark"}}
            ],
            "sound": {"sound_id": "minecraft:item.axe.strip"}
        })
    );
}

#[test]
fn test_override_replaces_ingredient() {
    let recipe_override = RecipeOverride {
        ingredient: Some("custom:thing".to_string()),
        ..Default::default()
    };
    let recipe = build_cutting_recipe(
        "minecraft",
        "oak",
        RecipeKind::Log,
        Platform::Fabric,
        Some(&recipe_override),
    );

    assert_eq!(recipe.ingredients, vec![Ingredient::Item("custom:thing".to_string())]);
    assert_eq!(recipe.result[0].item.id, "minecraft:stripped_oak_log");
}

#[test]
fn test_override_replaces_result_and_side_product() {
    let recipe_override = RecipeOverride {
        ingredient: None,
        result: Some("bop:stripped_fir_stem".to_string()),
        side_product: Some("bop:fir_bark".to_string()),
    };
    let recipe = build_cutting_recipe(
        "bop",
        "fir",
        RecipeKind::Wood,
        Platform::Fabric,
        Some(&recipe_override),
    );

    assert_eq!(recipe.ingredients, vec![Ingredient::Item("bop:fir_wood".to_string())]);
    assert_eq!(recipe.result[0].item.id, "bop:stripped_fir_stem");
    assert_eq!(recipe.result[1].item.id, "bop:fir_bark");
}

#[test]
fn test_override_result_ignored_for_planks_recycle() {
    let recipe_override = RecipeOverride {
        result: Some("bop:something_else".to_string()),
        ..Default::default()
    };
    let recipe = build_cutting_recipe(
        "bop",
        "fir",
        RecipeKind::Door,
        Platform::Fabric,
        Some(&recipe_override),
    );

    assert_eq!(recipe.result.len(), 1);
    assert_eq!(recipe.result[0].item.id, "bop:fir_planks");
}

#[test]
fn test_dye_recipe_from_tag() {
    let recipe = build_dye_recipe("bop", "#forge:dyes/red", "red", 3);

    assert_eq!(
        serde_json::to_value(&recipe).unwrap(),
        json!({
            "type": "farmersdelight:cutting",
            "ingredients": [{"tag": "forge:dyes/red"}],
            "tool": {"tag": "c:tools/knife"},
            "result": [{"item": {"count": 3, "id": "minecraft:red_dye"}}]
        })
    );
}

#[test]
fn test_dye_recipe_from_item() {
    let recipe = build_dye_recipe("bop", "rose", "red", 2);

    assert_eq!(recipe.ingredients, vec![Ingredient::Item("bop:rose".to_string())]);
    assert_eq!(recipe.result[0].item.id, "minecraft:red_dye");
    assert_eq!(recipe.result[0].item.count, 2);
}

#[test]
fn test_custom_recipe_knife_ignores_platform() {
    for platform in [Platform::Fabric, Platform::Neoforge] {
        let recipe = build_custom_recipe(&custom("knife"), platform).unwrap();
        assert_eq!(
            serde_json::to_value(&recipe.tool).unwrap(),
            json!({"tag": "c:tools/knife"})
        );
    }
}

#[test]
fn test_custom_recipe_axe_on_neoforge() {
    let recipe = build_custom_recipe(&custom("axe"), Platform::Neoforge).unwrap();

    assert_eq!(
        serde_json::to_value(&recipe).unwrap(),
        json!({
            "type": "farmersdelight:cutting",
            "ingredients": [{"tag": "c:glass_panes"}],
            "tool": {"type": "farmersdelight:item_ability", "action": "axe_dig"},
            "result": [{"item": {"count": 2, "id": "minecraft:glass_pane"}}]
        })
    );
}

#[test]
fn test_custom_recipe_item_ingredient_is_verbatim() {
    let mut spec = custom("pickaxe");
    spec.ingredient = "minecraft:stone".to_string();
    let recipe = build_custom_recipe(&spec, Platform::Fabric).unwrap();

    assert_eq!(recipe.ingredients, vec![Ingredient::Item("minecraft:stone".to_string())]);
    assert_eq!(
        serde_json::to_value(&recipe.tool).unwrap(),
        json!({"fabric:type": "farmersdelight:item_ability", "action": "pickaxe_dig"})
    );
}

#[test]
fn test_custom_recipe_unknown_tool() {
    let result = build_custom_recipe(&custom("shovel"), Platform::Fabric);

    match result {
        Err(Error::UnknownToolError { tool, filename }) => {
            assert_eq!(tool, "shovel");
            assert_eq!(filename, "glass.json");
        }
        _ => panic!("Expected UnknownToolError"),
    }
}
