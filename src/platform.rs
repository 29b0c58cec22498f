//! Target platforms and the tool actions they encode.

use serde::Deserialize;
use std::fmt;

/// A mod loader ecosystem the data pack is generated for.
///
/// Platforms only differ in how an item-ability tool requirement is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Fabric,
    Neoforge,
}

impl Platform {
    /// Platform used when a mod configuration declares none
    pub const DEFAULT: Platform = Platform::Fabric;

    /// Name used in output paths and version strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Fabric => "fabric",
            Platform::Neoforge => "neoforge",
        }
    }

    /// Key holding the capability marker in an item-ability requirement.
    pub fn type_key(&self) -> &'static str {
        match self {
            Platform::Fabric => "fabric:type",
            Platform::Neoforge => "type",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour a tool must support to perform a cutting recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    AxeDig,
    AxeStrip,
    PickaxeDig,
}

impl ToolAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolAction::AxeDig => "axe_dig",
            ToolAction::AxeStrip => "axe_strip",
            ToolAction::PickaxeDig => "pickaxe_dig",
        }
    }

    /// Looks up the action behind a tool selector used in custom recipes.
    ///
    /// Returns `None` for anything other than `axe`, `axe_strip` or `pickaxe`.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "axe" => Some(ToolAction::AxeDig),
            "axe_strip" => Some(ToolAction::AxeStrip),
            "pickaxe" => Some(ToolAction::PickaxeDig),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_type_keys() {
        assert_eq!(Platform::Fabric.type_key(), "fabric:type");
        assert_eq!(Platform::Neoforge.type_key(), "type");
    }

    #[test]
    fn test_platform_deserialize() {
        let platforms: Vec<Platform> =
            serde_json::from_str(r#"["fabric", "neoforge"]"#).unwrap();
        assert_eq!(platforms, vec![Platform::Fabric, Platform::Neoforge]);
        assert!(serde_json::from_str::<Platform>(r#""forge""#).is_err());
    }

    #[test]
    fn test_tool_action_from_selector() {
        assert_eq!(ToolAction::from_selector("axe"), Some(ToolAction::AxeDig));
        assert_eq!(ToolAction::from_selector("axe_strip"), Some(ToolAction::AxeStrip));
        assert_eq!(ToolAction::from_selector("pickaxe"), Some(ToolAction::PickaxeDig));
        assert_eq!(ToolAction::from_selector("knife"), None);
        assert_eq!(ToolAction::from_selector("shovel"), None);
    }
}
