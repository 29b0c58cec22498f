//! Beet packaging manifests.

use serde::Serialize;

use crate::config::ModConfig;
use crate::platform::Platform;

/// Data pack section of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPack {
    pub pack_format: u32,
    pub description: String,
    pub load: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipped: Option<bool>,
}

/// A `beet.json` or `beet-build.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub data_pack: DataPack,
}

/// Version string of a generated data pack.
///
/// The platform is only part of the version when the mod targets more than
/// one platform.
pub fn manifest_version(
    minecraft_version: &str,
    data_pack_version: &str,
    platform: Platform,
    platform_count: usize,
) -> String {
    if platform_count > 1 {
        format!("{minecraft_version}-{data_pack_version}-{platform}")
    } else {
        format!("{minecraft_version}-{data_pack_version}")
    }
}

/// Builds the build and runtime manifests of `config` on `platform`.
///
/// Only the build manifest names an output directory and asks for a
/// zipped pack.
pub fn build_manifests(
    config: &ModConfig,
    platform: Platform,
    minecraft_version: &str,
) -> (Manifest, Manifest) {
    let version = manifest_version(
        minecraft_version,
        &config.data_pack_version,
        platform,
        config.platforms.len(),
    );

    let runtime = Manifest {
        id: format!("farmers-cutting-{}", config.id_suffix),
        name: format!("Farmer's Cutting: {}", config.name),
        version,
        output: None,
        data_pack: DataPack {
            pack_format: config.pack_format,
            description: format!("Adds Farmer's Delight cutting recipes for {}", config.name),
            load: vec![".".to_string()],
            zipped: None,
        },
    };

    let mut build = runtime.clone();
    build.output = Some("build".to_string());
    build.data_pack.zipped = Some(true);

    (build, runtime)
}
