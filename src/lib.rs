//! fcgenerator turns declarative mod configurations into Farmer's Delight
//! cutting recipes and Beet data pack manifests.
//! Every run regenerates the complete output tree from scratch.

/// Stale output removal
pub mod cleanup;

/// Command-line interface module for the fcgenerator application
pub mod cli;

/// Generator and mod configuration loading
/// Supports JSON and YAML formats (name.json, name.yml, name.yaml)
pub mod config;

/// Fixed identifiers and file names
pub mod constants;

/// Error types and handling for the fcgenerator application
pub mod error;

/// Mod selection by glob pattern
pub mod filter;

/// Generation orchestration
/// Plans, writes and reports the output of every mod and platform
pub mod generator;

/// Logger initialisation
pub mod logger;

/// Beet build and runtime manifests
pub mod manifest;

/// Override records and their resolution
pub mod overrides;

/// Recipe planning per mod and platform
pub mod planner;

/// Target platforms and tool actions
pub mod platform;

/// Cutting recipe documents and builders
pub mod recipe;
