//! Mod selection by glob pattern.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles the `--mod` patterns into a [`GlobSet`].
///
/// # Errors
/// * `Error::FilterError` if a pattern is not a valid glob
pub fn build_mod_filter<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}

/// Keeps the mods matching `mod_filter`, in their original order.
///
/// An empty filter selects every mod.
pub fn select_mods<'a>(mods: &'a [String], mod_filter: &GlobSet) -> Vec<&'a str> {
    mods.iter()
        .map(String::as_str)
        .filter(|mod_id| {
            let selected = mod_filter.is_empty() || mod_filter.is_match(mod_id);
            if !selected {
                debug!("Skipping mod '{mod_id}': not selected");
            }
            selected
        })
        .collect()
}
