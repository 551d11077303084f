use crate::output::print_json;
use anyhow::Context;
use progress_core::feature::FeatureList;
use std::path::Path;

pub fn run(root: &Path, id: u64, passes: bool, json: bool) -> anyhow::Result<()> {
    let mut list = FeatureList::load(root).context("failed to load feature list")?;

    // Fails before anything is written, so an unknown id leaves the store
    // byte-for-byte intact.
    let updated = list.set_passes(id, passes)?.clone();
    list.save(root).context("failed to save feature list")?;

    if json {
        return print_json(&updated);
    }

    let status = if passes { "passing" } else { "not passing" };
    println!(
        "✓ Updated feature #{} ({}) to {}",
        updated.id, updated.description, status
    );
    Ok(())
}
