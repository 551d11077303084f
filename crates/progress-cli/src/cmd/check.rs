use crate::output::print_json;
use anyhow::Context;
use progress_core::{feature::FeatureList, summary::ProgressSummary};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let list = FeatureList::load(root).context("failed to load feature list")?;
    let summary = ProgressSummary::of(&list);
    let next = list.next_feature();

    if json {
        return print_json(&serde_json::json!({
            "summary": summary,
            "next_feature": next,
        }));
    }

    println!("\n=== Development Progress ===\n");
    println!("Total Features: {}", summary.total);
    println!("✓ Completed: {} ({:.0}%)", summary.passing, summary.percentage);
    println!(
        "○ Remaining: {} ({:.0}%)\n",
        summary.remaining,
        100.0 - summary.percentage
    );

    println!("Category Breakdown:");
    println!(
        "  Functional: {}/{} ({:.0}%)",
        summary.functional.passing,
        summary.functional.total,
        summary.functional.percentage()
    );
    println!(
        "  Style: {}/{} ({:.0}%)",
        summary.style.passing,
        summary.style.total,
        summary.style.percentage()
    );

    if let Some(feature) = next {
        println!("\nNext Feature:");
        println!("  ID: {}", feature.id);
        println!("  Category: {}", feature.category.as_deref().unwrap_or("-"));
        println!("  Description: {}", feature.description);
    }

    // An empty list is "nothing defined yet", not "all done".
    if summary.total == 0 {
        println!("\nNo features defined. Run /start-project to generate a feature list.");
    } else if summary.all_passing() {
        println!("\n🎉 Project complete! All features verified.");
    } else if summary.passing == 0 {
        println!("\nUse /continue to start implementing features");
    } else {
        println!("\nUse /continue to continue development");
    }

    Ok(())
}
