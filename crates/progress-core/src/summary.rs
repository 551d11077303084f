use crate::feature::FeatureList;
use serde::Serialize;

pub const FUNCTIONAL: &str = "functional";
pub const STYLE: &str = "style";

// ---------------------------------------------------------------------------
// CategoryCount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub total: usize,
    pub passing: usize,
}

impl CategoryCount {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passing as f64 / self.total as f64 * 100.0
        }
    }
}

// ---------------------------------------------------------------------------
// ProgressSummary
// ---------------------------------------------------------------------------

/// Aggregate completion statistics for a feature list. Pure data: computing
/// a summary never touches the store or the list it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub passing: usize,
    pub remaining: usize,
    pub percentage: f64,
    pub functional: CategoryCount,
    pub style: CategoryCount,
}

impl ProgressSummary {
    pub fn of(list: &FeatureList) -> Self {
        let features = list.features();
        let total = features.len();
        let passing = features.iter().filter(|f| f.passes).count();

        let mut functional = CategoryCount::default();
        let mut style = CategoryCount::default();
        for feature in features {
            // Unrecognized categories count toward the overall total only.
            let bucket = match feature.category.as_deref() {
                Some(FUNCTIONAL) => &mut functional,
                Some(STYLE) => &mut style,
                _ => continue,
            };
            bucket.total += 1;
            if feature.passes {
                bucket.passing += 1;
            }
        }

        let percentage = if total == 0 {
            0.0
        } else {
            passing as f64 / total as f64 * 100.0
        };

        Self {
            total,
            passing,
            remaining: total - passing,
            percentage,
            functional,
            style,
        }
    }

    /// True only for a non-empty list with nothing left to do. An empty list
    /// has no features defined, which is not the same as "all complete".
    pub fn all_passing(&self) -> bool {
        self.total > 0 && self.remaining == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
