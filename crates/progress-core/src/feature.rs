use crate::error::{ProgressError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub passes: bool,
}

impl Feature {
    pub fn in_category(&self, name: &str) -> bool {
        self.category.as_deref() == Some(name)
    }
}

// ---------------------------------------------------------------------------
// FeatureList
// ---------------------------------------------------------------------------

/// The ordered feature list for a project, stored on disk as a bare JSON
/// array at `.spec/feature_list.json`. Order is meaningful: it determines
/// which feature is "next".
#[derive(Debug, Clone, Default)]
pub struct FeatureList {
    features: Vec<Feature>,
}

impl FeatureList {
    /// Build a list from records, rejecting duplicate ids up front so the
    /// update path never silently picks the first of two matches.
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(feature.id) {
                return Err(ProgressError::DuplicateId(feature.id));
            }
        }
        Ok(Self { features })
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::feature_list_path(root);
        if !path.exists() {
            return Err(ProgressError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let features: Vec<Feature> =
            serde_json::from_str(&data).map_err(|source| ProgressError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        Self::new(features)
    }

    /// Rewrite the whole document, pretty-printed for manual inspection and
    /// diffing. The write goes through a tempfile-and-rename so a crash
    /// mid-write cannot leave a truncated store behind.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::feature_list_path(root);
        let mut data = serde_json::to_vec_pretty(&self.features)?;
        data.push(b'\n');
        crate::io::atomic_write(&path, &data)
    }

    // ---------------------------------------------------------------------------
    // Mutation and lookup
    // ---------------------------------------------------------------------------

    /// Set the `passes` flag on the feature with the given id, returning the
    /// updated record. The list itself is untouched when the id is unknown.
    pub fn set_passes(&mut self, id: u64, passes: bool) -> Result<&Feature> {
        let feature = self
            .features
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(ProgressError::FeatureNotFound(id))?;
        feature.passes = passes;
        Ok(&*feature)
    }

    /// The first feature in list order not yet passing, if any.
    pub fn next_feature(&self) -> Option<&Feature> {
        self.features.iter().find(|f| !f.passes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn feature(id: u64, category: &str, passes: bool) -> Feature {
        Feature {
            id,
            category: Some(category.to_string()),
            description: format!("feature {id}"),
            passes,
        }
    }

    fn seed(dir: &TempDir, json: &str) {
        std::fs::create_dir_all(dir.path().join(".spec")).unwrap();
        std::fs::write(dir.path().join(".spec/feature_list.json"), json).unwrap();
    }

    #[test]
    fn load_missing_store_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let err = FeatureList::load(dir.path()).unwrap_err();
        assert!(matches!(err, ProgressError::NotInitialized));
    }

    #[test]
    fn load_malformed_store_fails() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "not json at all");
        let err = FeatureList::load(dir.path()).unwrap_err();
        assert!(matches!(err, ProgressError::Malformed { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn load_duplicate_ids_fails_fast() {
        let dir = TempDir::new().unwrap();
        seed(
            &dir,
            r#"[{"id": 1, "description": "a"}, {"id": 1, "description": "b"}]"#,
        );
        let err = FeatureList::load(dir.path()).unwrap_err();
        assert!(matches!(err, ProgressError::DuplicateId(1)));
    }

    #[test]
    fn missing_passes_key_reads_as_false() {
        let dir = TempDir::new().unwrap();
        seed(&dir, r#"[{"id": 1, "category": "functional", "description": "login"}]"#);
        let list = FeatureList::load(dir.path()).unwrap();
        assert!(!list.features()[0].passes);
        assert_eq!(list.next_feature().unwrap().id, 1);
    }

    #[test]
    fn missing_category_reads_as_none() {
        let dir = TempDir::new().unwrap();
        seed(&dir, r#"[{"id": 1, "description": "login", "passes": true}]"#);
        let list = FeatureList::load(dir.path()).unwrap();
        assert!(list.features()[0].category.is_none());
        assert!(!list.features()[0].in_category("functional"));
    }

    #[test]
    fn save_load_round_trip_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let list = FeatureList::new(vec![
            feature(3, "functional", true),
            feature(1, "style", false),
            feature(2, "functional", false),
        ])
        .unwrap();
        list.save(dir.path()).unwrap();

        let loaded = FeatureList::load(dir.path()).unwrap();
        assert_eq!(loaded.features(), list.features());

        // save → load is a fixed point
        loaded.save(dir.path()).unwrap();
        let reloaded = FeatureList::load(dir.path()).unwrap();
        assert_eq!(reloaded.features(), loaded.features());
    }

    #[test]
    fn save_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let list = FeatureList::new(vec![feature(1, "functional", false)]).unwrap();
        list.save(dir.path()).unwrap();
        let data =
            std::fs::read_to_string(dir.path().join(".spec/feature_list.json")).unwrap();
        assert!(data.contains("\n  {"));
        assert!(data.ends_with('\n'));
    }

    #[test]
    fn set_passes_updates_only_the_target() {
        let mut list =
            FeatureList::new(vec![feature(1, "functional", true), feature(2, "style", false)])
                .unwrap();
        let updated = list.set_passes(2, true).unwrap();
        assert_eq!(updated.id, 2);
        assert!(updated.passes);
        assert!(list.features()[0].passes);
        assert!(list.features()[1].passes);
    }

    #[test]
    fn set_passes_unknown_id_leaves_list_unchanged() {
        let mut list = FeatureList::new(vec![feature(1, "functional", false)]).unwrap();
        let before = list.features().to_vec();
        let err = list.set_passes(99, true).unwrap_err();
        assert!(matches!(err, ProgressError::FeatureNotFound(99)));
        assert_eq!(list.features(), &before[..]);
    }

    #[test]
    fn set_passes_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut list =
            FeatureList::new(vec![feature(1, "functional", false), feature(2, "style", false)])
                .unwrap();
        list.set_passes(1, true).unwrap();
        list.save(dir.path()).unwrap();
        let first = std::fs::read(dir.path().join(".spec/feature_list.json")).unwrap();

        list.set_passes(1, true).unwrap();
        list.save(dir.path()).unwrap();
        let second = std::fs::read(dir.path().join(".spec/feature_list.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn next_feature_is_first_non_passing_in_order() {
        let list = FeatureList::new(vec![
            feature(5, "functional", true),
            feature(3, "style", false),
            feature(7, "functional", false),
        ])
        .unwrap();
        assert_eq!(list.next_feature().unwrap().id, 3);
    }

    #[test]
    fn next_feature_none_when_all_pass_or_empty() {
        let all_pass =
            FeatureList::new(vec![feature(1, "functional", true), feature(2, "style", true)])
                .unwrap();
        assert!(all_pass.next_feature().is_none());

        let empty = FeatureList::default();
        assert!(empty.next_feature().is_none());
    }
}
