use std::path::{Path, PathBuf};

pub const SPEC_DIR: &str = ".spec";
pub const FEATURE_LIST_FILE: &str = ".spec/feature_list.json";

pub fn feature_list_path(root: &Path) -> PathBuf {
    root.join(FEATURE_LIST_FILE)
}
