use std::path::{Path, PathBuf};

/// Packaging-type policy consumed by the content generator.
///
/// A policy maps a project root to its production and test source folders
/// and names the packaging descriptor file. It is selected once per
/// packaging kind and queried on demand; it owns no state.
pub trait PackagingPolicy {
    /// Location of the primary source folder inside `base_folder`.
    fn source_folder_location(&self, base_folder: &Path) -> PathBuf;

    /// Location of the test source folder inside `base_folder`.
    fn test_source_folder_location(&self, base_folder: &Path) -> PathBuf;

    /// Name of the packaging-specific descriptor file.
    fn descriptor_file_name(&self) -> &str;
}
