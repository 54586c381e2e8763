use std::fmt;
use std::path::{Path, PathBuf};

use crate::ports::PackagingPolicy;

/// The supported Mule packaging kinds.
///
/// Each kind fixes where production and test sources live inside a project
/// and what the packaging descriptor file is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackagingKind {
    MuleApplication,
    MuleDomain,
    MulePolicy,
}

impl PackagingKind {
    /// All supported kinds in order.
    pub const ALL: [PackagingKind; 3] =
        [PackagingKind::MuleApplication, PackagingKind::MuleDomain, PackagingKind::MulePolicy];

    /// The hyphenated packaging name as it appears in a pom.
    pub fn name(&self) -> &'static str {
        match self {
            PackagingKind::MuleApplication => "mule-application",
            PackagingKind::MuleDomain => "mule-domain",
            PackagingKind::MulePolicy => "mule-policy",
        }
    }

    /// Parse a kind from its hyphenated packaging name.
    pub fn from_name(name: &str) -> Option<PackagingKind> {
        match name.to_lowercase().as_str() {
            "mule-application" => Some(PackagingKind::MuleApplication),
            "mule-domain" => Some(PackagingKind::MuleDomain),
            "mule-policy" => Some(PackagingKind::MulePolicy),
            _ => None,
        }
    }
}

impl PackagingPolicy for PackagingKind {
    fn source_folder_location(&self, base_folder: &Path) -> PathBuf {
        let folder = match self {
            PackagingKind::MuleApplication | PackagingKind::MuleDomain => "mule",
            PackagingKind::MulePolicy => "policy",
        };
        base_folder.join("src").join("main").join(folder)
    }

    fn test_source_folder_location(&self, base_folder: &Path) -> PathBuf {
        base_folder.join("src").join("test").join("munit")
    }

    fn descriptor_file_name(&self) -> &str {
        match self {
            PackagingKind::MuleApplication => "mule-artifact.json",
            PackagingKind::MuleDomain => "mule-domain.json",
            PackagingKind::MulePolicy => "mule-policy.json",
        }
    }
}

impl fmt::Display for PackagingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
