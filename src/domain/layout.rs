//! Fixed folder and file names of the assembled package layout, plus the
//! path helpers that compose destinations under a target root.

use std::path::{Path, PathBuf};

use crate::domain::ArtifactCoordinates;

pub const META_INF: &str = "META-INF";
pub const MAVEN: &str = "maven";
pub const MULE_ARTIFACT: &str = "mule-artifact";
pub const MULE_SRC: &str = "mule-src";
pub const MULE_TEST: &str = "mule-test";
pub const TARGET: &str = "target";

pub const POM_XML: &str = "pom.xml";
pub const POM_PROPERTIES: &str = "pom.properties";

/// `<target>/META-INF/maven/<groupId>/<artifactId>`, home of the pom
/// descriptors.
pub fn maven_folder(target: &Path, coordinates: &ArtifactCoordinates) -> PathBuf {
    target
        .join(META_INF)
        .join(MAVEN)
        .join(coordinates.group_id())
        .join(coordinates.artifact_id())
}

/// `<target>/META-INF/mule-artifact`, home of the packaging descriptor.
pub fn mule_artifact_folder(target: &Path) -> PathBuf {
    target.join(META_INF).join(MULE_ARTIFACT)
}

/// `<target>/META-INF/mule-src/<artifactId>`, the IDE-importable project
/// mirror.
pub fn mule_src_folder(target: &Path, artifact_id: &str) -> PathBuf {
    target.join(META_INF).join(MULE_SRC).join(artifact_id)
}

/// `<target>/mule-test`, parent of the mirrored test source folder.
pub fn mule_test_folder(target: &Path) -> PathBuf {
    target.join(MULE_TEST)
}
