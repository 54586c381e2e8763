//! Orchestrates the assembly of a package's on-disk content layout.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::layout::{self, POM_XML, TARGET};
use crate::domain::{ArtifactCoordinates, AppError, ensure_exists};
use crate::ports::PackagingPolicy;
use crate::services::fs_copy::{CopyOptions, copy_file_into, copy_tree};
use crate::services::pom_properties::write_pom_properties;

/// Knows how to generate the required content for each of the mandatory
/// folders of the package.
///
/// One instance serves a single package-assembly run: it reads from the
/// project base folder and writes under the target folder, both of which
/// must exist for the instance's lifetime. Operations are synchronous and
/// non-transactional; a failed copy may leave a partial tree behind.
pub struct ContentGenerator<P: PackagingPolicy> {
    coordinates: ArtifactCoordinates,
    packaging: P,
    base_folder: PathBuf,
    target_folder: PathBuf,
}

impl<P: PackagingPolicy> ContentGenerator<P> {
    /// Creates a generator after validating its whole configuration, so
    /// that every later operation can assume valid coordinates and existing
    /// roots.
    pub fn new(
        coordinates: ArtifactCoordinates,
        packaging: P,
        base_folder: &Path,
        target_folder: &Path,
    ) -> Result<Self, AppError> {
        ensure_exists(base_folder)?;
        ensure_exists(target_folder)?;

        Ok(Self {
            coordinates,
            packaging,
            base_folder: base_folder.to_path_buf(),
            target_folder: target_folder.to_path_buf(),
        })
    }

    /// Creates all the package content in the required folders.
    pub fn create_content(&self) -> Result<(), AppError> {
        self.create_src_folder_content()?;
        self.create_meta_inf_mule_source_folder_content()?;
        self.create_descriptors()?;
        Ok(())
    }

    /// Mirrors the productive source folder to the target root. The folder
    /// name depends on the packaging kind.
    pub fn create_src_folder_content(&self) -> Result<(), AppError> {
        let origin = self.packaging.source_folder_location(&self.base_folder);
        let destination = self.target_folder.join(folder_name(&origin)?);

        copy_tree(&origin, &destination, &HashSet::new(), CopyOptions::default())
    }

    /// Mirrors the test source folder under `mule-test/`. Test sources are
    /// optional, so an absent origin produces no content rather than an
    /// error.
    pub fn create_test_folder_content(&self) -> Result<(), AppError> {
        let origin = self.packaging.test_source_folder_location(&self.base_folder);
        let destination =
            layout::mule_test_folder(&self.target_folder).join(folder_name(&origin)?);

        copy_tree(&origin, &destination, &HashSet::new(), CopyOptions::relaxed())
    }

    /// Mirrors the whole project under `META-INF/mule-src/<artifactId>` for
    /// IDE import, excluding the project's own `target` output so previous
    /// runs are not copied back into the package.
    pub fn create_meta_inf_mule_source_folder_content(&self) -> Result<(), AppError> {
        let destination =
            layout::mule_src_folder(&self.target_folder, self.coordinates.artifact_id());

        let exclusions: HashSet<PathBuf> =
            [self.base_folder.join(TARGET)].into_iter().collect();

        copy_tree(&self.base_folder, &destination, &exclusions, CopyOptions::default())
    }

    /// Places the descriptor files: pom.xml, pom.properties, and the
    /// packaging descriptor named by the packaging kind.
    pub fn create_descriptors(&self) -> Result<(), AppError> {
        self.copy_pom_file()?;
        self.create_pom_properties()?;
        self.copy_descriptor_file()?;
        Ok(())
    }

    /// Generates `pom.properties` in the maven descriptor folder.
    pub fn create_pom_properties(&self) -> Result<(), AppError> {
        let destination = layout::maven_folder(&self.target_folder, &self.coordinates);
        write_pom_properties(&destination, &self.coordinates)
    }

    fn copy_pom_file(&self) -> Result<(), AppError> {
        let origin = self.base_folder.join(POM_XML);
        let destination = layout::maven_folder(&self.target_folder, &self.coordinates);

        copy_file_into(&origin, &destination)
    }

    fn copy_descriptor_file(&self) -> Result<(), AppError> {
        let origin = self.base_folder.join(self.packaging.descriptor_file_name());
        let destination = layout::mule_artifact_folder(&self.target_folder);

        copy_file_into(&origin, &destination)
    }
}

fn folder_name(path: &Path) -> Result<&std::ffi::OsStr, AppError> {
    path.file_name()
        .ok_or_else(|| AppError::config_error(format!("Not a folder: {}", path.display())))
}
