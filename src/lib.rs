//! mulepack: assemble the on-disk content layout of deployable Mule
//! artifact packages.
//!
//! Given a project tree and its Maven coordinates, the assembler mirrors
//! the production sources, an IDE-importable copy of the whole project, and
//! the descriptor files into the fixed layout expected inside a Mule
//! package, ready for downstream archiving.

pub mod domain;
pub mod ports;
pub mod services;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use domain::layout::{self, POM_PROPERTIES, POM_XML};
pub use domain::{ArtifactCoordinates, AppError, PackagingKind};
pub use ports::PackagingPolicy;
pub use services::ContentGenerator;

/// Inputs for one package-assembly run.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: PackagingKind,
    /// Read-only project root.
    pub base_folder: PathBuf,
    /// Output root; created if absent.
    pub target_folder: PathBuf,
    /// Also mirror the test source folder.
    pub test_content: bool,
}

/// Machine-readable summary of an assembly run.
#[derive(Debug, Serialize)]
pub struct AssembleReport {
    pub coordinates: ArtifactCoordinates,
    pub packaging: String,
    pub target_folder: String,
    /// Generated locations, relative to the target folder.
    pub generated: Vec<String>,
}

/// Assemble the package content layout under the target folder.
///
/// Prepares the destination folders the generator's validations require
/// (the build host owns the target tree), then runs the full content
/// generation and, when requested, the optional test-content mirror.
pub fn assemble(options: AssembleOptions) -> Result<AssembleReport, AppError> {
    let coordinates =
        ArtifactCoordinates::new(&options.group_id, &options.artifact_id, &options.version)?;
    let packaging = options.packaging;
    let base = &options.base_folder;
    let target = &options.target_folder;

    prepare_target_folders(&coordinates, packaging, base, target)?;

    let generator = ContentGenerator::new(coordinates.clone(), packaging, base, target)?;
    generator.create_content()?;
    if options.test_content {
        generator.create_test_folder_content()?;
    }

    Ok(AssembleReport {
        generated: generated_paths(&coordinates, packaging, base, &options),
        coordinates,
        packaging: packaging.name().to_string(),
        target_folder: target.display().to_string(),
    })
}

/// The generator validates its destination folders rather than creating
/// them; the integration layer owns that preparation.
fn prepare_target_folders(
    coordinates: &ArtifactCoordinates,
    packaging: PackagingKind,
    base: &Path,
    target: &Path,
) -> Result<(), AppError> {
    let source = packaging.source_folder_location(base);
    if let Some(name) = source.file_name() {
        fs::create_dir_all(target.join(name))?;
    }
    fs::create_dir_all(layout::maven_folder(target, coordinates))?;
    fs::create_dir_all(layout::mule_artifact_folder(target))?;
    fs::create_dir_all(layout::mule_src_folder(target, coordinates.artifact_id()))?;
    Ok(())
}

fn generated_paths(
    coordinates: &ArtifactCoordinates,
    packaging: PackagingKind,
    base: &Path,
    options: &AssembleOptions,
) -> Vec<String> {
    let maven = format!(
        "{}/{}/{}/{}",
        layout::META_INF,
        layout::MAVEN,
        coordinates.group_id(),
        coordinates.artifact_id()
    );

    let mut generated = Vec::new();
    if let Some(name) = packaging.source_folder_location(base).file_name() {
        generated.push(format!("{}/", name.to_string_lossy()));
    }
    generated.push(format!("{maven}/{POM_XML}"));
    generated.push(format!("{maven}/{POM_PROPERTIES}"));
    generated.push(format!(
        "{}/{}/{}",
        layout::META_INF,
        layout::MULE_ARTIFACT,
        packaging.descriptor_file_name()
    ));
    generated.push(format!(
        "{}/{}/{}/",
        layout::META_INF,
        layout::MULE_SRC,
        coordinates.artifact_id()
    ));

    let test_source = packaging.test_source_folder_location(base);
    if options.test_content && test_source.exists() {
        if let Some(name) = test_source.file_name() {
            generated.push(format!("{}/{}/", layout::MULE_TEST, name.to_string_lossy()));
        }
    }

    generated
}
