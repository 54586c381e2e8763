use std::fs;
use std::path::Path;

use crate::domain::layout::POM_PROPERTIES;
use crate::domain::{ArtifactCoordinates, AppError, ensure_exists};

/// Writes `pom.properties` into `destination_folder`, overwriting any
/// existing file.
///
/// The body is exactly three `key=value` lines: version, groupId,
/// artifactId, in that order, UTF-8 encoded. The folder must already exist.
pub fn write_pom_properties(
    destination_folder: &Path,
    coordinates: &ArtifactCoordinates,
) -> Result<(), AppError> {
    ensure_exists(destination_folder)?;

    let body = format!(
        "version={}\ngroupId={}\nartifactId={}\n",
        coordinates.version(),
        coordinates.group_id(),
        coordinates.artifact_id(),
    );
    fs::write(destination_folder.join(POM_PROPERTIES), body)?;
    Ok(())
}
