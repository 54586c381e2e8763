use serde::Serialize;

use crate::domain::AppError;

/// The Maven coordinate triple identifying a package uniquely.
///
/// All three fields are validated non-blank at construction and never
/// change for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ArtifactCoordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Result<Self, AppError> {
        validate_coordinate("groupId", group_id)?;
        validate_coordinate("artifactId", artifact_id)?;
        validate_coordinate("version", version)?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn validate_coordinate(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("The {name} must not be null nor empty")));
    }
    Ok(())
}
