//! Domain model: coordinates, packaging kinds, package layout, and errors.

pub mod coordinates;
pub mod error;
pub mod layout;
pub mod packaging;
pub mod validation;

pub use coordinates::ArtifactCoordinates;
pub use error::AppError;
pub use packaging::PackagingKind;
pub use validation::ensure_exists;
