//! Filesystem services: tree mirroring, descriptor generation, and the
//! content orchestrator.

pub mod content_generator;
pub mod fs_copy;
pub mod pom_properties;

pub use content_generator::ContentGenerator;
pub use fs_copy::{CopyOptions, copy_file_into, copy_tree};
pub use pom_properties::write_pom_properties;
