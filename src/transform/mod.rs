// src/transform/mod.rs
//
// AST transformations: interface declarations in, mock classes and the
// registration unit out.

pub mod generator;
pub mod identifiers;
pub mod registry;

pub use generator::{MockConfig, MockGenerator};
pub use registry::{RegistryEntry, generate_registry, generate_registry_source, registry_entries};
