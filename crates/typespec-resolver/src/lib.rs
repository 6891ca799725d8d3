//! Resolution of documentation reflection trees.
//!
//! The extractor emits one loosely-structured JSON document describing every
//! analyzed module. This crate narrows it into the closed model from
//! `typespec-common`:
//! - `raw`: borrowed views over the JSON (`RawNode`, `RawType`)
//! - `index`: id -> declaration lookup (`DeclarationIndex`)
//! - `types`: type-node -> `TypeValue` (`TypeResolver`)
//! - `module`: per-module signature collection (`resolve_module`)
//!
//! Resolution never fails: unsupported shapes become absent fields.

pub mod raw;
pub use raw::{DeclId, NodeKind, RawNode, RawType, TypeShape};

pub mod index;
pub use index::DeclarationIndex;

pub mod types;
pub use types::{ResolveOptions, TypeResolver};

pub mod module;
pub use module::{resolve_document, resolve_module};

use typespec_common::Module;

/// Parse a JSON document and resolve all of its top-level modules.
pub fn parse_and_resolve(bytes: &[u8], options: &ResolveOptions) -> serde_json::Result<Vec<Module>> {
    let document: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(resolve_document(&document, options))
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod index_tests;
#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod types_tests;
#[cfg(test)]
#[path = "tests/module_tests.rs"]
mod module_tests;
