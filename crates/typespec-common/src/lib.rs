//! Common types for resolved documentation type specs.
//!
//! This crate holds the closed output model produced by `typespec-resolver`
//! and consumed by documentation renderers:
//! - Doc comments (`Comment`, `CommentTag`)
//! - The type algebra (`TypeValue`, `NamedType` and their payloads)
//! - Per-module records (`Module`, `Signature`, `Parameter`)
//! - Naming constants for fully-qualified references

// Doc comments attached to declarations and types
pub mod comment;
pub use comment::{Comment, CommentTag};

// Closed type algebra
pub mod types;
pub use types::{
    IndexedAccessType, IntrinsicType, NamedType, ObjectType, Property, TypeValue, UnionType,
};

// Module, signature and parameter records
pub mod model;
pub use model::{Entry, EntryRef, Module, Parameter, Signature};

// Naming constants and fully-qualified reference helpers
pub mod names;
pub use names::{ANONYMOUS_NAME, CONSTRUCTOR_SUFFIX, qualified_name};

#[cfg(test)]
#[path = "tests/comment_tests.rs"]
mod comment_tests;
#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod types_tests;
#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod model_tests;
