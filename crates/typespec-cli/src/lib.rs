//! Command-line support and the cached type spec store.
//!
//! - `args`: CLI arguments for the `typespec` binary
//! - `config`: `typespec.json` loading and resolution
//! - `store`: modification-time keyed cache with an async lookup accessor
//! - `tracing_config`: subscriber setup driven by `TYPESPEC_LOG`

pub mod args;
pub mod config;
pub mod store;
pub mod tracing_config;

pub use store::{StoreError, TypeSpecStore};

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
