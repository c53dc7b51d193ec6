//! Declaration generator: closure walker, type mapper, and renderer.
//!
//! This crate turns a [`TypeModel`] plus one root type into a declaration
//! document:
//! - `generator` - breadth-first walk of every type reachable from the root
//! - `extract` - member extraction (one discovered type, one [`Define`])
//! - `mapper` - type-reference mapping into declaration expressions
//! - `namespace` - dot-separated qualified-name resolution
//! - `render` - namespace-grouped document assembly
//!
//! [`generate`] runs the whole pipeline; [`discover`] stops after the walk
//! and returns the raw records.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use indexmap::IndexMap;
use tsdecl_core::{TypeId, TypeKind, TypeModel};

mod config;
mod define;
mod extract;
mod generator;
mod mapper;
mod namespace;
mod render;

#[cfg(test)]
mod generator_tests;

pub use config::Config;
pub use define::{Define, DefineBody, EnumMember, Method, Param, Property};
pub use namespace::BUILTIN_NAMESPACE;

use generator::Generator;

/// Errors that can occur while walking a type closure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A discovered type is neither a class, an interface, nor an enum.
    #[error("cannot declare type `{name}`: {kind:?} types have no declaration form")]
    UnclassifiableType { name: String, kind: TypeKind },
}

/// Result type for closure walks.
pub type Result<T> = std::result::Result<T, Error>;

/// Walk the closure of `root` and return one [`Define`] per discovered
/// type, in discovery order.
pub fn discover(model: &TypeModel, root: TypeId) -> Result<IndexMap<TypeId, Define>> {
    Generator::new(model).run(root)
}

/// Walk the closure of `root` and render the declaration document.
pub fn generate(model: &TypeModel, root: TypeId, config: &Config) -> Result<String> {
    let defines = discover(model, root)?;
    Ok(render::render(model, root, &defines, config))
}
