//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::emit::EmitArgs;
use crate::commands::types::TypesArgs;

pub struct EmitParams {
    pub dump_path: Option<PathBuf>,
    pub root: Option<String>,
    pub binding: String,
    pub output: Option<PathBuf>,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dump_path: m.get_one::<PathBuf>("dump_path").cloned(),
            root: m.get_one::<String>("root").cloned(),
            binding: m
                .get_one::<String>("binding")
                .cloned()
                .unwrap_or_else(|| "k".to_string()),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            dump_path: p.dump_path,
            root: p.root,
            binding: p.binding,
            output: p.output,
        }
    }
}

pub struct TypesParams {
    pub dump_path: Option<PathBuf>,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dump_path: m.get_one::<PathBuf>("dump_path").cloned(),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            dump_path: p.dump_path,
        }
    }
}
