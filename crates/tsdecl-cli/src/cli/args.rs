//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Reflection dump file (positional).
pub fn dump_path_arg() -> Arg {
    Arg::new("dump_path")
        .value_name("DUMP")
        .value_parser(value_parser!(PathBuf))
        .help("Reflection dump file (use `-` for stdin)")
}

/// Root type selector (-r/--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("TYPE")
        .help("Fully qualified name of the root type")
}

/// Binding constant identifier (--binding).
pub fn binding_arg() -> Arg {
    Arg::new("binding")
        .long("binding")
        .value_name("NAME")
        .default_value("k")
        .help("Identifier of the emitted binding constant")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}
