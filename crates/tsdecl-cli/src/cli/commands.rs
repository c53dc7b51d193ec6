//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tsdecl")
        .about("Declaration generator for host reflection dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(emit_command())
        .subcommand(types_command())
}

/// Generate a declaration document from a reflection dump.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate a declaration document from a reflection dump")
        .override_usage(
            "\
  tsdecl emit <DUMP> --root <TYPE>
  tsdecl emit - --root <TYPE> < dump.json",
        )
        .after_help(
            r#"EXAMPLES:
  tsdecl emit dump.json --root Acme.Scripting.KScript   # to stdout
  tsdecl emit dump.json -r Acme.App -o app.d.ts         # to file
  tsdecl emit dump.json -r Acme.App --binding script    # rename the binding
  cat dump.json | tsdecl emit - -r Acme.App             # from stdin"#,
        )
        .arg(dump_path_arg())
        .arg(root_arg())
        .arg(binding_arg())
        .arg(output_file_arg())
}

/// List the types declared in a reflection dump.
pub fn types_command() -> Command {
    Command::new("types")
        .about("List the types a reflection dump declares, grouped by namespace")
        .override_usage("  tsdecl types <DUMP>")
        .after_help(
            r#"EXAMPLES:
  tsdecl types dump.json
  cat dump.json | tsdecl types -"#,
        )
        .arg(dump_path_arg())
}
