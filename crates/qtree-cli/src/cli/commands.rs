//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("qtree")
        .about("Inspect encoded join/scan query trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Decoding flags shared by every command.
fn with_decode_args(cmd: Command) -> Command {
    cmd.arg(tree_path_arg())
        .arg(params_arg())
        .arg(allow_slack_arg())
        .arg(max_nodes_arg())
        .arg(max_words_arg())
}

/// List the records of a tree.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("List the records of an encoded tree")
        .after_help(
            r#"EXAMPLES:
  qtree dump tree.bin                 # operation nodes
  qtree dump params.bin --params      # parameter records
  qtree dump - < tree.bin             # from stdin"#,
        )
        .arg(color_arg());

    with_decode_args(cmd)
}

/// Validate a tree.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an encoded tree")
        .after_help(
            r#"EXAMPLES:
  qtree check tree.bin                # exit 0 when well formed
  qtree check tree.bin --allow-slack  # accept padded records"#,
        );

    with_decode_args(cmd)
}
