//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Encoded tree file (positional).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File of native-order 32-bit words, or - for stdin")
}

/// Decode as a parameter tree (--params).
pub fn params_arg() -> Arg {
    Arg::new("params")
        .long("params")
        .action(ArgAction::SetTrue)
        .help("Decode parameter records instead of operation nodes")
}

/// Tolerate unused record words (--allow-slack).
pub fn allow_slack_arg() -> Arg {
    Arg::new("allow_slack")
        .long("allow-slack")
        .action(ArgAction::SetTrue)
        .help("Accept records with words after their last section")
}

/// Node count limit (--max-nodes).
pub fn max_nodes_arg() -> Arg {
    Arg::new("max_nodes")
        .long("max-nodes")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Reject trees declaring more nodes")
}

/// Tree length limit (--max-words).
pub fn max_words_arg() -> Arg {
    Arg::new("max_words")
        .long("max-words")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Reject trees declaring more record words")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
