//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use qtree_wire::DecodeLimits;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::input::TreeKind;

/// Flags every command decodes with.
pub struct DecodeParams {
    pub tree_path: PathBuf,
    pub params: bool,
    pub allow_slack: bool,
    pub max_nodes: Option<usize>,
    pub max_words: Option<usize>,
}

impl DecodeParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: m
                .get_one::<PathBuf>("tree_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            params: m.get_flag("params"),
            allow_slack: m.get_flag("allow_slack"),
            max_nodes: m.get_one::<usize>("max_nodes").copied(),
            max_words: m.get_one::<usize>("max_words").copied(),
        }
    }

    fn kind(&self) -> TreeKind {
        if self.params {
            TreeKind::Params
        } else {
            TreeKind::Nodes
        }
    }

    fn limits(&self) -> DecodeLimits {
        let mut limits = DecodeLimits::new().allow_slack(self.allow_slack);
        if let Some(n) = self.max_nodes {
            limits = limits.max_nodes(n);
        }
        if let Some(n) = self.max_words {
            limits = limits.max_words(n);
        }
        limits
    }
}

pub struct DumpParams {
    pub decode: DecodeParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            decode: DecodeParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            kind: p.decode.kind(),
            limits: p.decode.limits(),
            tree_path: p.decode.tree_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub decode: DecodeParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            decode: DecodeParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            kind: p.decode.kind(),
            limits: p.decode.limits(),
            tree_path: p.decode.tree_path,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
