use std::path::PathBuf;

use qtree_core::Colors;
use qtree_wire::{DecodeLimits, dump_params_with, dump_with};

use super::check::check_words;
use super::input::{TreeKind, load_words};

pub struct DumpArgs {
    pub tree_path: PathBuf,
    pub kind: TreeKind,
    pub limits: DecodeLimits,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let words = match load_words(&args.tree_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let colors = Colors::new(args.color);
    let listing = match args.kind {
        TreeKind::Nodes => dump_with(&words, args.limits, colors),
        TreeKind::Params => dump_params_with(&words, args.limits, colors),
    };
    print!("{}", listing);

    // The listing already shows where decoding stopped.
    if check_words(&words, args.kind, args.limits).is_err() {
        std::process::exit(1);
    }
}
