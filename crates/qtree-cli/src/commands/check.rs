use std::path::PathBuf;

use qtree_wire::{DecodeLimits, WireError, decode_param_tree_with, decode_tree_with};

use super::input::{TreeKind, load_words};

pub struct CheckArgs {
    pub tree_path: PathBuf,
    pub kind: TreeKind,
    pub limits: DecodeLimits,
}

pub fn run(args: CheckArgs) {
    let words = match load_words(&args.tree_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match check_words(&words, args.kind, args.limits) {
        Ok(nodes) => {
            tracing::debug!(path = %args.tree_path.display(), nodes, "tree is well formed");
        }
        Err(e) => {
            eprintln!("error: {}: {}", args.tree_path.display(), e);
            if e.is_retryable() {
                eprintln!("note: the tree is incomplete; resending it may succeed");
            }
            std::process::exit(1);
        }
    }

    // Silent on success (like cargo check)
}

/// Decode every record; returns the node count.
pub fn check_words(words: &[u32], kind: TreeKind, limits: DecodeLimits) -> Result<usize, WireError> {
    match kind {
        TreeKind::Nodes => {
            let tree = decode_tree_with(words, limits)?;
            tree.validate()?;
            Ok(tree.node_count())
        }
        TreeKind::Params => {
            let tree = decode_param_tree_with(words, limits)?;
            tree.validate()?;
            Ok(tree.node_count())
        }
    }
}
