use std::io::Read;
use std::path::{Path, PathBuf};

use qtree_wire::{WireError, words_from_bytes};

/// Which record kind a tree file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeKind {
    Nodes,
    Params,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Wire { path: PathBuf, source: WireError },
}

/// Read a tree file (`-` is stdin) as native-order words.
pub fn load_words(path: &Path) -> Result<Vec<u32>, InputError> {
    let bytes = read_bytes(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    words_from_bytes(&bytes).map_err(|source| InputError::Wire {
        path: path.to_path_buf(),
        source,
    })
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read(path)
}
