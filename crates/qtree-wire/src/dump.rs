//! Human-readable listing of an encoded tree.
//!
//! ```text
//! [header]
//! kind = node
//! nodes = 2
//! words = 12
//!
//! [records]
//! N0 @0001 scan_frag len=4 info=- table=7 version=1
//! N1 @0005 lookup len=8 info=HAS_PARENT|KEY_LINKED table=12 version=3
//!   HAS_PARENT = 0x00000000
//!   KEY_LINKED = col(0)
//! ```
//!
//! Decoding stops at the first error, which is listed as a `!!` line where
//! it occurred.

use std::fmt::{self, Write as _};

use qtree_core::Colors;
use qtree_core::utils::{hex_word, width_for_count};

use crate::constants::TREE_HEADER_WORDS;
use crate::info::{InfoBit, SectionShape};
use crate::limits::DecodeLimits;
use crate::pattern::{Pattern, PatternReader};
use crate::record::{NodeRecord, ParamRecord, RecordKind, RecordView};
use crate::tree::TreeView;

/// Dump a node tree with default limits.
pub fn dump(buffer: &[u32], colors: Colors) -> String {
    dump_with(buffer, DecodeLimits::default(), colors)
}

pub fn dump_with(buffer: &[u32], limits: DecodeLimits, colors: Colors) -> String {
    render::<NodeRecord>(buffer, limits, colors)
}

/// Dump a parameter tree with default limits.
pub fn dump_params(buffer: &[u32], colors: Colors) -> String {
    dump_params_with(buffer, DecodeLimits::default(), colors)
}

pub fn dump_params_with(buffer: &[u32], limits: DecodeLimits, colors: Colors) -> String {
    render::<ParamRecord>(buffer, limits, colors)
}

/// Per-kind record label and fixed fields.
trait DumpRecord: RecordKind {
    const PREFIX: char;

    fn fixed_fields(view: &RecordView<'_, Self>) -> String;
}

impl DumpRecord for NodeRecord {
    const PREFIX: char = 'N';

    fn fixed_fields(view: &RecordView<'_, Self>) -> String {
        format!("table={} version={}", view.table_id(), view.table_version())
    }
}

impl DumpRecord for ParamRecord {
    const PREFIX: char = 'P';

    fn fixed_fields(view: &RecordView<'_, Self>) -> String {
        format!("dest={}", hex_word(view.result_destination()))
    }
}

fn render<K: DumpRecord>(buffer: &[u32], limits: DecodeLimits, colors: Colors) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree::<K>(&mut out, buffer, limits, &colors);
    out
}

fn write_tree<K: DumpRecord>(
    out: &mut String,
    buffer: &[u32],
    limits: DecodeLimits,
    c: &Colors,
) -> fmt::Result {
    writeln!(out, "{}", c.title("header"))?;
    writeln!(out, "kind = {}", K::LABEL)?;

    let tree = match TreeView::<K>::parse_with(buffer, limits) {
        Ok(tree) => tree,
        Err(err) => return writeln!(out, "!! {err}"),
    };
    writeln!(out, "nodes = {}", tree.node_count())?;
    writeln!(out, "words = {}", tree.total_words())?;
    out.push('\n');

    writeln!(out, "{}", c.title("records"))?;
    let w = width_for_count(tree.node_count());
    let mut nodes = tree.nodes();
    while let Some(node) = nodes.next() {
        let view = match node {
            Ok(view) => view,
            Err(err) => return writeln!(out, "!! {err}"),
        };
        let index = nodes.index() - 1;
        let offset = nodes.position() - view.consumed_words() + TREE_HEADER_WORDS;
        writeln!(
            out,
            "{}{index:0w$} {}@{offset:04x}{} {}{}{} len={} info={} {}",
            K::PREFIX,
            c.muted,
            c.reset,
            c.op,
            view.op_type().as_str(),
            c.reset,
            view.consumed_words(),
            view.flags(),
            K::fixed_fields(&view),
        )?;
        write_sections(out, &view, c)?;
    }
    Ok(())
}

fn write_sections<K: RecordKind>(out: &mut String, view: &RecordView<'_, K>, c: &Colors) -> fmt::Result {
    for (bit, body) in view.sections() {
        if bit.shape() == SectionShape::Fixed(0) {
            writeln!(out, "  {}", bit.name())?;
            continue;
        }
        write!(out, "  {} =", bit.name())?;
        if body.is_empty() {
            writeln!(out, " {}(empty){}", c.muted, c.reset)?;
            continue;
        }
        if bit.carries_patterns() {
            write_patterns(out, body, c)?;
        } else {
            for &word in body {
                write!(out, " {}", hex_word(word))?;
            }
            out.push('\n');
        }
    }
    Ok(())
}

fn write_patterns(out: &mut String, body: &[u32], c: &Colors) -> fmt::Result {
    for pattern in PatternReader::new(body) {
        match pattern {
            Ok(p @ Pattern::Data(_)) => write!(out, " {}{p}{}", c.literal, c.reset)?,
            Ok(p) => write!(out, " {p}")?,
            Err(err) => {
                out.push('\n');
                return writeln!(out, "  !! {err}");
            }
        }
    }
    out.push('\n');
    Ok(())
}
