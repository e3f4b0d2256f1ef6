//! Generates the `.rs` table modules under `../../src/index/` from the
//! WHATWG Encoding Standard's `index-*.txt` resource files.
//!
//! Upstream format (one per non-comment, non-blank line):
//!
//! ```text
//! <pointer>\t<codepoint as 0xHHHH>
//! ```
//!
//! Lines starting with `#` are comments; blank lines are skipped. This
//! mirrors the format served from
//! <https://encoding.spec.whatwg.org/index-jis0208.txt> and its siblings.
//!
//! This binary has no network access of its own: point it at a local copy
//! of the upstream file with `--input`. It does not run as part of this
//! crate's build (there is no `build.rs`); the committed tables under
//! `src/index/` are checked in as ordinary source so the main crate builds
//! without this tool or any network access at all. See `DESIGN.md` for why
//! those committed tables are partial extracts rather than the full
//! upstream registry.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Generate an encoding_whatwg index table from an upstream index-*.txt file")]
struct Args {
    /// Path to the upstream `index-<name>.txt` file.
    #[arg(long)]
    input: PathBuf,

    /// Rust identifier stem to use for the generated `DECODE`/`ENCODE` statics
    /// (e.g. `jis0208`, `big5`).
    #[arg(long)]
    name: String,

    /// Treat the input as a GB18030-ranges file (`pointer -> codepoint`
    /// piecewise ranges) instead of a dense pointer table.
    #[arg(long, default_value_t = false)]
    ranges: bool,
}

/// One parsed `pointer\tcodepoint` line.
struct Entry {
    pointer: u32,
    codepoint: u32,
}

fn parse_index_file(text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let pointer = fields
            .next()
            .with_context(|| format!("line {}: missing pointer field", lineno + 1))?
            .parse::<u32>()
            .with_context(|| format!("line {}: malformed pointer", lineno + 1))?;
        let cp_field = fields
            .next()
            .with_context(|| format!("line {}: missing codepoint field", lineno + 1))?;
        let cp_hex = cp_field
            .strip_prefix("0x")
            .with_context(|| format!("line {}: codepoint must be 0x-prefixed hex", lineno + 1))?;
        let codepoint = u32::from_str_radix(cp_hex, 16)
            .with_context(|| format!("line {}: malformed codepoint", lineno + 1))?;
        entries.push(Entry { pointer, codepoint });
    }
    Ok(entries)
}

/// Renders a dense `DECODE`/`ENCODE` pair for a two-byte (or similar) index.
fn render_dense_table(name: &str, entries: &[Entry]) -> String {
    let max_pointer = entries.iter().map(|e| e.pointer).max().unwrap_or(0);
    let mut decode = vec![0u32; max_pointer as usize + 1];
    for e in entries {
        decode[e.pointer as usize] = e.codepoint;
    }

    // Ties on codepoint are broken by lowest pointer (§4.A), so a
    // `BTreeMap` keyed by codepoint naturally keeps the first (lowest
    // pointer) insertion when we only keep `entry.or_insert`.
    let mut by_codepoint: BTreeMap<u32, u32> = BTreeMap::new();
    for e in entries {
        by_codepoint.entry(e.codepoint).or_insert(e.pointer);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "//! Generated from `tables/upstream/index-{name}.txt` by `tools/gen-index-tables`.\n//! Do not edit by hand.\n\n"
    ));
    out.push_str(&format!(
        "pub static DECODE: [u32; {}] = [\n",
        decode.len()
    ));
    for chunk in decode.chunks(8) {
        let row: Vec<String> = chunk.iter().map(|cp| format!("0x{cp:04X}")).collect();
        out.push_str("    ");
        out.push_str(&row.join(", "));
        out.push_str(",\n");
    }
    out.push_str("];\n\n");

    out.push_str("pub static ENCODE: &[(u32, u32)] = &[\n");
    for (cp, pointer) in &by_codepoint {
        out.push_str(&format!("    (0x{cp:04X}, {pointer}),\n"));
    }
    out.push_str("];\n");
    out
}

/// Renders a GB18030-style ranges table: kept in upstream (pointer) order,
/// not re-sorted by codepoint, since the piecewise lookup in
/// `crate::index::find_range_by_pointer` depends on pointer ordering.
fn render_ranges_table(name: &str, entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "//! Generated from `tables/upstream/index-{name}.txt` by `tools/gen-index-tables`.\n//! Do not edit by hand.\n\n"
    ));
    out.push_str("use crate::index::Range;\n\n");
    out.push_str("pub static RANGES: &[Range] = &[\n");
    for e in entries {
        out.push_str(&format!(
            "    Range {{ pointer: {}, codepoint: 0x{:04X} }},\n",
            e.pointer, e.codepoint
        ));
    }
    out.push_str("];\n");
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut entries = parse_index_file(&text)?;
    if entries.is_empty() {
        bail!("{} contained no index entries", args.input.display());
    }
    entries.sort_by_key(|e| e.pointer);

    let rendered = if args.ranges {
        render_ranges_table(&args.name, &entries)
    } else {
        render_dense_table(&args.name, &entries)
    };
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_codepoint_lines() {
        let text = "# comment\n0\t0x3000\n1\t0x3001\n\n5\t0x30FB\n";
        let entries = parse_index_file(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].pointer, 0);
        assert_eq!(entries[0].codepoint, 0x3000);
        assert_eq!(entries[2].pointer, 5);
        assert_eq!(entries[2].codepoint, 0x30FB);
    }

    #[test]
    fn rejects_missing_hex_prefix() {
        let text = "0\t3000\n";
        assert!(parse_index_file(text).is_err());
    }

    #[test]
    fn dense_table_fills_unmapped_slots_with_zero() {
        let entries = vec![
            Entry { pointer: 0, codepoint: 0x3000 },
            Entry { pointer: 2, codepoint: 0x3002 },
        ];
        let rendered = render_dense_table("test", &entries);
        assert!(rendered.contains("0x3000, 0x0000, 0x3002"));
    }

    #[test]
    fn ranges_table_preserves_upstream_order() {
        let entries = vec![
            Entry { pointer: 0, codepoint: 0x0080 },
            Entry { pointer: 189_000, codepoint: 0x10000 },
        ];
        let rendered = render_ranges_table("gb18030-ranges", &entries);
        let first = rendered.find("pointer: 0,").unwrap();
        let second = rendered.find("pointer: 189000,").unwrap();
        assert!(first < second);
    }
}
