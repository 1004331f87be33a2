//! Natural (human) ordering of filenames.
//!
//! Names are split into runs of ASCII digits and non-digits. Digit runs
//! compare by numeric value, everything else compares case-insensitively,
//! so `ep2.mkv` sorts before `ep10.mkv`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::models::display_name;

/// A run of characters inside a name.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Natural comparison of two names.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let chunks_a = split_chunks(a);
    let chunks_b = split_chunks(b);

    for (ca, cb) in chunks_a.iter().zip(chunks_b.iter()) {
        let ord = match (ca, cb) {
            (Chunk::Digits(da), Chunk::Digits(db)) => cmp_digits(da, db),
            _ => cmp_text(chunk_str(ca), chunk_str(cb)),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    chunks_a.len().cmp(&chunks_b.len())
}

/// Natural comparison of two paths by their filename.
pub fn natural_cmp_paths(a: &Path, b: &Path) -> Ordering {
    natural_cmp(&display_name(a), &display_name(b))
}

/// Sort paths in place by filename using natural ordering.
///
/// The sort is stable: paths whose names compare equal keep their order.
pub fn sort_paths_naturally(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_cmp_paths(a, b));
}

fn chunk_str<'a>(chunk: &Chunk<'a>) -> &'a str {
    match chunk {
        Chunk::Digits(s) | Chunk::Text(s) => *s,
    }
}

/// Compare digit runs by value without parsing, so arbitrarily long runs work.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Split a name into digit and non-digit runs.
fn split_chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                chunks.push(make_chunk(&s[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }

    if let Some(is_digit) = in_digits {
        chunks.push(make_chunk(&s[start..], is_digit));
    }

    chunks
}

fn make_chunk(s: &str, is_digit: bool) -> Chunk<'_> {
    if is_digit {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}
