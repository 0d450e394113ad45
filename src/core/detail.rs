//! Detail lookups.
//!
//! Detail views identify a record by its position in a freshly fetched list.
//! Positions are not stable: when the sheet owner reorders rows, an index
//! taken from an earlier load resolves to a different record. Content-derived
//! ids (`stable_id`) survive reordering and are the preferred handle.

use sha2::{Digest, Sha256};

/// Records that can derive an id from their own content.
pub trait Identified {
    fn stable_id(&self) -> String;
}

const STABLE_ID_LEN: usize = 12;

/// First 12 hex chars of SHA-256 over the trimmed parts, unit-separator joined.
pub fn stable_id(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update([0x1f]);
        }
        hasher.update(part.trim().as_bytes());
    }
    hasher
        .finalize()
        .iter()
        .take(STABLE_ID_LEN / 2)
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Parse a route index the way the detail pages do: anything that is not a
/// non-negative integer resolves to nothing.
pub fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Positional lookup into the current load.
pub fn by_index<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}

pub fn by_stable_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    let id = id.trim().to_lowercase();
    items.iter().find(|item| item.stable_id() == id)
}

/// Index of the first record whose key matches; duplicates resolve to the
/// first occurrence, which is how listing links are built.
pub fn index_of<T, F>(items: &[T], mut key_matches: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    items.iter().position(|item| key_matches(item))
}
