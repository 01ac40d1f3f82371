//! Alphabetical Ordering
//!
//! Ordering used when the list is resorted before an insert.

use std::cmp::Ordering;

/// Compare two item texts alphabetically.
///
/// Case-folded text decides first so `"apple"` sorts before `"Banana"`;
/// the raw text breaks ties so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
