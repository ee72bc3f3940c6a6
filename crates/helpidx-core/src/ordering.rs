//! Case-insensitive ordering shared by every sort in the index.
//!
//! Primary keys, secondary keys and link labels all go through [`compare`],
//! so the three sort sites cannot drift apart.

use crate::SecondaryKey;
use std::cmp::Ordering;

/// Case-folded form of `s` used for grouping and ordering.
pub fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Compare two strings after lowercasing both.
///
/// Strings that differ only in case compare equal; a stable sort keeps their
/// incoming relative order.
///
/// ```rust
/// use helpidx_core::ordering::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("alpha", "Beta"), Ordering::Less);
/// assert_eq!(compare("VecCreate", "veccreate"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Order secondary keys: the sentinel bucket first, then names via [`compare`].
pub fn compare_secondary(a: &SecondaryKey, b: &SecondaryKey) -> Ordering {
    match (a.name(), b.name()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

/// Letter a primary key is filed under in the jump bar.
///
/// Taken from the first character of the folded key, uppercased, so keys that
/// sort together under [`compare`] always share a letter. Empty for an empty key.
pub fn leading_letter(key: &str) -> String {
    key.chars()
        .flat_map(char::to_lowercase)
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
