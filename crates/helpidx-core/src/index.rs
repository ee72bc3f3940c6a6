//! Three-level concept index: primary key → secondary key → link label → path.
//!
//! Primary keys group case-insensitively and keep the casing they were first
//! inserted with. Secondary keys and link labels are exact identities. A later
//! insert for an existing `(primary, secondary, label)` triple only replaces
//! the stored path.
//!
//! ```rust
//! use helpidx_core::{ConceptIndex, InsertOutcome, parser::parse_record};
//!
//! let mut index = ConceptIndex::new();
//! for assoc in parse_record("ex1 Alpha;Beta^Gamma") {
//!     assert_eq!(index.insert(assoc), InsertOutcome::Inserted);
//! }
//! assert_eq!(index.primary_count(), 2);
//! assert_eq!(index.len(), 2);
//! ```

use crate::ordering::{compare, compare_secondary, fold, leading_letter};
use crate::{ConceptAssociation, SecondaryKey};
use std::collections::{BTreeMap, BTreeSet};

/// What an insert did to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was stored.
    Inserted,
    /// An existing entry's path was overwritten.
    Replaced {
        /// Path stored before this insert.
        previous_path: String,
    },
}

#[derive(Debug, Clone)]
struct PrimaryBucket {
    display: String,
    buckets: BTreeMap<SecondaryKey, BTreeMap<String, String>>,
}

/// The aggregate built from every input record.
#[derive(Debug, Clone, Default)]
pub struct ConceptIndex {
    primaries: BTreeMap<String, PrimaryBucket>,
    entries: usize,
}

impl ConceptIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one association into the index.
    pub fn insert(&mut self, association: ConceptAssociation) -> InsertOutcome {
        let ConceptAssociation {
            primary_key,
            secondary_key,
            link_label,
            target_path,
        } = association;

        let bucket = self
            .primaries
            .entry(fold(&primary_key))
            .or_insert_with(|| PrimaryBucket {
                display: primary_key,
                buckets: BTreeMap::new(),
            });

        match bucket
            .buckets
            .entry(secondary_key)
            .or_default()
            .insert(link_label, target_path)
        {
            Some(previous_path) => InsertOutcome::Replaced { previous_path },
            None => {
                self.entries += 1;
                InsertOutcome::Inserted
            },
        }
    }

    /// Number of stored `(primary, secondary, label)` entries.
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// Whether nothing has been inserted yet.
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct primary keys.
    pub fn primary_count(&self) -> usize {
        self.primaries.len()
    }

    /// Look up the path stored for a triple. The primary key matches case-insensitively.
    pub fn get(&self, primary: &str, secondary: &SecondaryKey, label: &str) -> Option<&str> {
        self.primaries
            .get(&fold(primary))?
            .buckets
            .get(secondary)?
            .get(label)
            .map(String::as_str)
    }

    /// Number of links stored under one secondary bucket.
    pub fn bucket_len(&self, primary: &str, secondary: &SecondaryKey) -> usize {
        self.primaries
            .get(&fold(primary))
            .and_then(|p| p.buckets.get(secondary))
            .map_or(0, BTreeMap::len)
    }

    /// Display text of the primary bucket `primary` falls into.
    pub fn display_key(&self, primary: &str) -> Option<&str> {
        self.primaries
            .get(&fold(primary))
            .map(|p| p.display.as_str())
    }

    /// Sorted, distinct leading letters of all primary keys.
    pub fn alphabet(&self) -> Vec<String> {
        self.primaries
            .values()
            .map(|p| leading_letter(&p.display))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every primary section in render order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = self
            .primaries
            .values()
            .map(|primary| {
                let mut buckets: Vec<Bucket<'_>> = primary
                    .buckets
                    .iter()
                    .map(|(key, links)| {
                        let mut links: Vec<Link<'_>> = links
                            .iter()
                            .map(|(label, path)| Link { label, path })
                            .collect();
                        links.sort_by(|a, b| compare(a.label, b.label));
                        Bucket { key, links }
                    })
                    .collect();
                buckets.sort_by(|a, b| compare_secondary(a.key, b.key));

                Section {
                    key: &primary.display,
                    letter: leading_letter(&primary.display),
                    buckets,
                }
            })
            .collect();
        sections.sort_by(|a, b| compare(a.key, b.key));
        sections
    }
}

/// One primary key with its secondary buckets, sorted.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Primary key as first inserted.
    pub key: &'a str,
    /// Jump-bar letter this section is filed under.
    pub letter: String,
    /// Secondary buckets, sentinel first.
    pub buckets: Vec<Bucket<'a>>,
}

/// One secondary bucket with its links sorted by label.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    /// Secondary key of this bucket.
    pub key: &'a SecondaryKey,
    /// Links in label order.
    pub links: Vec<Link<'a>>,
}

/// A single label → path link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    /// Text shown for the link.
    pub label: &'a str,
    /// Target path, relative to the documentation root.
    pub path: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assoc(primary: &str, secondary: Option<&str>, label: &str, path: &str) -> ConceptAssociation {
        ConceptAssociation {
            primary_key: primary.to_string(),
            secondary_key: SecondaryKey::from_segment(secondary),
            link_label: label.to_string(),
            target_path: path.to_string(),
        }
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut index = ConceptIndex::new();
        let key = SecondaryKey::Named("S".into());

        assert_eq!(
            index.insert(assoc("P", Some("S"), "L", "pathA")),
            InsertOutcome::Inserted
        );
        let before = index.bucket_len("P", &key);

        assert_eq!(
            index.insert(assoc("P", Some("S"), "L", "pathB")),
            InsertOutcome::Replaced {
                previous_path: "pathA".into()
            }
        );
        assert_eq!(index.bucket_len("P", &key), before);
        assert_eq!(index.get("P", &key, "L"), Some("pathB"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_primary_grouping_is_case_insensitive_first_seen_wins() {
        let mut index = ConceptIndex::new();
        index.insert(assoc("Vectors", None, "a", "a.c"));
        index.insert(assoc("VECTORS", None, "b", "b.c"));
        index.insert(assoc("vectors", Some("ghost"), "c", "c.c"));

        assert_eq!(index.primary_count(), 1);
        assert_eq!(index.display_key("vectors"), Some("Vectors"));
        assert_eq!(index.len(), 3);

        let sections = index.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "Vectors");
        assert_eq!(sections[0].letter, "V");
    }

    #[test]
    fn test_secondary_and_labels_are_exact_identities() {
        let mut index = ConceptIndex::new();
        index.insert(assoc("P", Some("Ghost"), "ex1", "p1"));
        index.insert(assoc("P", Some("ghost"), "ex1", "p2"));
        index.insert(assoc("P", Some("ghost"), "EX1", "p3"));

        assert_eq!(index.len(), 3);
        assert_eq!(index.sections()[0].buckets.len(), 2);
    }

    #[test]
    fn test_sections_are_sorted_at_every_level() {
        let mut index = ConceptIndex::new();
        index.insert(assoc("beta", Some("zeta"), "b", "1"));
        index.insert(assoc("Alpha", None, "Zed", "2"));
        index.insert(assoc("Alpha", None, "apple", "3"));
        index.insert(assoc("beta", Some("Eta"), "c", "4"));
        index.insert(assoc("beta", None, "d", "5"));

        let sections = index.sections();
        let keys: Vec<_> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["Alpha", "beta"]);

        let labels: Vec<_> = sections[0].buckets[0].links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["apple", "Zed"]);

        let secondaries: Vec<_> = sections[1].buckets.iter().map(|b| b.key.clone()).collect();
        assert_eq!(
            secondaries,
            vec![
                SecondaryKey::Unkeyed,
                SecondaryKey::Named("Eta".into()),
                SecondaryKey::Named("zeta".into()),
            ]
        );
    }

    #[test]
    fn test_alphabet_is_distinct_and_sorted() {
        let mut index = ConceptIndex::new();
        for key in ["matrix", "Mesh", "arrays", "Krylov", "2D"] {
            index.insert(assoc(key, None, "x", "x"));
        }
        assert_eq!(index.alphabet(), vec!["2", "A", "K", "M"]);
    }

    #[test]
    fn test_empty_index() {
        let index = ConceptIndex::new();
        assert!(index.is_empty());
        assert!(index.sections().is_empty());
        assert!(index.alphabet().is_empty());
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(paths in proptest::collection::vec("[a-z/]{1,10}", 1..8)) {
            let mut index = ConceptIndex::new();
            for path in &paths {
                index.insert(assoc("P", Some("S"), "L", path));
            }
            prop_assert_eq!(index.len(), 1);
            let last = paths.last().unwrap();
            prop_assert_eq!(
                index.get("p", &SecondaryKey::Named("S".into()), "L"),
                Some(last.as_str())
            );
        }

        #[test]
        fn prop_sections_follow_folded_order(keys in proptest::collection::vec("[a-zA-Z]{1,6}", 0..12)) {
            let mut index = ConceptIndex::new();
            for key in &keys {
                index.insert(assoc(key, None, "l", "p"));
            }
            let folded: Vec<String> = index.sections().iter().map(|s| fold(s.key)).collect();
            let mut expected = folded.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(folded, expected);
        }
    }
}
