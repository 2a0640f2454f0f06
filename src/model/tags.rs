//! Tag category normalization and merging.
//!
//! Tags are free-form category-to-labels maps ("genre" -> ["Rock"],
//! "mood" -> ["Happy", "Chill"]). Category keys are case-insensitive and
//! labels that differ only in letter casing are the same logical label.
//!
//! [`merge_tags`] folds the tag maps of many tracks into one album-level
//! map, ordering each category's labels by how many tracks carry them.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Raw per-track tags, exactly as the tag reader produced them.
/// Keys are case-insensitive semantic categories.
pub type RawTags = HashMap<String, Vec<String>>;

/// Merged album-level tags, keyed by normalized category.
pub type TagMap = BTreeMap<TagKey, Vec<String>>;

/// A normalized (lower-cased) tag category key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagKey(String);

impl TagKey {
    /// Normalizes a raw category key. "Genre", "GENRE" and "genre" all map
    /// to the same key.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// The genre category.
    pub fn genre() -> Self {
        Self("genre".to_string())
    }

    /// The mood category.
    pub fn mood() -> Self {
        Self("mood".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logical label and how often it occurred, in first-seen order.
struct LabelCount {
    /// Canonical display form: the byte-wise smallest casing variant seen
    display: String,
    count: usize,
}

/// Merges the tag maps of many tracks into a single album-level map.
///
/// Per category: labels are identified case-insensitively, the canonical
/// display form is the lexicographically smallest casing variant, and the
/// output is ordered by descending occurrence count with ties broken by
/// ascending display form. Empty labels and empty categories are dropped.
///
/// Counting uses an insertion-ordered list rather than bare map iteration,
/// so the result is deterministic for any input order.
pub fn merge_tags<'a, I>(tag_maps: I) -> TagMap
where
    I: IntoIterator<Item = &'a RawTags>,
{
    // category -> (labels in first-seen order, lowercased label -> index)
    let mut counts: BTreeMap<TagKey, (Vec<LabelCount>, HashMap<String, usize>)> = BTreeMap::new();

    for raw in tag_maps {
        for (category, labels) in raw {
            let key = TagKey::new(category);
            let (ordered, index) = counts.entry(key).or_default();
            for label in labels {
                if label.is_empty() {
                    continue;
                }
                let folded = label.to_lowercase();
                match index.get(&folded) {
                    Some(&i) => {
                        let entry = &mut ordered[i];
                        entry.count += 1;
                        if label.as_str() < entry.display.as_str() {
                            entry.display = label.clone();
                        }
                    }
                    None => {
                        index.insert(folded, ordered.len());
                        ordered.push(LabelCount {
                            display: label.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, (ordered, _))| !ordered.is_empty())
        .map(|(key, (mut ordered, _))| {
            ordered.sort_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.display.cmp(&b.display))
            });
            let labels = ordered.into_iter().map(|l| l.display).collect();
            (key, labels)
        })
        .collect()
}
