use crate::classifier::RecordClassification;
use std::collections::{BTreeMap, BTreeSet};

/// Applications related to one library, split by relationship tier. The
/// three sets are disjoint per application as long as entries are fed from
/// `RecordClassification` values, which enforce tier subordination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub used_by: BTreeSet<String>,
    pub interested_by: BTreeSet<String>,
    pub mentioned_by: BTreeSet<String>,
}

impl IndexEntry {
    pub fn total_mentions(&self) -> usize {
        self.used_by.len() + self.interested_by.len() + self.mentioned_by.len()
    }
}

/// Mapping from canonical library to the applications that relate to it.
/// The fold is commutative in the application dimension: feeding records in
/// any order produces the same index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    entries: BTreeMap<&'static str, IndexEntry>,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record's classification into the index.
    pub fn add_record(&mut self, app_name: &str, classification: &RecordClassification) {
        for &library in &classification.used {
            self.entries
                .entry(library)
                .or_default()
                .used_by
                .insert(app_name.to_string());
        }
        for &library in &classification.interested {
            self.entries
                .entry(library)
                .or_default()
                .interested_by
                .insert(app_name.to_string());
        }
        for &library in &classification.mentioned {
            self.entries
                .entry(library)
                .or_default()
                .mentioned_by
                .insert(app_name.to_string());
        }
    }

    /// Build an index from a whole corpus of classified records.
    pub fn from_classifications<'a, I>(classified: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RecordClassification)>,
    {
        let mut index = Self::new();
        for (name, classification) in classified {
            index.add_record(name, classification);
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, library: &str) -> Option<&IndexEntry> {
        self.entries.get(library)
    }

    /// Entries in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &IndexEntry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    /// Entries ranked by total mention count descending; ties break on the
    /// canonical name so reports are reproducible.
    pub fn ranked(&self) -> Vec<(&'static str, &IndexEntry)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(name_a, entry_a), (name_b, entry_b)| {
            entry_b
                .total_mentions()
                .cmp(&entry_a.total_mentions())
                .then_with(|| name_a.cmp(name_b))
        });
        ranked
    }
}
