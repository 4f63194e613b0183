use super::alias::MatchMode;
use super::field::classify_field;
use super::RelationshipTier;
use crate::corpus::record::ApplicationRecord;
use std::collections::{BTreeSet, HashMap};

/// Per-application result: three disjoint sets of canonical identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordClassification {
    pub used: BTreeSet<&'static str>,
    pub interested: BTreeSet<&'static str>,
    pub mentioned: BTreeSet<&'static str>,
}

impl RecordClassification {
    pub fn is_empty(&self) -> bool {
        self.used.is_empty() && self.interested.is_empty() && self.mentioned.is_empty()
    }

    /// The tier a library landed in, if it appears at all.
    pub fn tier_of(&self, library: &str) -> Option<RelationshipTier> {
        if self.used.contains(library) {
            Some(RelationshipTier::Used)
        } else if self.interested.contains(library) {
            Some(RelationshipTier::Interested)
        } else if self.mentioned.contains(library) {
            Some(RelationshipTier::Mentioned)
        } else {
            None
        }
    }
}

/// Classify every field of one record and reduce per library by tier
/// priority. This reduction is the only place tier subordination is
/// enforced: a library signalled Used by any field ends up in `used` no
/// matter what other fields said about it.
pub fn classify_record(record: &ApplicationRecord, mode: MatchMode) -> RecordClassification {
    let mut best: HashMap<&'static str, RelationshipTier> = HashMap::new();

    for (name, value) in record.fields() {
        for mention in classify_field(name, value, mode) {
            best.entry(mention.library)
                .and_modify(|tier| *tier = (*tier).max(mention.tier))
                .or_insert(mention.tier);
        }
    }

    let mut classification = RecordClassification::default();
    for (library, tier) in best {
        match tier {
            RelationshipTier::Used => classification.used.insert(library),
            RelationshipTier::Interested => classification.interested.insert(library),
            RelationshipTier::Mentioned => classification.mentioned.insert(library),
        };
    }
    classification
}
