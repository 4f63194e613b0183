use super::alias::{libraries_in, MatchMode};
use super::RelationshipTier;
use crate::corpus::record::FieldValue;

/// Field names containing one of these mark every library mention in the
/// field as actively used.
static FIELD_USED_KEYWORDS: &[&str] = &[
    "used",
    "current",
    "libs-used",
    "nla-group-distributed-used",
    "nla-group-specialized-used",
];

static FIELD_INTEREST_KEYWORDS: &[&str] = &[
    "interest",
    "interested",
    "libs-interest",
    "nla-group-distributed-interested",
    "nla-group-specialized-interested",
];

// Value-level signals, consulted only when the field name is neutral.
static VALUE_USED_KEYWORDS: &[&str] = &["using", "use", "used", "current", "implemented"];
static VALUE_INTEREST_KEYWORDS: &[&str] = &["interested", "interest", "considering", "planning", "future"];

/// One library mention found in a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention {
    pub library: &'static str,
    pub tier: RelationshipTier,
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Tier implied by the field name alone, if any.
fn field_name_signal(field_name: &str) -> Option<RelationshipTier> {
    let name = field_name.to_lowercase();
    if contains_any(&name, FIELD_USED_KEYWORDS) {
        Some(RelationshipTier::Used)
    } else if contains_any(&name, FIELD_INTEREST_KEYWORDS) {
        Some(RelationshipTier::Interested)
    } else {
        None
    }
}

/// Tier implied by the matched value's own wording.
fn value_signal(value: &str) -> RelationshipTier {
    let value = value.to_lowercase();
    if contains_any(&value, VALUE_USED_KEYWORDS) {
        RelationshipTier::Used
    } else if contains_any(&value, VALUE_INTEREST_KEYWORDS) {
        RelationshipTier::Interested
    } else {
        RelationshipTier::Mentioned
    }
}

fn classify_text(field_name: &str, text: &str, mode: MatchMode, out: &mut Vec<Mention>) {
    let libraries = libraries_in(text, mode);
    if libraries.is_empty() {
        return;
    }
    let tier = field_name_signal(field_name).unwrap_or_else(|| value_signal(text));
    out.extend(libraries.into_iter().map(|library| Mention { library, tier }));
}

/// Detect library mentions in one record field and infer a relationship tier
/// for each. Pure; empty names, empty values, and unknown fields yield an
/// empty result. Duplicate libraries with conflicting tiers may appear when
/// the value is a list; the per-record reduction resolves them.
pub fn classify_field(field_name: &str, value: &FieldValue, mode: MatchMode) -> Vec<Mention> {
    let mut mentions = Vec::new();
    match value {
        FieldValue::Text(text) => classify_text(field_name, text, mode, &mut mentions),
        FieldValue::List(items) => {
            for item in items {
                classify_text(field_name, item, mode, &mut mentions);
            }
        }
    }
    mentions
}
