pub mod alias;
pub mod field;
pub mod record;

pub use alias::{LibrarySpec, MatchMode, LIBRARIES};
pub use field::{classify_field, Mention};
pub use record::{classify_record, RecordClassification};

/// An application's stance toward a library. Ordered by priority: a Used
/// classification beats Interested, which beats the Mentioned fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationshipTier {
    Mentioned,
    Interested,
    Used,
}
