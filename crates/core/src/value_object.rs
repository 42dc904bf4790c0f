//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their contents.
/// A book title is one: two titles with the same text are the same title,
/// whichever record they came from.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
