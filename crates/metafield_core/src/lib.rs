//! Named, type-tagged metadata values built on a closed variant type.

/// Variant, field value, handle store, text form and conversions.
pub mod meta;
