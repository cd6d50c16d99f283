mod convert;
mod error;
mod field;
mod kind;
mod store;
mod text;
mod variant;
mod vector;

/// Error and result aliases.
pub use error::{MetaError, Result};
/// Named field value.
pub use field::FieldValue;
/// Closed set of value kinds.
pub use kind::Kind;
/// Handle-addressed resource store.
pub use store::{FieldStore, Handle, Managed, Store, StoreLimits, VariantStore};
/// Tagged value holder and typed payload access.
pub use variant::{Payload, Variant};
/// Fixed-size real tuples.
pub use vector::{Vec2d, Vec3d, Vec4d};
