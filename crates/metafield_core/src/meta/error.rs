use thiserror::Error;

use crate::meta::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MetaError>;

/// Errors produced while building, reading, converting and releasing values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
	/// Malformed constructor input.
	#[error("invalid argument: {reason}")]
	InvalidArgument {
		/// What was wrong with the input.
		reason: String,
	},
	/// Typed accessor did not match the stored kind.
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Kind requested by the caller.
		expected: Kind,
		/// Kind currently stored.
		actual: Kind,
	},
	/// Storage could not be obtained for a construction, copy or reset.
	#[error("allocation of {requested} failed (limit {limit})")]
	Allocation {
		/// Requested amount, in bytes or slots depending on the limit hit.
		requested: usize,
		/// Limit that was exceeded.
		limit: usize,
	},
	/// Operation addressed an instance that was already released.
	#[error("use after free: handle {index}#{generation}")]
	UseAfterFree {
		/// Slot index of the stale handle.
		index: u32,
		/// Generation carried by the stale handle.
		generation: u32,
	},
	/// Text form could not be parsed as the requested kind.
	#[error("cannot parse {text:?} as {kind}: {reason}")]
	Parse {
		/// Target kind.
		kind: Kind,
		/// Offending input.
		text: String,
		/// Parser diagnostic.
		reason: String,
	},
	/// Conversion is undefined for the pair of kinds or the value is out of range.
	#[error("cannot convert {from} to {to}")]
	Conversion {
		/// Source kind.
		from: Kind,
		/// Target kind.
		to: Kind,
	},
}

impl MetaError {
	pub(crate) fn invalid(reason: impl Into<String>) -> Self {
		Self::InvalidArgument { reason: reason.into() }
	}

	pub(crate) fn parse(kind: Kind, text: &str, reason: impl Into<String>) -> Self {
		Self::Parse {
			kind,
			text: text.to_owned(),
			reason: reason.into(),
		}
	}

	/// Fallible reservation of `requested` bytes was refused by the allocator.
	pub(crate) fn reserve_failed(requested: usize) -> Self {
		Self::Allocation {
			requested,
			limit: isize::MAX as usize,
		}
	}
}
