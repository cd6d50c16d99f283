use crate::meta::{Kind, MetaError};

#[test]
fn names_round_trip_through_from_str() {
	for kind in Kind::ALL {
		let parsed: Kind = kind.name().parse().expect("kind name parses");
		assert_eq!(parsed, kind);
	}
}

#[test]
fn unknown_is_an_alias_of_empty() {
	assert_eq!("unknown".parse::<Kind>(), Ok(Kind::Empty));
}

#[test]
fn rejects_unknown_names() {
	let err = "float".parse::<Kind>().expect_err("float is not a kind");
	assert!(matches!(err, MetaError::InvalidArgument { .. }));
}

#[test]
fn vector_kinds_pair_with_their_elements() {
	for kind in Kind::ALL {
		if let Some(element) = kind.element() {
			assert!(kind.is_vector());
			assert_eq!(element.vector_of(), Some(kind));
		}
	}
	assert!(!Kind::RawBuffer.is_vector());
	assert_eq!(Kind::Empty.vector_of(), None);
	assert_eq!(Kind::RawBuffer.vector_of(), None);
	assert_eq!(Kind::Integer.vector_of(), Some(Kind::IntegerVector));
}
