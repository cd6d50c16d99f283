use crate::meta::{Kind, MetaError, Variant, Vec2d};

#[test]
fn identity_conversion_copies() {
	let value = Variant::IntegerVector(vec![4, 5]);
	assert_eq!(value.convert_to(Kind::IntegerVector), Ok(value.clone()));
}

#[test]
fn numeric_conversions() {
	assert_eq!(Variant::Char('A').convert_to(Kind::Integer), Ok(Variant::Integer(65)));
	assert_eq!(Variant::Integer(66).convert_to(Kind::Char), Ok(Variant::Char('B')));
	assert_eq!(Variant::Integer(3).convert_to(Kind::Real), Ok(Variant::Real(3.0)));
	assert_eq!(Variant::Real(-2.9).convert_to(Kind::Integer), Ok(Variant::Integer(-2)));
	assert_eq!(
		Variant::IntegerVector(vec![1, 2]).convert_to(Kind::RealVector),
		Ok(Variant::RealVector(vec![1.0, 2.0]))
	);
}

#[test]
fn out_of_range_numbers_do_not_convert() {
	let err = Variant::Real(f64::NAN).convert_to(Kind::Integer).expect_err("NaN has no integer");
	assert_eq!(
		err,
		MetaError::Conversion {
			from: Kind::Real,
			to: Kind::Integer,
		}
	);
	assert!(!Variant::Real(1e19).is_convertible(Kind::Integer));
	assert!(!Variant::Integer(-1).is_convertible(Kind::Char));
	assert!(!Variant::Integer(0xD800).is_convertible(Kind::Char));
	assert!(!Variant::RealVector(vec![1.0, f64::INFINITY]).is_convertible(Kind::IntegerVector));
}

#[test]
fn scalars_render_to_string_and_parse_back() {
	assert_eq!(Variant::Real(12.5).convert_to(Kind::String), Ok(Variant::from("12.5")));
	assert_eq!(Variant::Vec2d(Vec2d::new(1.0, 2.0)).convert_to(Kind::String), Ok(Variant::from("1 2")));
	assert_eq!(Variant::from("1 2").convert_to(Kind::Vec2d), Ok(Variant::Vec2d(Vec2d::new(1.0, 2.0))));
	assert!(matches!(Variant::from("five").convert_to(Kind::Integer), Err(MetaError::Parse { .. })));
}

#[test]
fn scalars_wrap_and_single_vectors_unwrap() {
	assert_eq!(Variant::Integer(9).convert_to(Kind::IntegerVector), Ok(Variant::IntegerVector(vec![9])));
	assert_eq!(Variant::from("s").convert_to(Kind::StringVector), Ok(Variant::StringVector(vec!["s".to_owned()])));
	assert_eq!(Variant::RealVector(vec![0.5]).convert_to(Kind::Real), Ok(Variant::Real(0.5)));
	assert!(!Variant::RealVector(vec![0.5, 1.0]).is_convertible(Kind::Real));
	assert!(!Variant::RealVector(Vec::new()).is_convertible(Kind::Real));
}

#[test]
fn unsupported_pairs_fail() {
	assert!(!Variant::Empty.is_convertible(Kind::String));
	assert!(!Variant::RawBuffer(vec![1]).is_convertible(Kind::String));
	assert!(!Variant::Integer(1).is_convertible(Kind::Vec2d));
	assert!(!Variant::IntegerVector(vec![1]).is_convertible(Kind::String));
	assert!(!Variant::Integer(1).is_convertible(Kind::RealVector));
}

#[test]
fn is_convertible_agrees_with_convert_to() {
	let samples = [
		Variant::Empty,
		Variant::Char('z'),
		Variant::Integer(-1),
		Variant::Integer(0x41),
		Variant::Integer(0xD800),
		Variant::Real(1.0e19),
		Variant::Real(f64::NAN),
		Variant::Real(-7.5),
		Variant::from("12"),
		Variant::from("x"),
		Variant::from("1 2"),
		Variant::Vec2d(Vec2d::new(1.0, 2.0)),
		Variant::RawBuffer(vec![1]),
		Variant::CharVector(vec!['a']),
		Variant::IntegerVector(Vec::new()),
		Variant::RealVector(vec![1.5, f64::INFINITY]),
		Variant::RealVector(vec![2.5]),
		Variant::StringVector(vec!["only".to_owned()]),
		Variant::Vec2dVector(vec![Vec2d::default(), Vec2d::default()]),
	];
	for value in &samples {
		for to in Kind::ALL {
			assert_eq!(value.is_convertible(to), value.convert_to(to).is_ok(), "{} -> {to}", value.kind());
		}
	}
}
