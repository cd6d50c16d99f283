use crate::meta::{Kind, MetaError, Payload, Variant, Vec2d, Vec3d, Vec4d};

fn one_of_each() -> Vec<Variant> {
	vec![
		Variant::Empty,
		Variant::Char('x'),
		Variant::Integer(5),
		Variant::Real(12.5),
		Variant::from("a"),
		Variant::Vec2d(Vec2d::new(1.0, 2.0)),
		Variant::Vec3d(Vec3d::new(1.0, 2.0, 3.0)),
		Variant::Vec4d(Vec4d::new(1.0, 2.0, 3.0, 4.0)),
		Variant::RawBuffer(vec![0xde, 0xad]),
		Variant::CharVector(vec!['a', 'b']),
		Variant::IntegerVector(vec![1, 2, 3]),
		Variant::RealVector(vec![0.5, f64::NAN]),
		Variant::StringVector(vec!["a".to_owned(), String::new()]),
		Variant::Vec2dVector(vec![Vec2d::new(0.0, 1.0)]),
		Variant::Vec3dVector(vec![Vec3d::default()]),
		Variant::Vec4dVector(vec![Vec4d::default(), Vec4d::new(1.0, 1.0, 1.0, 1.0)]),
	]
}

#[test]
fn new_variant_is_empty() {
	let value = Variant::new();
	assert!(value.is_empty());
	assert_eq!(value.kind(), Kind::Empty);
	assert_eq!(value, Variant::default());
}

#[test]
fn sample_covers_every_kind() {
	let kinds: Vec<Kind> = one_of_each().iter().map(Variant::kind).collect();
	assert_eq!(kinds, Kind::ALL.to_vec());
}

#[test]
fn different_kinds_never_compare_equal() {
	let values = one_of_each();
	for (i, a) in values.iter().enumerate() {
		for (j, b) in values.iter().enumerate() {
			assert_eq!(a.equals(b), i == j, "{:?} vs {:?}", a.kind(), b.kind());
		}
	}
	assert_ne!(Variant::Integer(1), Variant::Real(1.0));
	assert_ne!(Variant::Char('1'), Variant::from("1"));
	assert_ne!(Variant::RawBuffer(Vec::new()), Variant::IntegerVector(Vec::new()));
}

#[test]
fn reals_compare_by_value_with_nan_reflexive() {
	assert_eq!(Variant::Real(0.0), Variant::Real(-0.0));
	assert_eq!(Variant::Real(f64::NAN), Variant::Real(f64::NAN));
	assert_ne!(Variant::Real(12.5), Variant::Real(12.6));
	assert_eq!(Variant::Vec2d(Vec2d::new(f64::NAN, 1.0)), Variant::Vec2d(Vec2d::new(f64::NAN, 1.0)));
	assert_ne!(Variant::RealVector(vec![1.0]), Variant::RealVector(vec![1.0, 1.0]));
}

#[test]
fn clones_are_equal_and_independent() {
	for original in one_of_each() {
		let mut copy = original.try_clone().expect("copy succeeds");
		assert_eq!(copy, original);

		copy.reset(Variant::Integer(-1));
		if original.kind() != Kind::Integer {
			assert_ne!(copy, original);
		}
	}

	let original = Variant::IntegerVector(vec![1, 2]);
	let mut copy = original.clone();
	copy.get_mut::<Vec<i64>>().expect("integer vector").push(3);
	assert_eq!(original.get::<Vec<i64>>().expect("integer vector"), &vec![1, 2]);
}

#[test]
fn reset_switches_kind_and_accessors_follow() {
	let mut value = Variant::from("a");
	assert_eq!(value.get::<String>().expect("string").as_str(), "a");

	value.reset(5_i64);
	assert_eq!(value.kind(), Kind::Integer);
	assert_eq!(
		value.get::<String>(),
		Err(MetaError::TypeMismatch {
			expected: Kind::String,
			actual: Kind::Integer,
		})
	);
	assert_eq!(value.get::<i64>(), Ok(&5));
}

#[test]
fn reset_from_copies_source() {
	let source = Variant::StringVector(vec!["x".to_owned()]);
	let mut target = Variant::Real(1.0);
	target.reset_from(&source).expect("reset succeeds");
	assert_eq!(target, source);

	target.get_mut::<Vec<String>>().expect("string vector").clear();
	assert_eq!(source.get::<Vec<String>>().expect("string vector").len(), 1);
}

#[test]
fn clear_and_take_release_payload() {
	let mut value = Variant::RawBuffer(vec![1, 2, 3]);
	let taken = value.take();
	assert!(value.is_empty());
	assert_eq!(taken.into_inner::<Vec<u8>>(), Ok(vec![1, 2, 3]));

	let mut value = Variant::from("gone");
	value.clear();
	assert_eq!(value, Variant::Empty);
	assert_eq!(value.footprint(), 0);
}

#[test]
fn into_inner_reports_mismatch() {
	let err = Variant::Integer(3).into_inner::<f64>().expect_err("integer is not real");
	assert_eq!(
		err,
		MetaError::TypeMismatch {
			expected: Kind::Real,
			actual: Kind::Integer,
		}
	);
}

fn wraps_as<T: Payload + Into<Variant>>(value: T) {
	let variant: Variant = value.into();
	assert_eq!(variant.kind(), T::KIND);
	assert!(T::extract(variant).is_ok(), "{}", T::KIND);
}

#[test]
fn from_payload_builds_its_own_kind() {
	wraps_as('c');
	wraps_as(1_i64);
	wraps_as(0.5_f64);
	wraps_as(String::from("s"));
	wraps_as(Vec3d::default());
	wraps_as(vec![1_u8]);
	wraps_as(vec!['a']);
	wraps_as(vec![Vec2d::default()]);
	assert_eq!(Variant::from(3_i32), Variant::Integer(3));
	assert_eq!(Variant::from("s").kind(), <String as Payload>::KIND);
}

#[test]
fn footprint_counts_heap_payload() {
	assert_eq!(Variant::Integer(1).footprint(), 0);
	assert_eq!(Variant::from("abcd").footprint(), 4);
	assert_eq!(Variant::IntegerVector(vec![1, 2]).footprint(), 16);
	assert_eq!(Variant::Vec3dVector(vec![Vec3d::default()]).footprint(), 24);
}

#[test]
fn copies_can_cross_threads() {
	let original = Variant::StringVector(vec!["shared".to_owned()]);
	let copy = original.clone();
	let handle = std::thread::spawn(move || {
		let mut copy = copy;
		copy.reset(Variant::Empty);
		copy
	});
	let returned = handle.join().expect("thread completes");
	assert!(returned.is_empty());
	assert_eq!(original.get::<Vec<String>>().expect("string vector")[0], "shared");
}
