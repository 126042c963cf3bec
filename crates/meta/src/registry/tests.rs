use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use pretty_assertions::assert_eq;

use super::*;
use crate::{EditorKind, PropertyError, Reflect, Reflectable, RegistryError};

struct Entity {
	id: u64,
}

struct Shape {
	entity: Entity,
	name: String,
	sides: u32,
}

struct Tagged {
	tag: String,
	serial: u64,
}

struct Square {
	shape: Shape,
	tagged: Tagged,
	side: f64,
}

static ENTITY: LazyLock<Registry<Entity>> = LazyLock::new(|| {
	Registry::<Entity>::builder("Entity")
		.property("id", "entity id", EditorKind::Integer, |e| e.id)
		.build()
});

static SHAPE: LazyLock<Registry<Shape>> = LazyLock::new(|| {
	Registry::<Shape>::builder("Shape")
		.base_with(&*ENTITY, |s| &s.entity, |s| &mut s.entity)
		.property("name", "shape name", EditorKind::String, |s| s.name.clone())
		.property_rw(
			"sides",
			"number of sides",
			EditorKind::Integer,
			|s| s.sides,
			|s, v| s.sides = v,
		)
		.property("kind", "kind", EditorKind::String, |_| "shape".to_string())
		.build()
});

static TAGGED: LazyLock<Registry<Tagged>> = LazyLock::new(|| {
	Registry::<Tagged>::builder("Tagged")
		.property("id", "serial number", EditorKind::Integer, |t| t.serial)
		.property("kind", "kind", EditorKind::String, |_| "tagged".to_string())
		.property_rw(
			"tag",
			"free-form tag",
			EditorKind::String,
			|t| t.tag.clone(),
			|t, v| t.tag = v,
		)
		.build()
});

static SQUARE: LazyLock<Registry<Square>> = LazyLock::new(|| {
	Registry::<Square>::builder("Square")
		.base::<Shape>()
		.base::<Tagged>()
		.property_rw(
			"side",
			"side length",
			EditorKind::String,
			|s| s.side,
			|s, v| s.side = v,
		)
		.property("sides", "always four", EditorKind::Integer, |_| 4u32)
		.build()
});

impl Reflectable for Shape {
	fn registry() -> &'static Registry<Self> {
		&SHAPE
	}
}

impl Reflectable for Tagged {
	fn registry() -> &'static Registry<Self> {
		&TAGGED
	}
}

impl Reflectable for Square {
	fn registry() -> &'static Registry<Self> {
		&SQUARE
	}
}

impl AsRef<Shape> for Square {
	fn as_ref(&self) -> &Shape {
		&self.shape
	}
}

impl AsMut<Shape> for Square {
	fn as_mut(&mut self) -> &mut Shape {
		&mut self.shape
	}
}

impl AsRef<Tagged> for Square {
	fn as_ref(&self) -> &Tagged {
		&self.tagged
	}
}

impl AsMut<Tagged> for Square {
	fn as_mut(&mut self) -> &mut Tagged {
		&mut self.tagged
	}
}

fn square() -> Square {
	Square {
		shape: Shape {
			entity: Entity { id: 7 },
			name: "sq".to_string(),
			sides: 0,
		},
		tagged: Tagged {
			tag: "plain".to_string(),
			serial: 99,
		},
		side: 1.5,
	}
}

#[test]
fn own_entries_resolve_first() {
	let sq = square();
	assert_eq!(SQUARE.get(&sq, "side"), Ok("1.5".to_string()));
	assert_eq!(SQUARE.len(), 2);
	assert_eq!(SQUARE.base_count(), 2);
}

#[test]
fn derived_entry_shadows_base() {
	let mut sq = square();
	assert_eq!(sq.get("sides").unwrap(), "4");

	let err = sq.set("sides", "5").unwrap_err();
	assert!(err.is_read_only());
	assert_eq!(sq.shape.sides, 0);

	let info = sq.property("sides").unwrap();
	assert!(info.read_only);
	assert_eq!(info.description, "always four");
}

#[test]
fn earlier_base_wins_over_later_base() {
	let sq = square();
	assert_eq!(sq.get("kind").unwrap(), "shape");
}

#[test]
fn bases_are_searched_depth_first() {
	// Entity (base of Shape) is reached before Tagged, the second base.
	let sq = square();
	assert_eq!(sq.get("id").unwrap(), "7");
}

#[test]
fn writes_reach_through_base_projection() {
	let mut sq = square();
	sq.set("tag", "urgent").unwrap();
	assert_eq!(sq.tagged.tag, "urgent");
	assert_eq!(sq.get("tag").unwrap(), "urgent");

	let mut shape = Shape {
		entity: Entity { id: 1 },
		name: "tri".to_string(),
		sides: 3,
	};
	shape.set("sides", "6").unwrap();
	assert_eq!(shape.sides, 6);
}

#[test]
fn unknown_names_fail_get_and_set() {
	let mut sq = square();
	assert_eq!(
		sq.get("missing"),
		Err(PropertyError::NotFound {
			name: "missing".to_string()
		})
	);
	assert!(sq.set("missing", "1").unwrap_err().is_not_found());
	assert!(sq.property("missing").is_none());
	assert_eq!(sq.is_read_only("missing"), None);
}

#[test]
fn names_are_case_sensitive() {
	let sq = square();
	assert!(sq.get("Side").unwrap_err().is_not_found());
}

#[test]
fn parse_failure_does_not_mutate() {
	let mut sq = square();
	let err = sq.set("side", "wide").unwrap_err();
	assert!(err.is_parse());
	assert_eq!(sq.side, 1.5);
}

#[test]
fn names_union_own_and_inherited() {
	let expected: BTreeSet<String> = ["id", "kind", "name", "side", "sides", "tag"]
		.into_iter()
		.map(String::from)
		.collect();
	assert_eq!(SQUARE.property_names(), expected);

	let mut out = BTreeSet::from(["extra".to_string()]);
	SHAPE.collect_names(&mut out);
	let expected: BTreeSet<String> = ["extra", "id", "kind", "name", "sides"]
		.into_iter()
		.map(String::from)
		.collect();
	assert_eq!(out, expected);
}

#[test]
fn visible_properties_follow_resolution_order() {
	let names: Vec<&str> = SQUARE.properties().iter().map(|p| p.name).collect();
	assert_eq!(names, ["side", "sides", "name", "kind", "id", "tag"]);

	let kind = SQUARE
		.properties()
		.into_iter()
		.find(|p| p.name == "kind")
		.unwrap();
	assert_eq!(kind.description, "kind");
}

#[test]
fn values_dump_every_visible_property() {
	let sq = square();
	let values = sq.values();
	let expected: BTreeMap<String, String> = [
		("id", "7"),
		("kind", "shape"),
		("name", "sq"),
		("side", "1.5"),
		("sides", "4"),
		("tag", "plain"),
	]
	.into_iter()
	.map(|(k, v)| (k.to_string(), v.to_string()))
	.collect();
	assert_eq!(values, expected);
}

#[test]
fn type_label_comes_from_registry() {
	let sq = square();
	let obj: &dyn Reflect = &sq;
	assert_eq!(obj.type_label(), "Square");
}

fn counter_with_duplicate(policy: DuplicatePolicy) -> Result<Registry<Entity>, RegistryError> {
	Registry::<Entity>::builder("Dup")
		.duplicate_policy(policy)
		.property("a", "first", EditorKind::Integer, |_| 1i32)
		.property("b", "other", EditorKind::Integer, |_| 0i32)
		.property("a", "second", EditorKind::Integer, |_| 2i32)
		.try_build()
}

#[test]
fn duplicate_rejected() {
	let err = counter_with_duplicate(DuplicatePolicy::Reject).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateProperty {
			registry: "Dup",
			name: "a".to_string(),
			policy: DuplicatePolicy::Reject,
		}
	);
}

#[test]
fn duplicate_first_wins() {
	let registry = counter_with_duplicate(DuplicatePolicy::FirstWins).unwrap();
	let entity = Entity { id: 0 };
	assert_eq!(registry.get(&entity, "a"), Ok("1".to_string()));
	assert_eq!(registry.len(), 2);
	assert_eq!(
		registry.collisions(),
		[Collision {
			registry: "Dup",
			name: "a",
			policy: DuplicatePolicy::FirstWins,
			resolution: Resolution::KeptExisting,
		}]
	);
}

#[test]
fn duplicate_last_wins_keeps_position() {
	let registry = counter_with_duplicate(DuplicatePolicy::LastWins).unwrap();
	let entity = Entity { id: 0 };
	assert_eq!(registry.get(&entity, "a"), Ok("2".to_string()));
	let order: Vec<&str> = registry.entries().map(|e| e.name()).collect();
	assert_eq!(order, ["a", "b"]);
	assert_eq!(registry.property("a").unwrap().description, "second");
	assert_eq!(
		registry.collisions()[0].resolution,
		Resolution::ReplacedExisting
	);
}

#[test]
#[should_panic(expected = "duplicate property")]
fn build_panics_on_rejected_duplicate() {
	let _ = Registry::<Entity>::builder("Dup")
		.duplicate_policy(DuplicatePolicy::Reject)
		.property("a", "", EditorKind::Integer, |_| 1i32)
		.property("a", "", EditorKind::Integer, |_| 2i32)
		.build();
}

#[test]
fn default_policy_follows_build_profile() {
	let expected = if cfg!(debug_assertions) {
		DuplicatePolicy::Reject
	} else {
		DuplicatePolicy::LastWins
	};
	assert_eq!(DuplicatePolicy::default(), expected);
}

#[test]
fn default_policy_applies_to_duplicates() {
	let result = Registry::<Entity>::builder("Dup")
		.property("a", "first", EditorKind::Integer, |_| 1i32)
		.property("a", "second", EditorKind::Integer, |_| 2i32)
		.try_build();

	if cfg!(debug_assertions) {
		assert_eq!(
			result.unwrap_err(),
			RegistryError::DuplicateProperty {
				registry: "Dup",
				name: "a".to_string(),
				policy: DuplicatePolicy::Reject,
			}
		);
	} else {
		let registry = result.unwrap();
		assert_eq!(registry.get(&Entity { id: 0 }, "a"), Ok("2".to_string()));
		assert_eq!(registry.collisions()[0].policy, DuplicatePolicy::LastWins);
	}
}
