//! Demo classes: a base `Obj` and a derived `AnotherObj`.

use std::sync::LazyLock;

use lumen_meta::{EditorKind, Reflectable, Registry};

pub struct Obj {
	name: String,
	count: i32,
}

impl Obj {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			count: 0,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn count(&self) -> i32 {
		self.count
	}

	pub fn set_count(&mut self, count: i32) {
		self.count = count;
	}
}

static OBJ: LazyLock<Registry<Obj>> = LazyLock::new(|| {
	Registry::<Obj>::builder("Obj")
		.property("name", "name description", EditorKind::String, |o| {
			o.name().to_string()
		})
		.property_rw(
			"count",
			"count description",
			EditorKind::Integer,
			Obj::count,
			Obj::set_count,
		)
		.build()
});

impl Reflectable for Obj {
	fn registry() -> &'static Registry<Self> {
		&OBJ
	}
}

pub struct AnotherObj {
	base: Obj,
	visible: bool,
}

impl AnotherObj {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: Obj::new(name),
			visible: false,
		}
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}
}

impl AsRef<Obj> for AnotherObj {
	fn as_ref(&self) -> &Obj {
		&self.base
	}
}

impl AsMut<Obj> for AnotherObj {
	fn as_mut(&mut self) -> &mut Obj {
		&mut self.base
	}
}

static ANOTHER_OBJ: LazyLock<Registry<AnotherObj>> = LazyLock::new(|| {
	Registry::<AnotherObj>::builder("AnotherObj")
		.base::<Obj>()
		.property_rw(
			"visible",
			"visible description",
			EditorKind::Bool,
			AnotherObj::is_visible,
			AnotherObj::set_visible,
		)
		.build()
});

impl Reflectable for AnotherObj {
	fn registry() -> &'static Registry<Self> {
		&ANOTHER_OBJ
	}
}
