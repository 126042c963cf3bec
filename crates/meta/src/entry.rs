use crate::error::PropertyError;
use crate::property::{ErasedProperty, SetFault};

/// How a property grid should present a property. Purely descriptive.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	strum_macros::Display,
	strum_macros::EnumString,
	strum_macros::AsRefStr,
	strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum EditorKind {
	String,
	Integer,
	Bool,
}

/// Metadata describing one registered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
	pub name: &'static str,
	pub description: &'static str,
	pub editor_kind: EditorKind,
	/// Name of the value type (`"i32"`, `"bool"`, `"string"`, ...).
	pub value_type: &'static str,
	/// True when the property has no setter.
	pub read_only: bool,
}

/// A registry record: metadata plus the owned, type-erased accessor pair.
pub struct PropertyEntry<C> {
	pub(crate) info: PropertyInfo,
	pub(crate) property: Box<dyn ErasedProperty<C>>,
}

impl<C> PropertyEntry<C> {
	pub(crate) fn new(
		name: &'static str,
		description: &'static str,
		editor_kind: EditorKind,
		property: Box<dyn ErasedProperty<C>>,
	) -> Self {
		Self {
			info: PropertyInfo {
				name,
				description,
				editor_kind,
				value_type: property.value_type(),
				read_only: property.is_read_only(),
			},
			property,
		}
	}

	pub fn info(&self) -> &PropertyInfo {
		&self.info
	}

	pub fn name(&self) -> &'static str {
		self.info.name
	}

	pub fn get(&self, obj: &C) -> String {
		self.property.get(obj)
	}

	pub fn set(&self, obj: &mut C, text: &str) -> Result<(), PropertyError> {
		self.property.set(obj, text).map_err(|fault| match fault {
			SetFault::ReadOnly => PropertyError::ReadOnly {
				name: self.info.name.to_string(),
			},
			SetFault::Parse(source) => PropertyError::Parse {
				name: self.info.name.to_string(),
				source,
			},
		})
	}
}

impl<C> core::fmt::Debug for PropertyEntry<C> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PropertyEntry")
			.field("name", &self.info.name)
			.field("value_type", &self.info.value_type)
			.field("read_only", &self.info.read_only)
			.finish()
	}
}
