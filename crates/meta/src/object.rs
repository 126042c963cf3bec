//! The reflectable-object capability.
//!
//! A class opts in by implementing [`Reflectable`], returning its registry static.
//! [`Reflect`] is then provided for it by a single blanket impl, so callers holding
//! only a `&dyn Reflect` can read, write and enumerate properties by name.

use std::collections::{BTreeMap, BTreeSet};

use crate::entry::PropertyInfo;
use crate::error::PropertyError;
use crate::registry::Registry;

/// Binds a type to its process-wide property registry.
pub trait Reflectable: Sized + 'static {
	/// Returns the registry shared by every instance of the type.
	///
	/// Derived types pass this to [`crate::RegistryBuilder::base`] to inherit
	/// its properties.
	fn registry() -> &'static Registry<Self>;
}

/// String-keyed property access on an object of unknown concrete type.
pub trait Reflect {
	/// Label of the object's registry.
	fn type_label(&self) -> &'static str;

	/// Reads a property as text.
	fn get(&self, name: &str) -> Result<String, PropertyError>;

	/// Writes a property from text.
	fn set(&mut self, name: &str, text: &str) -> Result<(), PropertyError>;

	/// Resolves a property's metadata.
	fn property(&self, name: &str) -> Option<&'static PropertyInfo>;

	/// Visible properties in resolution order.
	fn properties(&self) -> Vec<&'static PropertyInfo>;

	/// Every visible property name, own and inherited.
	fn property_names(&self) -> BTreeSet<String>;

	/// Returns `None` for unknown names.
	fn is_read_only(&self, name: &str) -> Option<bool> {
		self.property(name).map(|info| info.read_only)
	}

	/// Reads every visible property.
	fn values(&self) -> BTreeMap<String, String> {
		self.properties()
			.into_iter()
			.filter_map(|info| {
				let value = self.get(info.name).ok()?;
				Some((info.name.to_string(), value))
			})
			.collect()
	}
}

impl<T: Reflectable> Reflect for T {
	fn type_label(&self) -> &'static str {
		T::registry().label()
	}

	fn get(&self, name: &str) -> Result<String, PropertyError> {
		T::registry().get(self, name)
	}

	fn set(&mut self, name: &str, text: &str) -> Result<(), PropertyError> {
		T::registry().set(self, name, text)
	}

	fn property(&self, name: &str) -> Option<&'static PropertyInfo> {
		T::registry().property(name)
	}

	fn properties(&self) -> Vec<&'static PropertyInfo> {
		T::registry().properties()
	}

	fn property_names(&self) -> BTreeSet<String> {
		T::registry().property_names()
	}
}
