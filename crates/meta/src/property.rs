//! Typed accessor pairs and their type-erased interface.
//!
//! A [`TypedProperty<C, T>`] knows both the owner type `C` and the value type `T`.
//! Registries store it behind [`ErasedProperty<C>`], which is generic over the owner
//! only, so one table can hold `String`, `i32` and `bool` properties side by side.
//! The owner type never gets erased: narrowing from "some object" to `C` is done by
//! the compiler at registration time instead of by a cast at call time.

use crate::convert::PropertyValue;
use crate::error::ConvertError;


pub type Getter<C, T> = fn(&C) -> T;
pub type Setter<C, T> = fn(&mut C, T);

/// Why a type-erased write was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetFault {
	ReadOnly,
	Parse(ConvertError),
}

/// Text-level access to one property of `C`, independent of its value type.
pub trait ErasedProperty<C>: Send + Sync {
	/// Reads the property and formats it.
	fn get(&self, obj: &C) -> String;

	/// Parses `text` and writes it. `obj` is untouched on failure.
	fn set(&self, obj: &mut C, text: &str) -> Result<(), SetFault>;

	fn is_read_only(&self) -> bool;

	/// Name of the underlying value type.
	fn value_type(&self) -> &'static str;
}

/// Getter and optional setter for a `T`-valued property of `C`.
pub struct TypedProperty<C, T> {
	getter: Getter<C, T>,
	setter: Option<Setter<C, T>>,
}

impl<C, T> Clone for TypedProperty<C, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C, T> Copy for TypedProperty<C, T> {}

impl<C, T: PropertyValue> TypedProperty<C, T> {
	/// Creates a property with no setter.
	pub const fn read_only(getter: Getter<C, T>) -> Self {
		Self {
			getter,
			setter: None,
		}
	}

	/// Creates a property with both accessors.
	pub const fn read_write(getter: Getter<C, T>, setter: Setter<C, T>) -> Self {
		Self {
			getter,
			setter: Some(setter),
		}
	}

	/// Reads the typed value.
	pub fn value(&self, obj: &C) -> T {
		(self.getter)(obj)
	}
}

impl<C: 'static, T: PropertyValue> ErasedProperty<C> for TypedProperty<C, T> {
	fn get(&self, obj: &C) -> String {
		self.value(obj).to_text()
	}

	fn set(&self, obj: &mut C, text: &str) -> Result<(), SetFault> {
		let setter = self.setter.ok_or(SetFault::ReadOnly)?;
		let value = T::from_text(text).map_err(SetFault::Parse)?;
		setter(obj, value);
		Ok(())
	}

	fn is_read_only(&self) -> bool {
		self.setter.is_none()
	}

	fn value_type(&self) -> &'static str {
		T::TYPE_NAME
	}
}
