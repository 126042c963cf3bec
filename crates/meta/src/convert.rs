//! Conversion between property values and their text form.
//!
//! Every property value crosses the reflection boundary as text. Numbers use their
//! natural `Display`/`FromStr` forms, with surrounding ASCII whitespace ignored on input.
//! Malformed numeric input is an error, never a silent zero.
//!
//! Booleans are written as `true`/`false`. Reading is deliberately permissive:
//! `"true"` and `"1"` are true and *every* other text is false, so reading a bool
//! never fails.

use crate::error::ConvertError;


/// A type that can be exchanged as text through a property.
pub trait PropertyValue: Sized + 'static {
	/// Type name reported in metadata and conversion errors.
	const TYPE_NAME: &'static str;

	/// Formats the value.
	fn to_text(&self) -> String;

	/// Parses a value.
	fn from_text(text: &str) -> Result<Self, ConvertError>;
}

/// Formats `value` with its [`PropertyValue`] encoding.
pub fn to_text<T: PropertyValue>(value: &T) -> String {
	value.to_text()
}

/// Parses `text` with the [`PropertyValue`] encoding of `T`.
pub fn from_text<T: PropertyValue>(text: &str) -> Result<T, ConvertError> {
	T::from_text(text)
}

impl PropertyValue for bool {
	const TYPE_NAME: &'static str = "bool";

	fn to_text(&self) -> String {
		String::from(if *self { "true" } else { "false" })
	}

	fn from_text(text: &str) -> Result<Self, ConvertError> {
		Ok(matches!(text, "true" | "1"))
	}
}

impl PropertyValue for String {
	const TYPE_NAME: &'static str = "string";

	fn to_text(&self) -> String {
		self.clone()
	}

	fn from_text(text: &str) -> Result<Self, ConvertError> {
		Ok(text.to_string())
	}
}

impl PropertyValue for char {
	const TYPE_NAME: &'static str = "char";

	fn to_text(&self) -> String {
		self.to_string()
	}

	fn from_text(text: &str) -> Result<Self, ConvertError> {
		let mut chars = text.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(malformed::<char>(text)),
		}
	}
}

fn malformed<T: PropertyValue>(text: &str) -> ConvertError {
	ConvertError::Malformed {
		type_name: T::TYPE_NAME,
		text: text.to_string(),
	}
}

macro_rules! impl_numeric_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl PropertyValue for $ty {
				const TYPE_NAME: &'static str = stringify!($ty);

				fn to_text(&self) -> String {
					self.to_string()
				}

				fn from_text(text: &str) -> Result<Self, ConvertError> {
					text.trim_ascii().parse::<$ty>().map_err(|_| malformed::<$ty>(text))
				}
			}
		)*
	};
}

impl_numeric_value!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
