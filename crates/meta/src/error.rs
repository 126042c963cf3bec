use crate::registry::DuplicatePolicy;

/// Text could not be converted into a property's value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
	#[error("invalid {type_name}: '{text}'")]
	Malformed {
		type_name: &'static str,
		text: String,
	},
}

/// Failure of a string-keyed `get` or `set`.
///
/// Every variant corresponds to a `false` in the boolean get/set protocol. None of
/// them leave the target object partially written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
	/// No property with this name on the class or any of its bases.
	#[error("unknown property: {name}")]
	NotFound { name: String },

	/// The property has no setter.
	#[error("property '{name}' is read-only")]
	ReadOnly { name: String },

	/// The text could not be parsed into the property's value type.
	#[error("invalid value for property '{name}': {source}")]
	Parse {
		name: String,
		#[source]
		source: ConvertError,
	},
}

impl PropertyError {
	pub(crate) fn not_found(name: &str) -> Self {
		Self::NotFound {
			name: name.to_string(),
		}
	}

	/// Returns the property name the failure refers to.
	pub fn name(&self) -> &str {
		match self {
			Self::NotFound { name } | Self::ReadOnly { name } | Self::Parse { name, .. } => name,
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}

	pub fn is_read_only(&self) -> bool {
		matches!(self, Self::ReadOnly { .. })
	}

	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}
}

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("registry {registry}: duplicate property {name:?} (policy {policy:?})")]
	DuplicateProperty {
		registry: &'static str,
		name: String,
		policy: DuplicatePolicy,
	},
}
