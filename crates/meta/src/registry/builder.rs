use rustc_hash::FxHashMap as HashMap;

use super::{BaseLink, Inherited, Registry};
use crate::convert::PropertyValue;
use crate::entry::{EditorKind, PropertyEntry};
use crate::error::RegistryError;
use crate::object::Reflectable;
use crate::property::{Getter, Setter, TypedProperty};

/// What to do when a property name is registered twice on the same registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build.
	Reject,
	/// Keep the first registration.
	FirstWins,
	/// Overwrite with the last registration, keeping the original position.
	LastWins,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Reject
		} else {
			DuplicatePolicy::LastWins
		}
	}
}

impl Default for DuplicatePolicy {
	fn default() -> Self {
		Self::for_build()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing entry kept; incoming dropped.
	KeptExisting,
	/// Existing entry replaced by incoming.
	ReplacedExisting,
}

/// A duplicate name resolved while building a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub registry: &'static str,
	pub name: &'static str,
	pub policy: DuplicatePolicy,
	pub resolution: Resolution,
}

/// Builder for a [`Registry`].
///
/// Meant to be driven as one chained expression inside the owner's registry static:
///
/// ```
/// use std::sync::LazyLock;
///
/// use lumen_meta::{EditorKind, Reflect, Reflectable, Registry};
///
/// struct Lamp {
/// 	lit: bool,
/// }
///
/// static LAMP: LazyLock<Registry<Lamp>> = LazyLock::new(|| {
/// 	Registry::<Lamp>::builder("Lamp")
/// 		.property_rw("lit", "whether the lamp is on", EditorKind::Bool, |l| l.lit, |l, v| l.lit = v)
/// 		.build()
/// });
///
/// impl Reflectable for Lamp {
/// 	fn registry() -> &'static Registry<Self> {
/// 		&LAMP
/// 	}
/// }
///
/// let mut lamp = Lamp { lit: false };
/// lamp.set("lit", "1").unwrap();
/// assert_eq!(lamp.get("lit").unwrap(), "true");
/// ```
pub struct RegistryBuilder<C> {
	label: &'static str,
	policy: DuplicatePolicy,
	entries: Vec<PropertyEntry<C>>,
	bases: Vec<Box<dyn Inherited<C>>>,
}

impl<C: 'static> RegistryBuilder<C> {
	/// Creates a new builder with the given label for diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			policy: DuplicatePolicy::for_build(),
			entries: Vec::new(),
			bases: Vec::new(),
		}
	}

	/// Sets the duplicate name handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Declares `B` as a base, reached through `C`'s `AsRef`/`AsMut` projections.
	///
	/// Bases are searched in the order they are declared.
	pub fn base<B>(self) -> Self
	where
		B: Reflectable,
		C: AsRef<B> + AsMut<B>,
	{
		self.base_with(
			B::registry(),
			<C as AsRef<B>>::as_ref,
			<C as AsMut<B>>::as_mut,
		)
	}

	/// Declares a base registry with explicit projections from `C` to `B`.
	pub fn base_with<B: 'static>(
		mut self,
		registry: &'static Registry<B>,
		upcast: fn(&C) -> &B,
		upcast_mut: fn(&mut C) -> &mut B,
	) -> Self {
		self.bases.push(Box::new(BaseLink {
			registry,
			upcast,
			upcast_mut,
		}));
		self
	}

	/// Adds a read-only property.
	pub fn property<T: PropertyValue>(
		self,
		name: &'static str,
		description: &'static str,
		kind: EditorKind,
		getter: Getter<C, T>,
	) -> Self {
		self.typed(name, description, kind, TypedProperty::read_only(getter))
	}

	/// Adds a read-write property.
	pub fn property_rw<T: PropertyValue>(
		self,
		name: &'static str,
		description: &'static str,
		kind: EditorKind,
		getter: Getter<C, T>,
		setter: Setter<C, T>,
	) -> Self {
		self.typed(
			name,
			description,
			kind,
			TypedProperty::read_write(getter, setter),
		)
	}

	/// Adds a prepared [`TypedProperty`].
	pub fn typed<T: PropertyValue>(
		mut self,
		name: &'static str,
		description: &'static str,
		kind: EditorKind,
		property: TypedProperty<C, T>,
	) -> Self {
		self.entries.push(PropertyEntry::new(
			name,
			description,
			kind,
			Box::new(property),
		));
		self
	}

	/// Freezes the builder, applying the duplicate policy.
	pub fn try_build(self) -> Result<Registry<C>, RegistryError> {
		let Self {
			label,
			policy,
			entries: declared,
			bases,
		} = self;

		let mut entries: Vec<PropertyEntry<C>> = Vec::with_capacity(declared.len());
		let mut by_name: HashMap<&'static str, usize> =
			HashMap::with_capacity_and_hasher(declared.len(), Default::default());
		let mut collisions = Vec::new();

		for entry in declared {
			let name = entry.name();
			let Some(idx) = by_name.get(name).copied() else {
				by_name.insert(name, entries.len());
				entries.push(entry);
				continue;
			};

			let resolution = match policy {
				DuplicatePolicy::Reject => {
					return Err(RegistryError::DuplicateProperty {
						registry: label,
						name: name.to_string(),
						policy,
					});
				}
				DuplicatePolicy::FirstWins => Resolution::KeptExisting,
				DuplicatePolicy::LastWins => {
					entries[idx] = entry;
					Resolution::ReplacedExisting
				}
			};
			tracing::warn!(
				registry = label,
				name,
				?policy,
				?resolution,
				"duplicate property name"
			);
			collisions.push(Collision {
				registry: label,
				name,
				policy,
				resolution,
			});
		}

		tracing::debug!(
			registry = label,
			properties = entries.len(),
			bases = bases.len(),
			"property registry built"
		);

		Ok(Registry {
			label,
			entries,
			by_name,
			bases,
			collisions,
		})
	}

	/// Freezes the builder.
	///
	/// # Panics
	///
	/// Panics if the policy is [`DuplicatePolicy::Reject`] and a name was registered twice.
	/// Registries are built during static initialization, where a duplicate is a
	/// programming error.
	pub fn build(self) -> Registry<C> {
		match self.try_build() {
			Ok(registry) => registry,
			Err(e) => panic!("{e}"),
		}
	}
}
