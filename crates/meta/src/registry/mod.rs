//! Per-class property registries.
//!
//! # Mental Model
//!
//! 1. **Build:** a [`RegistryBuilder`] collects property entries and base links for
//!    one owner type and applies the [`DuplicatePolicy`] to repeated names.
//! 2. **Freeze:** [`RegistryBuilder::build`] yields a [`Registry`], which has no
//!    mutating API. Each class keeps its registry in a `LazyLock` static.
//! 3. **Resolve:** lookups check the registry's own entries, then each base in
//!    declaration order, depth-first. The first match wins, so a derived class
//!    shadows its bases and earlier bases shadow later ones.
//!
//! # Invariants
//!
//! - Own names are unique after build.
//!   - Enforced in: [`RegistryBuilder::try_build`].
//! - Bases are `&'static` and never owned; a base registry outlives every derived one.
//! - Base chains must not cycle. A cycle between `LazyLock` statics panics on first
//!   access instead of looping.

mod builder;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use self::builder::{Collision, DuplicatePolicy, RegistryBuilder, Resolution};
use crate::entry::{PropertyEntry, PropertyInfo};
use crate::error::PropertyError;

/// Immutable property table for owner type `C`.
pub struct Registry<C> {
	label: &'static str,
	entries: Vec<PropertyEntry<C>>,
	by_name: HashMap<&'static str, usize>,
	bases: Vec<Box<dyn Inherited<C>>>,
	collisions: Vec<Collision>,
}

impl<C: 'static> Registry<C> {
	/// Starts a builder for a registry labelled `label` (usually the type name).
	pub fn builder(label: &'static str) -> RegistryBuilder<C> {
		RegistryBuilder::new(label)
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Number of own entries (bases excluded).
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of declared bases.
	pub fn base_count(&self) -> usize {
		self.bases.len()
	}

	/// Own entries in declaration order.
	pub fn entries(&self) -> impl Iterator<Item = &PropertyEntry<C>> {
		self.entries.iter()
	}

	/// Duplicate names resolved by policy while building.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	fn own(&self, name: &str) -> Option<&PropertyEntry<C>> {
		self.by_name.get(name).map(|&idx| &self.entries[idx])
	}

	/// Resolves `name` to its metadata, searching bases after own entries.
	pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
		if let Some(entry) = self.own(name) {
			return Some(entry.info());
		}
		self.bases.iter().find_map(|base| base.property(name))
	}

	/// Reads `name` on `obj` as text.
	pub fn get(&self, obj: &C, name: &str) -> Result<String, PropertyError> {
		self.read(obj, name).ok_or_else(|| PropertyError::not_found(name))
	}

	/// Parses `text` and writes it to `name` on `obj`.
	///
	/// Fails without touching `obj` if the name is unknown, the property is
	/// read-only, or the text does not parse.
	pub fn set(&self, obj: &mut C, name: &str, text: &str) -> Result<(), PropertyError> {
		let result = self
			.write(obj, name, text)
			.unwrap_or_else(|| Err(PropertyError::not_found(name)));
		if let Err(err) = &result {
			tracing::trace!(registry = self.label, name, %err, "property write rejected");
		}
		result
	}

	/// Inserts every visible name (own and inherited) into `out`.
	pub fn collect_names(&self, out: &mut BTreeSet<String>) {
		out.extend(self.entries.iter().map(|e| e.name().to_string()));
		for base in &self.bases {
			base.collect_names(out);
		}
	}

	/// Every visible name, own and inherited.
	pub fn property_names(&self) -> BTreeSet<String> {
		let mut names = BTreeSet::new();
		self.collect_names(&mut names);
		names
	}

	/// Visible properties in resolution order, shadowed entries omitted.
	pub fn properties(&self) -> Vec<&PropertyInfo> {
		let mut seen = HashSet::default();
		let mut out = Vec::new();
		self.collect_visible(&mut seen, &mut out);
		out
	}

	fn read(&self, obj: &C, name: &str) -> Option<String> {
		if let Some(entry) = self.own(name) {
			return Some(entry.get(obj));
		}
		self.bases.iter().find_map(|base| base.get(obj, name))
	}

	fn write(&self, obj: &mut C, name: &str, text: &str) -> Option<Result<(), PropertyError>> {
		if let Some(entry) = self.own(name) {
			return Some(entry.set(obj, text));
		}
		self.bases.iter().find_map(|base| base.set(obj, name, text))
	}

	fn collect_visible<'a>(
		&'a self,
		seen: &mut HashSet<&'static str>,
		out: &mut Vec<&'a PropertyInfo>,
	) {
		for entry in &self.entries {
			if seen.insert(entry.name()) {
				out.push(entry.info());
			}
		}
		for base in &self.bases {
			base.collect_visible(seen, out);
		}
	}
}

impl<C> core::fmt::Debug for Registry<C> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("entries", &self.entries)
			.field(
				"bases",
				&self.bases.iter().map(|b| b.label()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

/// A base registry as seen from a derived owner type `C`.
pub(crate) trait Inherited<C>: Send + Sync {
	fn label(&self) -> &'static str;
	fn property(&self, name: &str) -> Option<&PropertyInfo>;
	fn get(&self, obj: &C, name: &str) -> Option<String>;
	fn set(&self, obj: &mut C, name: &str, text: &str) -> Option<Result<(), PropertyError>>;
	fn collect_names(&self, out: &mut BTreeSet<String>);
	fn collect_visible<'a>(
		&'a self,
		seen: &mut HashSet<&'static str>,
		out: &mut Vec<&'a PropertyInfo>,
	);
}

/// Links a derived owner `C` to the registry of its base `B` through a projection.
pub(crate) struct BaseLink<C, B: 'static> {
	pub(crate) registry: &'static Registry<B>,
	pub(crate) upcast: fn(&C) -> &B,
	pub(crate) upcast_mut: fn(&mut C) -> &mut B,
}

impl<C, B: 'static> Inherited<C> for BaseLink<C, B> {
	fn label(&self) -> &'static str {
		self.registry.label
	}

	fn property(&self, name: &str) -> Option<&PropertyInfo> {
		self.registry.property(name)
	}

	fn get(&self, obj: &C, name: &str) -> Option<String> {
		self.registry.read((self.upcast)(obj), name)
	}

	fn set(&self, obj: &mut C, name: &str, text: &str) -> Option<Result<(), PropertyError>> {
		self.registry.write((self.upcast_mut)(obj), name, text)
	}

	fn collect_names(&self, out: &mut BTreeSet<String>) {
		self.registry.collect_names(out);
	}

	fn collect_visible<'a>(
		&'a self,
		seen: &mut HashSet<&'static str>,
		out: &mut Vec<&'a PropertyInfo>,
	) {
		self.registry.collect_visible(seen, out);
	}
}
