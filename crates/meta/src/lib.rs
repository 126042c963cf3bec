//! String-keyed property reflection.
//!
//! Lets an object expose a named set of typed properties, each backed by a getter
//! and an optional setter, and be read or written through `get`/`set` calls that
//! exchange values as text. Built for inspector-style tooling (property grids,
//! text dumps, scripting bridges) that must treat arbitrary objects uniformly.
//!
//! # Modules
//!
//! - [`convert`] - Value <-> text conversion
//! - [`property`] - Typed accessor pairs and their erased interface
//! - [`entry`] - Registry records and editor metadata
//! - [`registry`] - Per-class registries with inherited lookup
//! - [`object`] - The reflectable-object capability
//!
//! # Declaring a class
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use lumen_meta::{EditorKind, Reflect, Reflectable, Registry};
//!
//! struct Obj {
//! 	name: String,
//! 	count: i32,
//! }
//!
//! static OBJ: LazyLock<Registry<Obj>> = LazyLock::new(|| {
//! 	Registry::<Obj>::builder("Obj")
//! 		.property("name", "name description", EditorKind::String, |o| o.name.clone())
//! 		.property_rw("count", "count description", EditorKind::Integer, |o| o.count, |o, v| o.count = v)
//! 		.build()
//! });
//!
//! impl Reflectable for Obj {
//! 	fn registry() -> &'static Registry<Self> {
//! 		&OBJ
//! 	}
//! }
//!
//! let mut obj = Obj { name: "obj1".into(), count: 0 };
//! assert_eq!(obj.get("name").unwrap(), "obj1");
//! assert!(obj.set("name", "new name").is_err());
//! obj.set("count", "50").unwrap();
//! assert_eq!(obj.get("count").unwrap(), "50");
//! ```

pub mod convert;
pub mod entry;
pub mod error;
pub mod object;
pub mod property;
pub mod registry;

pub use convert::{PropertyValue, from_text, to_text};
pub use entry::{EditorKind, PropertyEntry, PropertyInfo};
pub use error::{ConvertError, PropertyError, RegistryError};
pub use object::{Reflect, Reflectable};
pub use property::{ErasedProperty, SetFault, TypedProperty};
pub use registry::{Collision, DuplicatePolicy, Registry, RegistryBuilder, Resolution};
