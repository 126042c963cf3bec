use lumen_meta::{PropertyError, Reflect};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
	#[error("empty property name in '{0}'")]
	EmptyName(String),
}

/// One command-line operation against a reflectable object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
	Get(String),
	Set(String, String),
	List,
}

impl Op {
	pub fn parse(arg: &str) -> Result<Self, OpError> {
		if arg == "?" {
			return Ok(Op::List);
		}
		let (name, value) = match arg.split_once('=') {
			Some((name, value)) => (name, Some(value)),
			None => (arg, None),
		};
		if name.is_empty() {
			return Err(OpError::EmptyName(arg.to_string()));
		}
		Ok(match value {
			Some(value) => Op::Set(name.to_string(), value.to_string()),
			None => Op::Get(name.to_string()),
		})
	}

	/// Runs the operation and prints its outcome to stdout.
	pub fn apply(&self, object: &mut dyn Reflect) -> Result<(), PropertyError> {
		match self {
			Op::Get(name) => {
				println!("{name} = {}", object.get(name)?);
			}
			Op::Set(name, value) => {
				object.set(name, value)?;
				tracing::debug!(%name, %value, "property set");
			}
			Op::List => {
				for info in object.properties() {
					let access = if info.read_only { "ro" } else { "rw" };
					println!(
						"{:<12} {:<8} {:<8} {access}  {}",
						info.name, info.value_type, info.editor_kind, info.description
					);
				}
			}
		}
		Ok(())
	}
}
