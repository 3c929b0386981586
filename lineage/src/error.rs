//! Errors

// Imports
use core::any::{self, TypeId};

/// Invalid node configuration.
///
/// Raised when a node is constructed, never recovered from.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
pub enum ConfigError {
	/// Both a builder and a value were supplied
	#[error("Both a builder and a value were supplied, only one may be")]
	BuildAndValue,

	/// Neither a builder nor a value were supplied
	#[error("Neither a builder nor a value were supplied")]
	NoBuildOrValue,

	/// A disposer was supplied with a value
	#[error("A disposer can't be supplied with a value, values are owned by the caller")]
	DisposeWithValue,
}

/// An ancestor lookup found nothing
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
#[error("No ancestor provides a value of type `{type_name}`")]
pub struct MissingDependency {
	/// Type id
	type_id: TypeId,

	/// Type name
	type_name: &'static str,
}

impl MissingDependency {
	/// Creates a missing dependency error for `T`
	#[must_use]
	pub fn of<T: 'static>() -> Self {
		Self {
			type_id:   TypeId::of::<T>(),
			type_name: any::type_name::<T>(),
		}
	}

	/// Returns the type id of the missing type
	#[must_use]
	pub const fn type_id(&self) -> TypeId {
		self.type_id
	}

	/// Returns the name of the missing type
	#[must_use]
	pub const fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Returns if the missing type is `T`
	#[must_use]
	pub fn is<T: 'static>(&self) -> bool {
		self.type_id == TypeId::of::<T>()
	}
}

/// Error
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
pub enum Error {
	/// Configuration
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Missing dependency
	#[error(transparent)]
	MissingDependency(#[from] MissingDependency),
}
