//! Value source
//!
//! Where a provider gets its value from: either it builds (and owns) it,
//! or the caller hands it over (and keeps owning it).

// Imports
use {
	crate::{ConfigError, Scope},
	std::rc::Rc,
};

/// Builder function
pub type BuildFn<V> = Rc<dyn Fn(&Scope) -> V>;

/// Disposer function
pub type DisposeFn<V> = Rc<dyn Fn(&Scope, &V)>;

/// Value source
#[derive(derive_more::Debug)]
pub enum Source<V> {
	/// Built by the provider
	Build {
		/// Builder
		#[debug(skip)]
		build: BuildFn<V>,

		/// Disposer
		#[debug(skip)]
		dispose: Option<DisposeFn<V>>,
	},

	/// Supplied by the caller
	Value(V),
}

impl<V> Source<V> {
	/// Creates a source that builds the value with `build`
	pub fn build<F>(build: F) -> Self
	where
		F: Fn(&Scope) -> V + 'static,
	{
		Self::Build {
			build:   Rc::new(build),
			dispose: None,
		}
	}

	/// Creates a source from a caller-owned value
	pub const fn value(value: V) -> Self {
		Self::Value(value)
	}

	/// Creates a source from its optional parts.
	///
	/// Exactly one of `build` and `value` must be supplied, and `dispose`
	/// may only be supplied along with `build`.
	pub fn try_from_parts(
		build: Option<BuildFn<V>>,
		value: Option<V>,
		dispose: Option<DisposeFn<V>>,
	) -> Result<Self, ConfigError> {
		match (build, value) {
			(Some(build), None) => Ok(Self::Build { build, dispose }),
			(None, Some(value)) => match dispose {
				Some(_) => Err(ConfigError::DisposeWithValue),
				None => Ok(Self::Value(value)),
			},
			(Some(_), Some(_)) => Err(ConfigError::BuildAndValue),
			(None, None) => Err(ConfigError::NoBuildOrValue),
		}
	}

	/// Sets the disposer of this source.
	///
	/// Fails if this source holds a caller-owned value.
	pub fn with_dispose<F>(self, dispose: F) -> Result<Self, ConfigError>
	where
		F: Fn(&Scope, &V) + 'static,
	{
		match self {
			Self::Build { build, .. } => Ok(Self::Build {
				build,
				dispose: Some(Rc::new(dispose)),
			}),
			Self::Value(_) => Err(ConfigError::DisposeWithValue),
		}
	}

	/// Returns if this source builds its value
	#[must_use]
	pub const fn is_build(&self) -> bool {
		matches!(self, Self::Build { .. })
	}
}

impl<V: Clone> Clone for Source<V> {
	fn clone(&self) -> Self {
		match self {
			Self::Build { build, dispose } => Self::Build {
				build:   Rc::clone(build),
				dispose: dispose.clone(),
			},
			Self::Value(value) => Self::Value(value.clone()),
		}
	}
}
