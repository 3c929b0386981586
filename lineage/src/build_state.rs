//! Build state
//!
//! Tracks the value a provider resolved from its [`Source`] across updates,
//! and makes sure built values are disposed exactly once while caller-owned
//! values are never disposed.

// Imports
use {
	crate::{
		Scope,
		source::{DisposeFn, Source},
	},
	core::any,
};

/// Held value
#[derive(derive_more::Debug)]
enum Held<V> {
	/// Built by us
	Built {
		/// Value
		value: V,

		/// Disposer
		#[debug(skip)]
		dispose: Option<DisposeFn<V>>,
	},

	/// Adopted from the caller
	Adopted(V),
}

impl<V> Held<V> {
	/// Resolves a new held value from `source`
	fn resolve(source: &Source<V>, scope: &Scope) -> Self
	where
		V: Clone,
	{
		match source {
			Source::Build { build, dispose } => {
				tracing::trace!(value = any::type_name::<V>(), "Building value");
				Self::Built {
					value:   build(scope),
					dispose: dispose.clone(),
				}
			},
			Source::Value(value) => Self::Adopted(value.clone()),
		}
	}

	/// Returns the value
	const fn value(&self) -> &V {
		match self {
			Self::Built { value, .. } | Self::Adopted(value) => value,
		}
	}

	/// Disposes of this value, if we own it
	fn dispose(self, scope: &Scope) {
		match self {
			Self::Built { value, dispose } => {
				tracing::trace!(value = any::type_name::<V>(), "Disposing built value");
				if let Some(dispose) = dispose {
					dispose(scope, &value);
				}
			},
			Self::Adopted(_) => (),
		}
	}
}

/// Build state
#[derive(derive_more::Debug)]
pub struct BuildState<V> {
	/// Held value
	held: Option<Held<V>>,
}

impl<V> BuildState<V> {
	/// Creates an empty build state
	#[must_use]
	pub const fn new() -> Self {
		Self { held: None }
	}

	/// Returns the current value, if any
	#[must_use]
	pub fn value(&self) -> Option<&V> {
		self.held.as_ref().map(Held::value)
	}

	/// Returns if the current value was built by us
	#[must_use]
	pub const fn is_built(&self) -> bool {
		matches!(self.held, Some(Held::Built { .. }))
	}

	/// Resolves the value from `source`.
	///
	/// A built value is reused while `source` keeps building, and an adopted value is
	/// kept while `source` keeps supplying an equal one. Otherwise the new value is
	/// built or adopted, `on_change` is called with the previous and new value, and
	/// only then is the previous value disposed, if it was built.
	pub fn resolve<F>(&mut self, source: &Source<V>, scope: &Scope, on_change: F) -> &V
	where
		V: Clone + PartialEq,
		F: FnOnce(Option<&V>, &V),
	{
		let held = match (self.held.take(), source) {
			// Note: The latest disposer always wins, like the latest builder would
			(Some(Held::Built { value, .. }), Source::Build { dispose, .. }) => Held::Built {
				value,
				dispose: dispose.clone(),
			},
			(Some(Held::Adopted(old)), Source::Value(new)) if old == *new => Held::Adopted(old),
			(prev, source) => {
				let next = Held::resolve(source, scope);
				on_change(prev.as_ref().map(Held::value), next.value());
				if let Some(prev) = prev {
					prev.dispose(scope);
				}

				next
			},
		};

		self.held.insert(held).value()
	}

	/// Disposes of the current value.
	///
	/// Built values are passed to their disposer, adopted values are just dropped.
	/// Does nothing if there's no value, so this may be called any number of times.
	pub fn dispose(&mut self, scope: &Scope) {
		if let Some(held) = self.held.take() {
			held.dispose(scope);
		}
	}
}

impl<V> Default for BuildState<V> {
	fn default() -> Self {
		Self::new()
	}
}
