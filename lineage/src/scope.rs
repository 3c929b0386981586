//! Scope
//!
//! The environment handed to everything that builds: the values published
//! by ancestors, and the element doing the building.

// Imports
use {
	crate::{Dependent, MissingDependency, Slot, WeakDependent},
	lineage_context::Context,
};

/// Scope
#[derive(Clone, Debug)]
pub struct Scope {
	/// Context with all values published by ancestors
	context: Context,

	/// Dependent registered on every value read
	dependent: Dependent,

	/// Dependent marked when a rebuild is requested
	rebuild: WeakDependent,
}

impl Scope {
	/// Creates a new scope.
	///
	/// Values read through the scope register `dependent`, while
	/// rebuild requests mark `rebuild`.
	#[must_use]
	pub fn new(context: Context, dependent: &Dependent, rebuild: &Dependent) -> Self {
		Self {
			context,
			dependent: dependent.clone(),
			rebuild: rebuild.downgrade(),
		}
	}

	/// Returns the context of this scope
	#[must_use]
	pub const fn context(&self) -> &Context {
		&self.context
	}

	/// Returns if an ancestor publishes a value of `T`
	#[must_use]
	pub fn contains<T>(&self) -> bool
	where
		T: 'static,
	{
		self.context.contains::<Slot<T>>()
	}

	/// Uses the value of `T` published by the nearest ancestor.
	///
	/// This element will be rebuilt when the value changes.
	pub fn with<T, F, O>(&self, f: F) -> O
	where
		T: 'static,
		F: FnOnce(Option<&T>) -> O,
	{
		self.context.with::<Slot<T>, _, _>(|slot| match slot {
			Some(slot) => {
				slot.add_dependent(&self.dependent);
				slot.with(|value| f(Some(value)))
			},
			None => f(None),
		})
	}

	/// Uses the value of `T` published by the nearest ancestor without depending on it
	pub fn with_raw<T, F, O>(&self, f: F) -> O
	where
		T: 'static,
		F: FnOnce(Option<&T>) -> O,
	{
		self.context.with::<Slot<T>, _, _>(|slot| match slot {
			Some(slot) => slot.with(|value| f(Some(value))),
			None => f(None),
		})
	}

	/// Gets the value of `T` published by the nearest ancestor
	#[must_use]
	pub fn get<T>(&self) -> Option<T>
	where
		T: Copy + 'static,
	{
		self.with::<T, _, _>(|value| value.copied())
	}

	/// Gets a clone of the value of `T` published by the nearest ancestor
	#[must_use]
	pub fn get_cloned<T>(&self) -> Option<T>
	where
		T: Clone + 'static,
	{
		self.with::<T, _, _>(|value| value.cloned())
	}

	/// Gets a clone of the value of `T` published by the nearest ancestor without depending on it
	#[must_use]
	pub fn get_cloned_raw<T>(&self) -> Option<T>
	where
		T: Clone + 'static,
	{
		self.with_raw::<T, _, _>(|value| value.cloned())
	}

	/// Gets a clone of the value of `T` published by the nearest ancestor,
	/// failing if none publishes one.
	pub fn require<T>(&self) -> Result<T, MissingDependency>
	where
		T: Clone + 'static,
	{
		self.get_cloned::<T>().ok_or_else(MissingDependency::of::<T>)
	}

	/// Returns a handle that requests a rebuild of this element.
	///
	/// The handle doesn't keep the element alive.
	#[must_use]
	pub fn rebuild_handle(&self) -> WeakDependent {
		self.rebuild.clone()
	}

	/// Requests a rebuild of this element on the next pump
	pub fn request_rebuild(&self) {
		self.rebuild.mark_dirty();
	}
}
