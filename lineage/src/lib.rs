//! Ancestor-published values for declarative trees
//!
//! Provider nodes publish a value for their subtree: a plain value
//! ([`ValueProvider`]), a listenable object ([`ListenableProvider`]), the
//! current value of a listenable ([`ValueListenableProvider`]), or a value
//! combined from other published values ([`Combine`]). Descendants read them
//! by type through their [`Scope`], and only the descendants that read a value
//! are rebuilt when it changes.
//!
//! The [`Tree`] drives mounting, updating and unmounting of nodes.

// Modules
pub mod bridge;
pub mod build_state;
pub mod builder;
pub mod combine;
pub mod dependencies;
pub mod dependent;
pub mod element;
pub mod error;
pub mod lifecycle;
pub mod listenable_provider;
pub mod multi_provider;
pub mod node;
pub mod scope;
pub mod slot;
pub mod source;
pub mod tree;
pub mod value_listenable_provider;
pub mod value_provider;

// Exports
pub use {
	self::{
		bridge::{Bridge, MutationCounter},
		build_state::BuildState,
		builder::{Builder, Empty},
		combine::{Combine, CombineState},
		dependencies::Dependencies,
		dependent::{Dependent, WeakDependent},
		element::{ChildSlot, Element, ProviderElement},
		error::{ConfigError, Error, MissingDependency},
		lifecycle::Lifecycle,
		listenable_provider::ListenableProvider,
		multi_provider::MultiProvider,
		node::{Child, Node, NodeExt, SingleChildNode},
		scope::Scope,
		slot::Slot,
		source::Source,
		tree::Tree,
		value_listenable_provider::ValueListenableProvider,
		value_provider::ValueProvider,
	},
	lineage_context::Context,
	lineage_notify::{Dispose, Listenable, Listener, Notifier, ValueListenable, ValueNotifier},
};
