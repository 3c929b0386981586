//! Listenable bridge
//!
//! Keeps a provider subscribed to exactly one listenable at a time, and
//! counts the mutations it observed so a rebuild caused by the listenable
//! can be told apart from any other rebuild.

// Imports
use {
	crate::Scope,
	core::cell::Cell,
	lineage_notify::{Listenable, Listener},
	std::rc::Rc,
};

/// Mutation counter
#[derive(Debug, Default)]
pub struct MutationCounter {
	/// Number of mutations observed
	count: Rc<Cell<u64>>,

	/// Count on the last check
	checked: Cell<u64>,
}

impl MutationCounter {
	/// Creates a new counter
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of mutations observed
	#[must_use]
	pub fn count(&self) -> u64 {
		self.count.get()
	}

	/// Records a mutation
	pub fn bump(&self) {
		self::bump(&self.count);
	}

	/// Returns if any mutations happened since the last check.
	///
	/// Any number of mutations between two checks only count once.
	pub fn check(&self) -> bool {
		let count = self.count.get();
		count != self.checked.replace(count)
	}
}

/// Records a mutation on `count`
fn bump(count: &Cell<u64>) {
	count.set(count.get() + 1);
}

/// Subscription
#[derive(Debug)]
struct Subscription<L> {
	/// Listenable
	listenable: L,

	/// Our listener on it
	listener: Listener,
}

/// Listenable bridge
#[derive(Debug)]
pub struct Bridge<L> {
	/// Current subscription
	subscription: Option<Subscription<L>>,

	/// Mutation counter
	counter: MutationCounter,
}

impl<L> Bridge<L> {
	/// Creates a new, unsubscribed, bridge
	#[must_use]
	pub fn new() -> Self {
		Self {
			subscription: None,
			counter:      MutationCounter::new(),
		}
	}

	/// Returns the mutation counter
	#[must_use]
	pub const fn counter(&self) -> &MutationCounter {
		&self.counter
	}

	/// Returns the listenable currently subscribed to
	#[must_use]
	pub fn listenable(&self) -> Option<&L> {
		self.subscription.as_ref().map(|subscription| &subscription.listenable)
	}
}

impl<L> Bridge<L>
where
	L: Listenable + Clone + PartialEq,
{
	/// Subscribes to `listenable`, and only to it.
	///
	/// If already subscribed to it, does nothing, otherwise see [`subscribe`](Self::subscribe).
	///
	/// Returns whether the subscription changed.
	pub fn listen(&mut self, listenable: Option<&L>, scope: &Scope) -> bool {
		if self.listenable() == listenable {
			return false;
		}

		self.subscribe(listenable, scope);
		true
	}

	/// Replaces the subscription with one to `listenable`.
	///
	/// Unsubscribes from the previous listenable, if any, and subscribes to
	/// `listenable`, if any, even if it's the one already subscribed to. Each
	/// mutation then bumps the counter and requests a rebuild through `scope`.
	pub fn subscribe(&mut self, listenable: Option<&L>, scope: &Scope) {
		self.unlisten();
		if let Some(listenable) = listenable {
			let count = Rc::clone(&self.counter.count);
			let rebuild = scope.rebuild_handle();
			let listener = Listener::new(move || {
				self::bump(&count);
				rebuild.mark_dirty();
			});

			tracing::trace!(?listener, "Subscribing to listenable");
			listenable.add_listener(listener.clone());
			self.subscription = Some(Subscription {
				listenable: listenable.clone(),
				listener,
			});
		}
	}

	/// Unsubscribes from the current listenable, if any
	pub fn unlisten(&mut self) {
		if let Some(subscription) = self.subscription.take() {
			tracing::trace!(listener=?subscription.listener, "Unsubscribing from listenable");
			subscription.listenable.remove_listener(&subscription.listener);
		}
	}
}

impl<L> Default for Bridge<L> {
	fn default() -> Self {
		Self::new()
	}
}
