//! Listenable provider tests

// Imports
use {
	core::cell::{Cell, RefCell},
	lineage::{Builder, Child, Empty, Listenable, ListenableProvider, Listener, NodeExt, Notifier, Tree},
	std::rc::Rc,
};

/// Creates a consumer counting how many times it was built
fn counter() -> (Child, Rc<Cell<usize>>) {
	let builds = Rc::new(Cell::new(0_usize));
	let consumer = Builder::consume::<(Notifier,), _>({
		let builds = Rc::clone(&builds);
		move |_, _| {
			builds.set(builds.get() + 1);
			Ok(Empty.into_child())
		}
	})
	.into_child();

	(consumer, builds)
}

#[test]
fn mutations_coalesce() {
	let notifier = Notifier::new();
	let (consumer, builds) = counter();
	let provider = || ListenableProvider::value(notifier.clone(), Rc::clone(&consumer)).into_child();

	let mut tree = Tree::new();
	tree.render(provider()).expect("Unable to mount");
	assert_eq!(builds.get(), 1);

	notifier.notify();
	notifier.notify();
	notifier.notify();
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2, "Mutations weren't coalesced into a single rebuild");

	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2, "Pumping without mutations rebuilt dependents");

	tree.render(provider()).expect("Unable to update");
	assert_eq!(builds.get(), 2, "Ambient rebuild notified dependents");
}

#[test]
fn swap_instances() {
	let a = Notifier::new();
	let b = Notifier::new();
	let (consumer, builds) = counter();

	let mut tree = Tree::new();
	tree.render(ListenableProvider::value(a.clone(), Rc::clone(&consumer)).into_child())
		.expect("Unable to mount");
	assert_eq!(a.listener_count(), 1);

	tree.render(ListenableProvider::value(b.clone(), Rc::clone(&consumer)).into_child())
		.expect("Unable to update");
	assert_eq!(builds.get(), 2, "Swapping instances didn't notify dependents");
	assert_eq!((a.listener_count(), b.listener_count()), (0, 1));

	a.notify();
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2, "Old instance still notified dependents");

	b.notify();
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 3, "New instance didn't notify dependents");
}

#[test]
fn unmount_unsubscribes() {
	let notifier = Notifier::new();
	let (consumer, _builds) = counter();

	let mut tree = Tree::new();
	tree.render(ListenableProvider::value(notifier.clone(), consumer).into_child())
		.expect("Unable to mount");
	tree.unmount();

	assert_eq!(notifier.listener_count(), 0, "Listener outlived the provider");
	assert!(!notifier.is_disposed(), "Caller-owned listenable was disposed");
}

#[test]
fn owning_disposes() {
	let built = Rc::new(RefCell::new(None));
	let (consumer, builds) = counter();
	let node = ListenableProvider::owning(
		{
			let built = Rc::clone(&built);
			move |_| {
				let notifier = Notifier::new();
				*built.borrow_mut() = Some(notifier.clone());
				notifier
			}
		},
		consumer,
	)
	.into_child();

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	let notifier = built.borrow().clone().expect("Listenable wasn't built");

	notifier.notify();
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2);

	drop(tree);
	assert!(notifier.is_disposed(), "Built listenable wasn't disposed");
	assert_eq!(notifier.listener_count(), 0);
}

#[test]
fn builder_custom_disposer() {
	let disposed = Rc::new(Cell::new(0_usize));
	let node = ListenableProvider::new(|_| Notifier::new(), Empty.into_child())
		.with_dispose({
			let disposed = Rc::clone(&disposed);
			move |_, _| disposed.set(disposed.get() + 1)
		})
		.expect("Builder provider rejected its disposer")
		.into_child();

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	tree.unmount();
	tree.unmount();
	assert_eq!(disposed.get(), 1);
}

/// Listenable comparing by its tag, rather than by identity
#[derive(Clone, Debug)]
struct Tagged {
	notifier: Notifier,
	tag:      u32,
}

impl PartialEq for Tagged {
	fn eq(&self, other: &Self) -> bool {
		self.tag == other.tag
	}
}

impl Listenable for Tagged {
	fn add_listener(&self, listener: Listener) {
		self.notifier.add_listener(listener);
	}

	fn remove_listener(&self, listener: &Listener) {
		self.notifier.remove_listener(listener);
	}
}

#[test]
fn swap_to_equal_instance_resubscribes() {
	let built = Rc::new(RefCell::new(None));
	let builds = Rc::new(Cell::new(0_usize));
	let consumer = Builder::consume::<(Tagged,), _>({
		let builds = Rc::clone(&builds);
		move |_, _| {
			builds.set(builds.get() + 1);
			Ok(Empty.into_child())
		}
	})
	.into_child();

	let node = ListenableProvider::new(
		{
			let built = Rc::clone(&built);
			move |_| {
				let tagged = Tagged {
					notifier: Notifier::new(),
					tag:      1,
				};
				*built.borrow_mut() = Some(tagged.clone());
				tagged
			}
		},
		Rc::clone(&consumer),
	)
	.into_child();
	let adopted = Tagged {
		notifier: Notifier::new(),
		tag:      1,
	};

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	tree.render(ListenableProvider::value(adopted.clone(), consumer).into_child())
		.expect("Unable to update");

	let built = built.borrow().clone().expect("Listenable wasn't built");
	assert_eq!(built.notifier.listener_count(), 0, "Replaced instance is still listened to");
	assert_eq!(adopted.notifier.listener_count(), 1, "Equal instance wasn't subscribed to");
	assert_eq!(builds.get(), 1);

	adopted.notifier.notify();
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2, "Equal instance didn't notify dependents");
}
