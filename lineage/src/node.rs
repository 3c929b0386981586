//! Nodes
//!
//! Nodes are the immutable configuration of a tree. The tree never
//! mutates a node, it replaces it with a new one, and each node creates
//! the [`Element`] that holds its state while mounted.

// Imports
use {
	crate::Element,
	core::any::{self, Any, TypeId},
	std::rc::Rc,
};

/// A node shared within the tree
pub type Child = Rc<dyn Node>;

/// Node
pub trait Node: Any + IntoAny {
	/// Creates the element for this node.
	///
	/// The element isn't mounted yet.
	fn create_element(self: Rc<Self>) -> Box<dyn Element>;
}

/// Nodes with a single child
pub trait SingleChildNode: Node {
	/// Returns the child of this node
	fn child(&self) -> &Child;

	/// Returns an equivalent node with `child` as its child
	fn clone_with_child(&self, child: Child) -> Child;
}

/// Conversion into `Rc<dyn Any>`
pub trait IntoAny {
	/// Converts this into `Rc<dyn Any>`
	fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> IntoAny for T {
	fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
		self
	}
}

/// Extension trait for nodes
#[extend::ext(name = NodeExt)]
pub impl<N> N
where
	N: Node,
{
	/// Shares this node as a child
	fn into_child(self) -> Child {
		Rc::new(self)
	}
}

/// Returns the concrete type of `node`
pub(crate) fn type_of(node: &Child) -> TypeId {
	Any::type_id(&**node)
}

/// Returns if `lhs` and `rhs` are the same node
pub(crate) fn same(lhs: &Child, rhs: &Child) -> bool {
	core::ptr::addr_eq(Rc::as_ptr(lhs), Rc::as_ptr(rhs))
}

/// Downcasts `node` to its concrete type.
///
/// # Panics
/// Panics if `node` isn't a `N`.
pub(crate) fn downcast<N: Node>(node: Child) -> Rc<N> {
	node.into_any()
		.downcast::<N>()
		.unwrap_or_else(|_| panic!("Node was the wrong type, expected {:?}", any::type_name::<N>()))
}

#[cfg(test)]
mod test {
	// Imports
	use {
		super::*,
		crate::{Builder, Empty},
	};

	#[test]
	fn type_of_concrete() {
		let empty = Empty.into_child();
		let builder = Builder::new(|_| Ok(Empty.into_child())).into_child();

		assert_eq!(super::type_of(&empty), TypeId::of::<Empty>());
		assert_eq!(super::type_of(&builder), TypeId::of::<Builder>());
		assert!(super::same(&empty, &Rc::clone(&empty)));
		assert!(!super::same(&empty, &Empty.into_child()));

		let _: Rc<Empty> = super::downcast(empty);
	}
}
