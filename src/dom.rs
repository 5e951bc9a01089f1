//! The DOM implementation that element trees are converted into.
//!
//! Element creation, attribute storage, cloning and serialization all happen on this side of the boundary.
//! Two implementations ship with this crate: [`MemoryDom`](`crate::memory::MemoryDom`) and [`WebDom`](`crate::web::WebDom`).

use core::fmt::Debug;

/// Creates nodes. Passed by reference wherever a tree needs new DOM nodes.
pub trait Dom {
	/// Any node that can be appended to an element.
	type Node;
	type Element: DomElement<Node = Self::Node, Error = Self::Error>;
	/// Whatever the implementation raises. It's passed through unchanged by this crate.
	type Error: Debug;

	/// # Errors
	///
	/// Iff the implementation rejects `name`.
	fn create_element(&self, name: &str) -> Result<Self::Element, Self::Error>;

	/// Creates a text node holding `data` verbatim. Escaping is left to serialization.
	fn create_text_node(&self, data: &str) -> Self::Node;
}

/// An element owned by a [`Dom`] implementation.
pub trait DomElement: Sized {
	type Node;
	type Error: Debug;

	/// The element's local name.
	fn name(&self) -> String;

	/// Names of all attributes, in the implementation's order.
	fn attribute_names(&self) -> Vec<String>;

	/// Name/value pairs of all attributes, in the implementation's order.
	fn attribute_entries(&self) -> Vec<(String, String)>;

	fn get_attribute(&self, name: &str) -> Option<String>;

	/// # Errors
	///
	/// Iff the implementation rejects `name` or `value`.
	fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

	/// Removing an absent attribute succeeds without effect.
	///
	/// # Errors
	///
	/// Iff the implementation rejects the removal.
	fn remove_attribute(&mut self, name: &str) -> Result<(), Self::Error>;

	/// A copy including all attributes and descendants that can be modified independently of `self`.
	///
	/// # Errors
	///
	/// Iff the implementation fails to clone the element.
	fn deep_clone(&self) -> Result<Self, Self::Error>;

	/// # Errors
	///
	/// Iff the implementation rejects `child` as child of this element.
	fn append_child(&mut self, child: Self::Node) -> Result<(), Self::Error>;

	fn into_node(self) -> Self::Node;

	/// Serializes the element, including itself, to HTML.
	fn outer_html(&self) -> String;
}
