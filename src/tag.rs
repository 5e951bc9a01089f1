use crate::{
	class_list::ClassList,
	dom::{Dom, DomElement},
	node::{Content, Node, ToDomNode},
};
use core::{
	fmt::{self, Debug, Formatter},
	iter,
};
use tracing::{error, instrument, trace, trace_span, warn};

/// A named HTML element with attributes, CSS classes and an ordered list of children.
///
/// Attributes live on a template element owned by the [`Dom`] implementation,
/// while children and classes are kept here and only combined with a copy of that template in [`to_dom_node`](`ToDomNode::to_dom_node`).
///
/// The `class` attribute of the output is [`classes`](`TagElement::classes`) rendered, iff there are any classes.
/// With an empty class list, a `class` attribute stored through [`set_attribute`](`TagElement::set_attribute`) is output unchanged instead.
/// Use the class accessors to keep the two from diverging.
///
/// ```
/// use tag_maker::{memory::MemoryDom, TagElement};
///
/// let dom = MemoryDom;
/// let mut div = TagElement::make(&dom, "div", ["hello"])?;
/// div.add_class("greeting");
/// div.set_attribute("id", "x")?;
/// assert_eq!(div.to_html(&dom)?, r#"<div id="x" class="greeting">hello</div>"#);
/// # Ok::<(), tag_maker::memory::MemoryDomError>(())
/// ```
pub struct TagElement<D: Dom> {
	element: D::Element,
	children: Vec<Node<D>>,
	classes: ClassList,
}

impl<D: Dom> TagElement<D> {
	/// Creates an element named `tag_name` with `children` in order.
	///
	/// Raw text children become [`TextNode`](`crate::TextNode`)s.
	///
	/// # Errors
	///
	/// Iff `dom` rejects `tag_name`.
	pub fn make<C: Into<Content<D>>>(dom: &D, tag_name: &str, children: impl IntoIterator<Item = C>) -> Result<Self, D::Error> {
		let element = match dom.create_element(tag_name) {
			Ok(element) => element,
			Err(error) => {
				warn!("Failed to create element <{}>: {:?}", tag_name, error);
				return Err(error);
			}
		};
		Ok(Self {
			element,
			children: children.into_iter().map(|child| Into::<Content<D>>::into(child).into_node()).collect(),
			classes: ClassList::new(),
		})
	}

	/// An element without children.
	///
	/// # Errors
	///
	/// Iff `dom` rejects `tag_name`.
	pub fn empty(dom: &D, tag_name: &str) -> Result<Self, D::Error> {
		Self::make(dom, tag_name, iter::empty::<Content<D>>())
	}

	/// Same as [`make`](`TagElement::make`).
	///
	/// # Errors
	///
	/// Iff `dom` rejects `tag_name`.
	pub fn new<C: Into<Content<D>>>(dom: &D, tag_name: &str, children: impl IntoIterator<Item = C>) -> Result<Self, D::Error> {
		Self::make(dom, tag_name, children)
	}

	#[must_use]
	pub fn name(&self) -> String {
		self.element.name()
	}

	/// Replaces the template element with one named `tag_name`, copying each attribute by name and value.
	///
	/// Children and classes aren't stored on the template, so they are kept as they are.
	///
	/// # Errors
	///
	/// Iff `dom` rejects `tag_name` or one of the copied attributes.
	/// `self` is unchanged in that case.
	#[instrument(skip(self, dom), fields(from = %self.element.name()))]
	pub fn set_name(&mut self, dom: &D, tag_name: &str) -> Result<&mut Self, D::Error> {
		let mut element = dom.create_element(tag_name)?;
		for (name, value) in self.element.attribute_entries() {
			trace!("Copying attribute {:?}", name);
			if let Err(error) = element.set_attribute(&name, &value) {
				warn!("Failed to copy attribute {:?} to <{}>: {:?}", name, tag_name, error);
				return Err(error);
			}
		}
		self.element = element;
		Ok(self)
	}

	#[must_use]
	pub fn children(&self) -> &[Node<D>] {
		&self.children
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.element.get_attribute(name)
	}

	#[must_use]
	pub fn has_attribute(&self, name: &str) -> bool {
		self.element.get_attribute(name).is_some()
	}

	/// Names of all stored attributes. Doesn't include the `class` attribute produced from [`classes`](`TagElement::classes`).
	#[must_use]
	pub fn attribute_names(&self) -> Vec<String> {
		self.element.attribute_names()
	}

	/// Note that a stored `class` attribute is overwritten during conversion unless [`classes`](`TagElement::classes`) is empty.
	///
	/// # Errors
	///
	/// Iff the [`Dom`] rejects the attribute.
	pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<&mut Self, D::Error> {
		self.element.set_attribute(name, value)?;
		Ok(self)
	}

	/// # Errors
	///
	/// Iff the [`Dom`] rejects the removal.
	pub fn remove_attribute(&mut self, name: &str) -> Result<&mut Self, D::Error> {
		self.element.remove_attribute(name)?;
		Ok(self)
	}

	#[must_use]
	pub fn classes(&self) -> &ClassList {
		&self.classes
	}

	pub fn classes_mut(&mut self) -> &mut ClassList {
		&mut self.classes
	}

	pub fn add_class(&mut self, token: &str) -> &mut Self {
		self.classes.add(token);
		self
	}

	pub fn remove_class(&mut self, token: &str) -> &mut Self {
		self.classes.remove(token);
		self
	}

	#[must_use]
	pub fn has_class(&self, token: &str) -> bool {
		self.classes.contains(token)
	}

	#[must_use]
	pub fn class_count(&self) -> usize {
		self.classes.count()
	}

	#[must_use]
	pub fn with_class(mut self, token: &str) -> Self {
		self.classes.add(token);
		self
	}

	/// A deep copy, including a copy of the template element made with [`DomElement::deep_clone`].
	///
	/// # Errors
	///
	/// Iff the [`Dom`] fails to clone an element.
	pub fn try_clone(&self) -> Result<Self, D::Error> {
		Ok(Self {
			element: self.element.deep_clone()?,
			children: self.children.iter().map(Node::try_clone).collect::<Result<_, _>>()?,
			classes: self.classes.clone(),
		})
	}

	/// Converts `self` and serializes the result with the [`Dom`]'s serializer.
	///
	/// # Errors
	///
	/// Whatever `dom` raises during conversion.
	pub fn to_html(&self, dom: &D) -> Result<String, D::Error> {
		Ok(self.to_dom_node(dom)?.outer_html())
	}
}

impl<D: Dom> ToDomNode<D> for TagElement<D> {
	type Output = D::Element;

	/// Copies the template element, sets `class` if there are any classes and appends the converted children in order.
	#[instrument(skip(self, dom), fields(name = %self.element.name(), children = self.children.len()))]
	fn to_dom_node(&self, dom: &D) -> Result<D::Element, D::Error> {
		let mut element = self.element.deep_clone()?;
		if !self.classes.is_empty() {
			let class = self.classes.render();
			if cfg!(feature = "dangerous-logging") {
				trace!("Setting class {:?}", class);
			} else {
				trace!("Setting {} class(es)", self.classes.count());
			}
			element.set_attribute("class", &class)?;
		}
		for (i, child) in self.children.iter().enumerate() {
			let span = trace_span!("Appending child", i);
			let _enter = span.enter();
			let node = child.to_dom_node(dom)?;
			if let Err(error) = element.append_child(node) {
				error!("Failed to append child {}: {:?}", i, error);
				return Err(error);
			}
		}
		Ok(element)
	}
}

impl<D: Dom> PartialEq for TagElement<D>
where
	D::Element: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.element == other.element && self.classes == other.classes && self.children == other.children
	}
}

impl<D: Dom> Debug for TagElement<D>
where
	D::Element: Debug,
{
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("TagElement")
			.field("element", &self.element)
			.field("children", &self.children)
			.field("classes", &self.classes)
			.finish()
	}
}
