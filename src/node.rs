use crate::{
	dom::{Dom, DomElement},
	tag::TagElement,
};
use core::fmt::{self, Debug, Formatter};
use tracing::trace;

/// Anything that can produce an equivalent node in a [`Dom`].
pub trait ToDomNode<D: Dom> {
	/// The produced node: [`Dom::Node`] or [`Dom::Element`].
	type Output;

	/// Converts `self` without modifying it. May be called any number of times.
	///
	/// # Errors
	///
	/// Whatever `dom` raises, unchanged.
	fn to_dom_node(&self, dom: &D) -> Result<Self::Output, D::Error>;
}

/// A leaf holding literal text.
///
/// Escaping is left to the [`Dom`]'s serializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
	text: String,
}

impl TextNode {
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	#[must_use]
	pub fn make(text: impl Into<String>) -> Self {
		Self::new(text)
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}
}

impl<D: Dom> ToDomNode<D> for TextNode {
	type Output = D::Node;

	fn to_dom_node(&self, dom: &D) -> Result<D::Node, D::Error> {
		if cfg!(feature = "dangerous-logging") {
			trace!("Creating text node {:?}", self.text);
		} else {
			trace!("Creating text node ({} bytes)", self.text.len());
		}
		Ok(dom.create_text_node(&self.text))
	}
}

/// A child of a [`TagElement`].
pub enum Node<D: Dom> {
	Tag(TagElement<D>),
	Text(TextNode),
}

impl<D: Dom> Node<D> {
	#[must_use]
	pub fn as_tag(&self) -> Option<&TagElement<D>> {
		match self {
			Node::Tag(tag) => Some(tag),
			Node::Text(_) => None,
		}
	}

	#[must_use]
	pub fn as_text(&self) -> Option<&TextNode> {
		match self {
			Node::Tag(_) => None,
			Node::Text(text) => Some(text),
		}
	}

	/// See [`TagElement::try_clone`].
	///
	/// # Errors
	///
	/// Iff the [`Dom`] fails to clone an element.
	pub fn try_clone(&self) -> Result<Self, D::Error> {
		Ok(match self {
			Node::Tag(tag) => Node::Tag(tag.try_clone()?),
			Node::Text(text) => Node::Text(text.clone()),
		})
	}
}

impl<D: Dom> ToDomNode<D> for Node<D> {
	type Output = D::Node;

	fn to_dom_node(&self, dom: &D) -> Result<D::Node, D::Error> {
		match self {
			Node::Tag(tag) => tag.to_dom_node(dom).map(DomElement::into_node),
			Node::Text(text) => text.to_dom_node(dom),
		}
	}
}

impl<D: Dom> From<TagElement<D>> for Node<D> {
	fn from(tag: TagElement<D>) -> Self {
		Node::Tag(tag)
	}
}

impl<D: Dom> From<TextNode> for Node<D> {
	fn from(text: TextNode) -> Self {
		Node::Text(text)
	}
}

impl<D: Dom> PartialEq for Node<D>
where
	TagElement<D>: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Node::Tag(a), Node::Tag(b)) => a == b,
			(Node::Text(a), Node::Text(b)) => a == b,
			_ => false,
		}
	}
}

impl<D: Dom> Debug for Node<D>
where
	TagElement<D>: Debug,
{
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Node::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
		}
	}
}

/// Child content as accepted by [`TagElement::make`]: Either raw text or a node.
///
/// Raw text becomes a [`TextNode`] when the element is constructed.
pub enum Content<D: Dom> {
	Text(String),
	Node(Node<D>),
}

impl<D: Dom> Content<D> {
	#[must_use]
	pub fn into_node(self) -> Node<D> {
		match self {
			Content::Text(text) => Node::Text(TextNode::make(text)),
			Content::Node(node) => node,
		}
	}
}

impl<D: Dom> From<&str> for Content<D> {
	fn from(text: &str) -> Self {
		Content::Text(text.to_owned())
	}
}

impl<D: Dom> From<String> for Content<D> {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

impl<D: Dom> From<TextNode> for Content<D> {
	fn from(text: TextNode) -> Self {
		Content::Node(Node::Text(text))
	}
}

impl<D: Dom> From<TagElement<D>> for Content<D> {
	fn from(tag: TagElement<D>) -> Self {
		Content::Node(Node::Tag(tag))
	}
}

impl<D: Dom> From<Node<D>> for Content<D> {
	fn from(node: Node<D>) -> Self {
		Content::Node(node)
	}
}

/// Collects mixed child content into a [`Vec<Content<_>>`](`Content`).
///
/// ```
/// use tag_maker::{children, memory::MemoryDom, TagElement};
///
/// let dom = MemoryDom;
/// let p = TagElement::make(&dom, "p", children!["Hello, ", TagElement::make(&dom, "b", ["world"])?, "!"])?;
/// assert_eq!(p.to_html(&dom)?, "<p>Hello, <b>world</b>!</p>");
/// # Ok::<(), tag_maker::memory::MemoryDomError>(())
/// ```
#[macro_export]
macro_rules! children {
	($($child:expr),* $(,)?) => {
		::std::vec![$($crate::Content::from($child)),*]
	};
}
