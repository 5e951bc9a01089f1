//! A self-contained DOM that serializes to HTML markup.
//!
//! This is what element trees convert into outside of a browser.
//! Names are checked roughly like [***createElement***](https://developer.mozilla.org/en-US/docs/Web/API/Document/createElement) does,
//! but are otherwise stored exactly as given.

use crate::dom::{Dom, DomElement};
use core::fmt::{self, Display, Formatter, Write as _};
use std::borrow::Cow;

/// Creates [`MemoryElement`]s and text [`MemoryNode`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryDom;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryDomError {
	#[error("Name is empty")]
	EmptyName,
	#[error("Name {name:?} contains invalid character {ch:?}")]
	InvalidCharacter { name: String, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryNode {
	Element(MemoryElement),
	Text(String),
}

/// Element data. [`Clone`] is deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
	name: String,
	attributes: Vec<(String, String)>,
	children: Vec<MemoryNode>,
}

impl Dom for MemoryDom {
	type Node = MemoryNode;
	type Element = MemoryElement;
	type Error = MemoryDomError;

	fn create_element(&self, name: &str) -> Result<Self::Element, Self::Error> {
		validate_name(name)?;
		Ok(MemoryElement {
			name: name.to_owned(),
			attributes: Vec::new(),
			children: Vec::new(),
		})
	}

	fn create_text_node(&self, data: &str) -> Self::Node {
		MemoryNode::Text(data.to_owned())
	}
}

impl DomElement for MemoryElement {
	type Node = MemoryNode;
	type Error = MemoryDomError;

	fn name(&self) -> String {
		self.name.clone()
	}

	fn attribute_names(&self) -> Vec<String> {
		self.attributes.iter().map(|(name, _)| name.clone()).collect()
	}

	fn attribute_entries(&self) -> Vec<(String, String)> {
		self.attributes.clone()
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		self.attribute(name).map(ToOwned::to_owned)
	}

	fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
		validate_name(name)?;
		match self.attributes.iter_mut().find(|(n, _)| n == name) {
			Some((_, existing)) => value.clone_into(existing),
			None => self.attributes.push((name.to_owned(), value.to_owned())),
		}
		Ok(())
	}

	fn remove_attribute(&mut self, name: &str) -> Result<(), Self::Error> {
		self.attributes.retain(|(n, _)| n != name);
		Ok(())
	}

	fn deep_clone(&self) -> Result<Self, Self::Error> {
		Ok(self.clone())
	}

	fn append_child(&mut self, child: Self::Node) -> Result<(), Self::Error> {
		self.children.push(child);
		Ok(())
	}

	fn into_node(self) -> Self::Node {
		MemoryNode::Element(self)
	}

	fn outer_html(&self) -> String {
		self.to_string()
	}
}

impl MemoryElement {
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(n, _)| n == name).map(|(_, value)| value.as_str())
	}

	pub fn attributes(&self) -> impl '_ + ExactSizeIterator<Item = (&str, &str)> {
		self.attributes.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	#[must_use]
	pub fn children(&self) -> &[MemoryNode] {
		&self.children
	}

	/// Whether this element never has content or an end tag in HTML.
	#[must_use]
	pub fn is_void(&self) -> bool {
		is_void_element(&self.name)
	}

	#[must_use]
	pub fn outer_html(&self) -> String {
		self.to_string()
	}

	/// Whether text children are serialized without escaping, like inside [***script***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script).
	#[must_use]
	pub fn is_raw_text(&self) -> bool {
		is_raw_text_element(&self.name)
	}

	#[must_use]
	pub fn inner_html(&self) -> String {
		InnerHtml(self).to_string()
	}
}

impl MemoryNode {
	#[must_use]
	pub fn as_element(&self) -> Option<&MemoryElement> {
		match self {
			MemoryNode::Element(element) => Some(element),
			MemoryNode::Text(_) => None,
		}
	}

	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			MemoryNode::Element(_) => None,
			MemoryNode::Text(text) => Some(text),
		}
	}

	#[must_use]
	pub fn outer_html(&self) -> String {
		self.to_string()
	}
}

impl Display for MemoryElement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.name)?;
		for (name, value) in &self.attributes {
			write!(f, " {}=\"{}\"", name, escape_attribute_value(value))?;
		}
		f.write_char('>')?;
		if self.is_void() {
			return Ok(());
		}
		Display::fmt(&InnerHtml(self), f)?;
		write!(f, "</{}>", self.name)
	}
}

/// The serialized children of an element.
struct InnerHtml<'a>(&'a MemoryElement);

impl Display for InnerHtml<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let raw_text = self.0.is_raw_text();
		for child in &self.0.children {
			match child {
				MemoryNode::Text(text) if raw_text => f.write_str(text)?,
				child => Display::fmt(child, f)?,
			}
		}
		Ok(())
	}
}

impl Display for MemoryNode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			MemoryNode::Element(element) => Display::fmt(element, f),
			MemoryNode::Text(text) => f.write_str(&escape_text(text)),
		}
	}
}

fn validate_name(name: &str) -> Result<(), MemoryDomError> {
	let mut chars = name.chars();
	let first = chars.next().ok_or(MemoryDomError::EmptyName)?;
	if !is_name_start_char(first) {
		return Err(MemoryDomError::InvalidCharacter { name: name.to_owned(), ch: first });
	}
	match chars.find(|&c| !is_name_char(c)) {
		Some(ch) => Err(MemoryDomError::InvalidCharacter { name: name.to_owned(), ch }),
		None => Ok(()),
	}
}

fn is_name_start_char(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_' || c == ':' || (!c.is_ascii() && c.is_alphabetic())
}

fn is_name_char(c: char) -> bool {
	is_name_start_char(c) || c.is_ascii_digit() || c == '-' || c == '.' || (!c.is_ascii() && c.is_alphanumeric())
}

fn is_void_element(name: &str) -> bool {
	matches!(
		name.to_ascii_lowercase().as_str(),
		"area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta" | "param" | "source" | "track" | "wbr"
	)
}

fn is_raw_text_element(name: &str) -> bool {
	matches!(
		name.to_ascii_lowercase().as_str(),
		"iframe" | "noembed" | "noframes" | "noscript" | "plaintext" | "script" | "style" | "xmp"
	)
}

fn escape_text(text: &str) -> Cow<'_, str> {
	escape(text, |c| matches!(c, '&' | '<' | '>'))
}

fn escape_attribute_value(value: &str) -> Cow<'_, str> {
	escape(value, |c| matches!(c, '&' | '<' | '>' | '"'))
}

fn escape(s: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
	if !s.contains(&needs_escape) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' if needs_escape(c) => escaped.push_str("&amp;"),
			'<' if needs_escape(c) => escaped.push_str("&lt;"),
			'>' if needs_escape(c) => escaped.push_str("&gt;"),
			'"' if needs_escape(c) => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_nested_elements() {
		let mut outer = MemoryDom.create_element("p").unwrap();
		let mut inner = MemoryDom.create_element("b").unwrap();
		inner.append_child(MemoryDom.create_text_node("x")).unwrap();
		outer.append_child(inner.into_node()).unwrap();
		assert_eq!(outer.outer_html(), "<p><b>x</b></p>");
		assert_eq!(outer.inner_html(), "<b>x</b>");
	}

	#[test]
	fn escapes_text_and_attribute_values() {
		let mut element = MemoryDom.create_element("a").unwrap();
		element.set_attribute("title", r#"say "hi" & <bye>"#).unwrap();
		element.append_child(MemoryDom.create_text_node("1 < 2 & \"ok\"")).unwrap();
		assert_eq!(element.outer_html(), r#"<a title="say &quot;hi&quot; &amp; &lt;bye&gt;">1 &lt; 2 &amp; "ok"</a>"#);
	}

	#[test]
	fn raw_text_elements_keep_their_text() {
		let mut script = MemoryDom.create_element("script").unwrap();
		script.append_child(MemoryDom.create_text_node("if (a < b && c) {}")).unwrap();
		assert!(script.is_raw_text());
		assert_eq!(script.outer_html(), "<script>if (a < b && c) {}</script>");
		assert_eq!(script.inner_html(), "if (a < b && c) {}");

		let mut style = MemoryDom.create_element("style").unwrap();
		style.append_child(MemoryDom.create_text_node("a > b { content: \"&\" }")).unwrap();
		assert_eq!(style.outer_html(), "<style>a > b { content: \"&\" }</style>");

		// Only direct text children are raw. Escaping applies again below other elements.
		let mut noscript = MemoryDom.create_element("noscript").unwrap();
		let mut p = MemoryDom.create_element("p").unwrap();
		p.append_child(MemoryDom.create_text_node("<b>")).unwrap();
		noscript.append_child(p.into_node()).unwrap();
		assert_eq!(noscript.outer_html(), "<noscript><p>&lt;b&gt;</p></noscript>");
	}

	#[test]
	fn inner_html_escapes_like_outer_html() {
		let mut div = MemoryDom.create_element("div").unwrap();
		div.append_child(MemoryDom.create_text_node("a < b")).unwrap();
		div.append_child(MemoryDom.create_element("br").unwrap().into_node()).unwrap();
		assert_eq!(div.inner_html(), "a &lt; b<br>");
	}

	#[test]
	fn void_elements_have_no_end_tag() {
		let mut element = MemoryDom.create_element("img").unwrap();
		element.set_attribute("src", "a.png").unwrap();
		assert_eq!(element.outer_html(), r#"<img src="a.png">"#);
	}

	#[test]
	fn set_attribute_replaces_in_place() {
		let mut element = MemoryDom.create_element("div").unwrap();
		element.set_attribute("id", "a").unwrap();
		element.set_attribute("title", "t").unwrap();
		element.set_attribute("id", "b").unwrap();
		assert_eq!(element.attribute_names(), ["id", "title"]);
		assert_eq!(element.attribute_entries(), [("id".to_owned(), "b".to_owned()), ("title".to_owned(), "t".to_owned())]);
		assert_eq!(element.get_attribute("id").as_deref(), Some("b"));

		element.remove_attribute("id").unwrap();
		element.remove_attribute("id").unwrap();
		assert_eq!(element.attribute_names(), ["title"]);
	}

	#[test]
	fn rejects_invalid_names() {
		assert_eq!(MemoryDom.create_element(""), Err(MemoryDomError::EmptyName));
		assert_eq!(
			MemoryDom.create_element("1div"),
			Err(MemoryDomError::InvalidCharacter { name: "1div".to_owned(), ch: '1' })
		);
		assert_eq!(
			MemoryDom.create_element("my element"),
			Err(MemoryDomError::InvalidCharacter { name: "my element".to_owned(), ch: ' ' })
		);

		let mut element = MemoryDom.create_element("custom-element").unwrap();
		assert!(element.set_attribute("data-x", "").is_ok());
		assert!(matches!(element.set_attribute("a=b", ""), Err(MemoryDomError::InvalidCharacter { ch: '=', .. })));
	}

	#[test]
	fn deep_clone_is_independent() {
		let mut original = MemoryDom.create_element("ul").unwrap();
		original.append_child(MemoryDom.create_element("li").unwrap().into_node()).unwrap();

		let mut copy = original.deep_clone().unwrap();
		copy.set_attribute("id", "copy").unwrap();
		copy.append_child(MemoryDom.create_text_node("more")).unwrap();

		assert_eq!(original.outer_html(), "<ul><li></li></ul>");
		assert_eq!(copy.outer_html(), r#"<ul id="copy"><li></li>more</ul>"#);
	}
}
