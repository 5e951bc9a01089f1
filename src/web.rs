//! Browser DOM through [`web_sys`].
//!
//! Errors are the [`JsValue`]s thrown by the browser.

use crate::dom::{Dom, DomElement};
use tracing::{instrument, warn};
use wasm_bindgen::{JsCast, JsValue};

/// Creates nodes in a specific [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document).
#[derive(Debug, Clone)]
pub struct WebDom {
	document: web_sys::Document,
}

impl WebDom {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

impl From<web_sys::Document> for WebDom {
	fn from(document: web_sys::Document) -> Self {
		Self::new(document)
	}
}

impl Dom for WebDom {
	type Node = web_sys::Node;
	type Element = web_sys::Element;
	type Error = JsValue;

	fn create_element(&self, name: &str) -> Result<Self::Element, Self::Error> {
		self.document.create_element(name)
	}

	fn create_text_node(&self, data: &str) -> Self::Node {
		self.document.create_text_node(data).into()
	}
}

impl DomElement for web_sys::Element {
	type Node = web_sys::Node;
	type Error = JsValue;

	fn name(&self) -> String {
		self.local_name()
	}

	fn attribute_names(&self) -> Vec<String> {
		self.get_attribute_names().iter().filter_map(|name| name.as_string()).collect()
	}

	fn attribute_entries(&self) -> Vec<(String, String)> {
		let attributes = self.attributes();
		(0..attributes.length())
			.filter_map(|i| attributes.item(i))
			.map(|attribute| (attribute.name(), attribute.value()))
			.collect()
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		web_sys::Element::get_attribute(self, name)
	}

	fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
		web_sys::Element::set_attribute(self, name, value)
	}

	fn remove_attribute(&mut self, name: &str) -> Result<(), Self::Error> {
		web_sys::Element::remove_attribute(self, name)
	}

	#[instrument(skip(self))]
	fn deep_clone(&self) -> Result<Self, Self::Error> {
		let clone = self.clone_node_with_deep(true)?;
		clone.dyn_into::<web_sys::Element>().map_err(|node| {
			warn!("Cloning an element produced a non-element node: {:?}", node);
			js_sys::Error::new("Cloned node is not an element").into()
		})
	}

	fn append_child(&mut self, child: Self::Node) -> Result<(), Self::Error> {
		web_sys::Node::append_child(self, &child).map(drop)
	}

	fn into_node(self) -> Self::Node {
		self.into()
	}

	fn outer_html(&self) -> String {
		web_sys::Element::outer_html(self)
	}
}
