//! A small builder for HTML element trees.
//!
//! [`TagElement`]s with attributes, CSS classes and child content are converted into the nodes of a [`Dom`](`dom::Dom`) implementation,
//! which also serializes them:
//!
//! - [`memory::MemoryDom`] is self-contained and serializes to HTML markup directly.
//! - [`web::WebDom`] creates browser nodes through [`web_sys`].
//!
//! The [`tags`] module has a shorthand constructor for each standard HTML tag.

#![doc(html_root_url = "https://docs.rs/tag-maker/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod class_list;
pub mod dom;
pub mod memory;
mod node;
mod tag;
pub mod tags;
pub mod web;

pub use class_list::ClassList;
pub use node::{Content, Node, TextNode, ToDomNode};
pub use tag::TagElement;
