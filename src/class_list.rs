//! Ordered, duplicate-free CSS class tokens.

use core::{convert::Infallible, fmt, str::FromStr};
use hashbrown::HashSet;

/// An ordered set of CSS class tokens.
///
/// Tokens keep the order in which they were first added and are never duplicated,
/// so [`render`](`ClassList::render`) always produces a valid [***class***](https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/class) value.
///
/// ```
/// use tag_maker::ClassList;
///
/// let mut classes = ClassList::new();
/// classes.add("a");
/// classes.add("a");
/// classes.add("b");
/// assert_eq!(classes.render(), "a b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassList {
	tokens: Vec<String>,
	present: HashSet<String>,
}

impl ClassList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `token` unless it is already present.
	///
	/// Empty tokens and tokens containing ASCII whitespace are ignored, since they can't be represented in a space-separated list.
	pub fn add(&mut self, token: &str) {
		if token.is_empty() || token.contains(|c: char| c.is_ascii_whitespace()) {
			return;
		}
		if self.present.insert(token.to_owned()) {
			self.tokens.push(token.to_owned());
		}
	}

	pub fn remove(&mut self, token: &str) {
		if self.present.remove(token) {
			self.tokens.retain(|t| t != token);
		}
	}

	#[must_use]
	pub fn contains(&self, token: &str) -> bool {
		self.present.contains(token)
	}

	/// Number of distinct tokens.
	#[must_use]
	pub fn count(&self) -> usize {
		self.tokens.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> impl '_ + ExactSizeIterator<Item = &str> {
		self.tokens.iter().map(String::as_str)
	}

	/// The tokens joined by single spaces, in insertion order. Empty if there are none.
	#[must_use]
	pub fn render(&self) -> String {
		self.tokens.join(" ")
	}
}

impl PartialEq for ClassList {
	fn eq(&self, other: &Self) -> bool {
		self.tokens == other.tokens
	}
}
impl Eq for ClassList {}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, token) in self.tokens.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			f.write_str(token)?;
		}
		Ok(())
	}
}

impl<'a> Extend<&'a str> for ClassList {
	fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
		for token in iter {
			self.add(token);
		}
	}
}

impl<'a> FromIterator<&'a str> for ClassList {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		let mut classes = Self::new();
		classes.extend(iter);
		classes
	}
}

/// Splits a [***class***](https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/class) attribute value on ASCII whitespace.
impl FromStr for ClassList {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(s.split_ascii_whitespace().collect())
	}
}
