//! Shorthand constructors, one per standard HTML tag.
//!
//! `tags::article(&dom, children)` is the same as `TagElement::make(&dom, "article", children)`.
//!
//! ```
//! use tag_maker::{memory::MemoryDom, tags};
//!
//! let dom = MemoryDom;
//! let list = tags::ul(&dom, [tags::li(&dom, ["one"])?, tags::li(&dom, ["two"])?])?;
//! assert_eq!(list.to_html(&dom)?, "<ul><li>one</li><li>two</li></ul>");
//!
//! let by_name = tags::by_name(&dom, "article", ["text"]).expect("standard tag")?;
//! assert_eq!(by_name.name(), "article");
//! assert!(tags::by_name(&dom, "blink", ["text"]).is_none());
//! # Ok::<(), tag_maker::memory::MemoryDomError>(())
//! ```

use crate::{dom::Dom, node::Content, tag::TagElement};

macro_rules! standard_tags {
	($($(#[doc = $doc:literal])* $name:ident,)*) => {
		/// All tag names with a shorthand in this module, in alphabetical order.
		pub const STANDARD_TAGS: &[&str] = &[$(stringify!($name)),*];

		$(
			$(#[doc = $doc])*
			///
			/// # Errors
			///
			/// Iff `dom` rejects the tag name.
			pub fn $name<D: Dom, C: Into<Content<D>>>(dom: &D, children: impl IntoIterator<Item = C>) -> Result<TagElement<D>, D::Error> {
				TagElement::make(dom, stringify!($name), children)
			}
		)*

		/// Dispatches to the shorthand for `name`, or returns [`None`] if `name` isn't one of the [`STANDARD_TAGS`].
		///
		/// Names are matched exactly (case-sensitively).
		pub fn by_name<D: Dom, C: Into<Content<D>>>(dom: &D, name: &str, children: impl IntoIterator<Item = C>) -> Option<Result<TagElement<D>, D::Error>> {
			match name {
				$(stringify!($name) => Some($name(dom, children)),)*
				_ => None,
			}
		}
	};
}

#[must_use]
pub fn is_standard(name: &str) -> bool {
	STANDARD_TAGS.contains(&name)
}

standard_tags! {
	/// Defines a hyperlink.
	a,
	/// Defines an abbreviation or an acronym.
	abbr,
	/// Defines contact information for the author/owner of a document.
	address,
	/// Defines an area inside an image map.
	area,
	/// Defines an article.
	article,
	/// Defines content aside from the page content.
	aside,
	/// Defines embedded sound content.
	audio,
	/// Defines bold text.
	b,
	/// Specifies the base URL for all relative URLs in a document.
	base,
	/// Isolates a part of text that might be formatted in a different direction from other text outside it.
	bdi,
	/// Overrides the current text direction.
	bdo,
	/// Defines a section that is quoted from another source.
	blockquote,
	/// Defines the document's body.
	body,
	/// Defines a single line break.
	br,
	/// Defines a clickable button.
	button,
	/// Used to draw graphics, on the fly, via scripting.
	canvas,
	/// Defines a table caption.
	caption,
	/// Defines the title of a work.
	cite,
	/// Defines a piece of computer code.
	code,
	/// Specifies column properties for each column within a `colgroup` element.
	col,
	/// Specifies a group of one or more columns in a table for formatting.
	colgroup,
	/// Adds a machine-readable translation of a given content.
	data,
	/// Specifies a list of pre-defined options for input controls.
	datalist,
	/// Defines a description/value of a term in a description list.
	dd,
	/// Defines text that has been deleted from a document.
	del,
	/// Defines additional details that the user can view or hide.
	details,
	/// Specifies a term that is going to be defined within the content.
	dfn,
	/// Defines a dialog box or window.
	dialog,
	/// Defines a section in a document.
	div,
	/// Defines a description list.
	dl,
	/// Defines a term/name in a description list.
	dt,
	/// Defines emphasized text.
	em,
	/// Defines a container for an external application.
	embed,
	/// Groups related elements in a form.
	fieldset,
	/// Defines a caption for a `figure` element.
	figcaption,
	/// Specifies self-contained content.
	figure,
	/// Defines a footer for a document or section.
	footer,
	/// Defines an HTML form for user input.
	form,
	/// Defines a level 1 heading.
	h1,
	/// Defines a level 2 heading.
	h2,
	/// Defines a level 3 heading.
	h3,
	/// Defines a level 4 heading.
	h4,
	/// Defines a level 5 heading.
	h5,
	/// Defines a level 6 heading.
	h6,
	/// Contains metadata/information for the document.
	head,
	/// Defines a header for a document or section.
	header,
	/// Defines a header and related content.
	hgroup,
	/// Defines a thematic change in the content.
	hr,
	/// Defines the root of an HTML document.
	html,
	/// Defines a part of text in an alternate voice or mood.
	i,
	/// Defines an inline frame.
	iframe,
	/// Defines an image.
	img,
	/// Defines an input control.
	input,
	/// Defines a text that has been inserted into a document.
	ins,
	/// Defines keyboard input.
	kbd,
	/// Defines a label for an `input` element.
	label,
	/// Defines a caption for a `fieldset` element.
	legend,
	/// Defines a list item.
	li,
	/// Defines the relationship between a document and an external resource.
	link,
	/// Specifies the main content of a document.
	main,
	/// Defines an image map.
	map,
	/// Defines marked/highlighted text.
	mark,
	/// Defines an unordered list.
	menu,
	/// Defines metadata about an HTML document.
	meta,
	/// Defines a scalar measurement within a known range.
	meter,
	/// Defines navigation links.
	nav,
	/// Defines an alternate content for users that do not support client-side scripts.
	noscript,
	/// Defines a container for an external application.
	object,
	/// Defines an ordered list.
	ol,
	/// Defines a group of related options in a drop-down list.
	optgroup,
	/// Defines an option in a drop-down list.
	option,
	/// Defines the result of a calculation.
	output,
	/// Defines a paragraph.
	p,
	/// Defines a parameter for an object.
	param,
	/// Defines a container for multiple image resources.
	picture,
	/// Defines preformatted text.
	pre,
	/// Represents the progress of a task.
	progress,
	/// Defines a short quotation.
	q,
	/// Defines what to show in browsers that do not support ruby annotations.
	rp,
	/// Defines an explanation/pronunciation of characters.
	rt,
	/// Defines a ruby annotation.
	ruby,
	/// Defines text that is no longer correct.
	s,
	/// Defines sample output from a computer program.
	samp,
	/// Defines a client-side script.
	script,
	/// Defines a search section.
	search,
	/// Defines a section in a document.
	section,
	/// Defines a drop-down list.
	select,
	/// Defines a placeholder inside a web component.
	slot,
	/// Defines smaller text.
	small,
	/// Defines multiple media resources for media elements.
	source,
	/// Defines a section in a document.
	span,
	/// Defines important text.
	strong,
	/// Defines style information for a document.
	style,
	/// Defines subscripted text.
	sub,
	/// Defines a visible heading for a `details` element.
	summary,
	/// Defines superscripted text.
	sup,
	/// Defines a table.
	table,
	/// Groups the body content in a table.
	tbody,
	/// Defines a cell in a table.
	td,
	/// Defines a container for content that should be hidden when the page loads.
	template,
	/// Defines a multiline input control.
	textarea,
	/// Groups the footer content in a table.
	tfoot,
	/// Defines a header cell in a table.
	th,
	/// Groups the header content in a table.
	thead,
	/// Defines a specific time.
	time,
	/// Defines a title for the document.
	title,
	/// Defines a row in a table.
	tr,
	/// Defines text tracks for media elements.
	track,
	/// Defines some text that is unarticulated and styled differently from normal text.
	u,
	/// Defines an unordered list.
	ul,
	/// Defines a variable.
	var,
	/// Defines embedded video content.
	video,
	/// Defines a possible line-break.
	wbr,
}
