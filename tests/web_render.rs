#![cfg(target_arch = "wasm32")]

use std::sync::Once;
use tag_maker::{children, tags, web::WebDom, TagElement, ToDomNode};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlBodyElement};

wasm_bindgen_test_configure!(run_in_browser);

static LOG_INIT: Once = Once::new();

fn web_dom() -> WebDom {
	LOG_INIT.call_once(|| {
		//TODO: Fail on Warning or Error.
		tracing_wasm::set_as_global_default();
	});
	WebDom::new(window().unwrap().document().unwrap())
}

#[wasm_bindgen_test]
fn text() {
	let dom = web_dom();
	let div = TagElement::make(&dom, "div", ["hello"]).unwrap();
	assert_eq!(div.to_html(&dom).unwrap(), "<div>hello</div>");
}

#[wasm_bindgen_test]
fn nested_with_classes() {
	let dom = web_dom();
	let mut p = tags::p(&dom, [tags::b(&dom, ["x"]).unwrap()]).unwrap();
	p.add_class("a").add_class("a").add_class("b");
	assert_eq!(p.to_html(&dom).unwrap(), r#"<p class="a b"><b>x</b></p>"#);
}

#[wasm_bindgen_test]
fn no_class_attribute() {
	let dom = web_dom();
	let mut span = tags::span(&dom, ["x"]).unwrap().with_class("gone");
	span.remove_class("gone");
	let element = span.to_dom_node(&dom).unwrap();
	assert!(!element.has_attribute("class"));
}

#[wasm_bindgen_test]
fn repeated_conversion_is_independent() {
	let dom = web_dom();
	let mut ul = tags::ul(&dom, [tags::li(&dom, ["one"]).unwrap()]).unwrap();
	ul.set_attribute("id", "list").unwrap();

	let first = ul.to_dom_node(&dom).unwrap();
	let second = ul.to_dom_node(&dom).unwrap();
	assert!(first.is_equal_node(Some(&second)));

	second.set_attribute("id", "changed").unwrap();
	assert_eq!(first.get_attribute("id").as_deref(), Some("list"));
	assert_eq!(ul.attribute("id").as_deref(), Some("list"));
}

#[wasm_bindgen_test]
fn rename_keeps_attributes() {
	let dom = web_dom();
	let mut element = tags::div(&dom, ["kept"]).unwrap();
	element.set_attribute("id", "x").unwrap();
	element.set_name(&dom, "span").unwrap();

	assert_eq!(element.name(), "span");
	assert_eq!(element.attribute("id").as_deref(), Some("x"));
	assert_eq!(element.to_html(&dom).unwrap(), r#"<span id="x">kept</span>"#);
}

#[wasm_bindgen_test]
fn invalid_name_throws() {
	let dom = web_dom();
	assert!(TagElement::make(&dom, "no spaces", ["x"]).is_err());
}

#[wasm_bindgen_test]
fn mount() {
	let dom = web_dom();
	let body = dom.document().body().unwrap().dyn_into::<HtmlBodyElement>().unwrap();

	let mut button = tags::button(&dom, children!["Click ", tags::em(&dom, ["me"]).unwrap()]).unwrap();
	button.set_attribute("id", "test-button").unwrap();
	body.append_child(&button.to_dom_node(&dom).unwrap()).unwrap();

	let mounted = dom.document().get_element_by_id("test-button").unwrap();
	assert_eq!(mounted.inner_html(), "Click <em>me</em>");
	mounted.remove();
}
