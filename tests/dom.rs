//! Browser smoke tests for the DOM wiring.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use confbadge::{
    interest, BadgePreview, BadgePreviewOptions, Error, SectionToggle, SectionToggleOptions,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    wasm_bindgen::JsCast, Document, Element, Event, HtmlElement, HtmlInputElement,
    HtmlSelectElement,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

fn append_to_body(document: &Document, element: &Element) {
    document
        .body()
        .expect("no body")
        .append_child(element)
        .expect("append failed");
}

#[wasm_bindgen_test]
fn grant_section_follows_select() {
    let document = document();

    let select: HtmlSelectElement = document
        .create_element("select")
        .expect("create select")
        .dyn_into()
        .expect("not a select");
    select.set_id("id_requested_ticket_only");
    select.set_inner_html(
        "<option value=\"True\">True</option><option value=\"False\">False</option>",
    );
    select.set_value("True");
    append_to_body(&document, &select);

    let section: HtmlElement = document
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("not an html element");
    section.set_id("further-assistance");
    append_to_body(&document, &section);

    SectionToggle::attach(SectionToggleOptions::new()).expect("attach failed");

    // "True" means the applicant only wants a ticket; the section hides.
    assert_eq!(section.style().get_property_value("display").unwrap(), "none");

    select.set_value("False");
    let change = Event::new("change").expect("create event");
    select.dispatch_event(&change).expect("dispatch failed");
    assert_eq!(section.style().get_property_value("display").unwrap(), "");
}

#[wasm_bindgen_test]
fn badge_preview_requires_the_object_element() {
    let result = BadgePreview::attach(BadgePreviewOptions::new().object_id("no-such-badge"));
    assert!(matches!(result, Err(Error::ElementNotFound(id)) if id == "no-such-badge"));
}

#[wasm_bindgen_test]
fn snake_picker_selection_is_exclusive() {
    let document = document();

    let object = document.create_element("object").expect("create object");
    object.set_id("badge-picker-test");
    append_to_body(&document, &object);

    let hidden: HtmlInputElement = document
        .create_element("input")
        .expect("create input")
        .dyn_into()
        .expect("not an input");
    hidden.set_id("id_badge_snake_colour");
    hidden.set_type("hidden");
    append_to_body(&document, &hidden);

    let make_control = |variant: &str| -> HtmlElement {
        let control: HtmlElement = document
            .create_element("button")
            .expect("create button")
            .dyn_into()
            .expect("not an html element");
        control.set_class_name("snake-body");
        control
            .set_attribute("data-id", variant)
            .expect("set data-id");
        append_to_body(&document, &control);
        control
    };
    let blue = make_control("blue");
    let red = make_control("red");

    BadgePreview::attach(BadgePreviewOptions::new().object_id("badge-picker-test"))
        .expect("attach failed")
        .forget();

    blue.click();
    assert!(blue.class_list().contains("selected"));
    assert!(!red.class_list().contains("selected"));
    assert_eq!(hidden.value(), "blue");

    red.click();
    assert!(red.class_list().contains("selected"));
    assert!(!blue.class_list().contains("selected"));
    assert_eq!(hidden.value(), "red");
}

#[wasm_bindgen_test]
fn confirmed_interest_toggles_control_and_cell_once() {
    let document = document();

    let cell = document.create_element("td").expect("create cell");
    let control = document.create_element("span").expect("create control");
    control.set_class_name("fa-calendar-plus-o");

    interest::apply_interest_toggle(&[cell.clone()], &control);

    assert!(cell.class_list().contains("selected"));
    assert!(control.class_list().contains("fa-calendar-minus-o"));
    assert!(!control.class_list().contains("fa-calendar-plus-o"));
}

#[wasm_bindgen_test]
fn any_highlighted_cell_counts_as_marked() {
    let document = document();

    let plain = document.create_element("td").expect("create cell");
    let marked = document.create_element("td").expect("create cell");
    marked.set_class_name("selected");

    assert!(!interest::any_selected(&[plain.clone()]));
    // The highlight may sit on any cell of the session, not just the first.
    assert!(interest::any_selected(&[plain, marked]));
}
