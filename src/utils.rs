use web_sys::{wasm_bindgen::JsCast, Document, Element, HtmlInputElement, Window};

use crate::error::Error;

/// Returns the browser window.
pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the host page document.
pub fn document() -> Result<Document, Error> {
    window()?.document().ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the element with the given ID, failing if it is absent.
pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element, Error> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::ElementNotFound(id.to_string()))
}

/// Returns the form input with the given ID.
pub(crate) fn get_input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, Error> {
    get_element_by_id(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| Error::ElementNotFound(id.to_string()))
}

/// Returns the current value of the form input with the given ID.
///
/// A missing field is treated as empty rather than an error, so forms that
/// omit optional controls still work.
pub(crate) fn input_value(document: &Document, id: &str) -> String {
    get_input_by_id(document, id)
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Returns every element bearing the given class name.
pub(crate) fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.get_with_index(index))
        .collect()
}
