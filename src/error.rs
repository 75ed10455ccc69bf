use web_sys::wasm_bindgen::JsValue;

/// Custom error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to retrieve the window.
    #[error("Unable to retrieve the window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve the document.
    #[error("Unable to retrieve the document")]
    UnableToRetrieveDocument,

    /// An element this component needs is missing from the page.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The embedded badge document has not finished loading.
    #[error("Badge document is not loaded")]
    BadgeDocumentNotLoaded,

    /// The server rejected a request.
    #[error("Request failed with status {0}")]
    RequestFailed(u16),

    /// JavaScript error.
    #[error("JavaScript error: {0:?}")]
    Js(JsValue),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        match error {
            Error::Js(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}
