//! Per-session interest toggling on the schedule page.
//!
//! Attendees click a calendar icon on a session to tell the organisers
//! they plan to attend. Each click issues a `POST` (mark) or `DELETE`
//! (unmark) to the interest endpoint and, on success, flips the selection
//! highlight on the matching schedule cells and swaps the icon on the
//! clicked control. A failed request leaves the page untouched and is
//! reported to the browser console.

use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    Document, Element, Event, RequestInit, RequestMode, Response,
};

use crate::{callback::EventBinding, error::Error, utils};

/// Class of the clickable interest controls.
const INTEREST_CONTROL: &str = "selectable-interest";

/// Class of the schedule cells highlighted for a marked session.
const SCHEDULE_CELL: &str = "selectable-schedule";

/// Marker class for a session the attendee is interested in.
const SELECTED_CLASS: &str = "selected";

/// Icon classes swapped on the clicked control.
const ICON_CLASSES: [&str; 2] = ["fa-calendar-minus-o", "fa-calendar-plus-o"];

/// Header carrying the cross-site-request-forgery token.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Options for the [`InterestToggle`].
#[derive(Debug, Default)]
pub struct InterestToggleOptions {
    csrf_token: Option<String>,
    endpoint: Option<String>,
}

impl InterestToggleOptions {
    /// Constructs a new [`InterestToggleOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the CSRF token attached to every request.
    ///
    /// Without a token the component stays inert, matching a page
    /// rendered for an anonymous visitor.
    pub fn csrf_token(mut self, token: &str) -> Self {
        self.csrf_token = Some(token.to_string());
        self
    }

    /// Sets the interest endpoint. Defaults to `/schedule/interest/`.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    fn resolved_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or("/schedule/interest/")
    }
}

/// Wires interest toggling onto every control on the schedule page.
#[derive(Debug)]
pub struct InterestToggle;

impl InterestToggle {
    /// Registers a click handler on each interest control.
    ///
    /// Does nothing when no CSRF token is configured.
    pub fn attach(options: InterestToggleOptions) -> Result<(), Error> {
        let Some(token) = options.csrf_token.clone() else {
            return Ok(());
        };
        let endpoint = options.resolved_endpoint().to_string();
        let document = utils::document()?;

        for control in utils::elements_by_class(&document, INTEREST_CONTROL) {
            let document = document.clone();
            let control_ref = control.clone();
            let token = token.clone();
            let endpoint = endpoint.clone();
            EventBinding::new(&control, "click", move |_: Event| {
                let Some(proposal) = control_ref.get_attribute("data-proposal") else {
                    return;
                };
                let cells = schedule_cells(&document, &proposal);
                let url = interest_url(&endpoint, &proposal);
                let method = method_for(any_selected(&cells));
                let control = control_ref.clone();
                let token = token.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match send(&url, method, &token).await {
                        Ok(()) => apply_interest_toggle(&cells, &control),
                        Err(err) => {
                            web_sys::console::warn_2(
                                &JsValue::from_str("interest toggle failed"),
                                &JsValue::from(err),
                            );
                        }
                    }
                });
            })?
            .forget();
        }
        Ok(())
    }
}

/// The HTTP method that flips the current selection state.
pub fn method_for(already_selected: bool) -> &'static str {
    if already_selected {
        "DELETE"
    } else {
        "POST"
    }
}

/// The request URL for the given session.
pub fn interest_url(endpoint: &str, proposal: &str) -> String {
    format!("{endpoint}?id={proposal}")
}

/// Whether the session is currently marked, judged by its schedule cells.
///
/// Any highlighted cell counts; the cells are toggled together, but a
/// template that highlights only some of them still reads as marked.
pub fn any_selected(cells: &[Element]) -> bool {
    cells
        .iter()
        .any(|cell| cell.class_list().contains(SELECTED_CLASS))
}

/// Flips the selection highlight on the session's cells and swaps the
/// icon on the clicked control.
///
/// Called once per confirmed request, never on failure.
pub fn apply_interest_toggle(cells: &[Element], control: &Element) {
    for cell in cells {
        let _ = cell.class_list().toggle(SELECTED_CLASS);
    }
    for icon in ICON_CLASSES {
        let _ = control.class_list().toggle(icon);
    }
}

/// Schedule cells belonging to the given session.
fn schedule_cells(document: &Document, proposal: &str) -> Vec<Element> {
    utils::elements_by_class(document, SCHEDULE_CELL)
        .into_iter()
        .filter(|cell| cell.get_attribute("data-proposal").as_deref() == Some(proposal))
        .collect()
}

/// Issues the interest request and checks for an HTTP success status.
async fn send(url: &str, method: &str, token: &str) -> Result<(), Error> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    request.headers().set(CSRF_HEADER, token)?;

    let window = utils::window()?;
    let response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into().map_err(Error::Js)?;

    if response.ok() {
        Ok(())
    } else {
        Err(Error::RequestFailed(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_sessions_are_marked_with_post() {
        assert_eq!(method_for(false), "POST");
    }

    #[test]
    fn selected_sessions_are_unmarked_with_delete() {
        assert_eq!(method_for(true), "DELETE");
    }

    #[test]
    fn url_carries_the_session_id() {
        assert_eq!(
            interest_url("/schedule/interest/", "42"),
            "/schedule/interest/?id=42"
        );
    }
}
