//! Conditional visibility for the grant application form.
//!
//! Applicants who only want a ticket skip the rest of the form, so the
//! further-assistance section is shown only when the "requested ticket
//! only" select says otherwise.

use web_sys::{wasm_bindgen::JsCast, Event, HtmlElement, HtmlSelectElement};

use crate::{callback::EventBinding, error::Error, utils};

/// Options for the [`SectionToggle`].
#[derive(Debug, Default)]
pub struct SectionToggleOptions {
    select_id: Option<String>,
    section_id: Option<String>,
}

impl SectionToggleOptions {
    /// Constructs a new [`SectionToggleOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the ID of the gating select control.
    pub fn select_id(mut self, id: &str) -> Self {
        self.select_id = Some(id.to_string());
        self
    }

    /// Sets the ID of the section being shown and hidden.
    pub fn section_id(mut self, id: &str) -> Self {
        self.section_id = Some(id.to_string());
        self
    }

    fn resolved_select_id(&self) -> &str {
        self.select_id.as_deref().unwrap_or("id_requested_ticket_only")
    }

    fn resolved_section_id(&self) -> &str {
        self.section_id.as_deref().unwrap_or("further-assistance")
    }
}

/// Shows or hides a form section based on a select control's value.
#[derive(Debug)]
pub struct SectionToggle;

impl SectionToggle {
    /// Wires the toggle up and applies it once for the initial value.
    pub fn attach(options: SectionToggleOptions) -> Result<(), Error> {
        let document = utils::document()?;
        let select_id = options.resolved_select_id();
        let section_id = options.resolved_section_id();

        let select = utils::get_element_by_id(&document, select_id)?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| Error::ElementNotFound(select_id.to_string()))?;
        let section = utils::get_element_by_id(&document, section_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::ElementNotFound(section_id.to_string()))?;

        apply(&select, &section);

        let select_ref = select.clone();
        EventBinding::new(&select, "change", move |_: Event| {
            apply(&select_ref, &section);
        })?
        .forget();

        Ok(())
    }
}

/// Whether the gated section should be visible for the given select value.
///
/// The select carries a form-rendered boolean, so the value is the string
/// `"True"` or `"False"`. The section asks for the assistance details, so
/// it appears when the applicant did *not* request a ticket only.
pub fn should_show(value: &str) -> bool {
    value == "False"
}

fn apply(select: &HtmlSelectElement, section: &HtmlElement) {
    let style = section.style();
    let result = if should_show(&select.value()) {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    // A read-only style declaration would be a template bug; nothing to do
    // about it here.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_shown_only_for_false() {
        assert!(should_show("False"));
        assert!(!should_show("True"));
        assert!(!should_show(""));
        assert!(!should_show("false"));
    }
}
