use std::{cell::RefCell, rc::Rc};

use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    Document, Element, Event, HtmlObjectElement, SvgTextContentElement,
};

use crate::{
    badge::state::{fit_name_class, BadgeState, Field, Role, TicketRate},
    callback::EventBinding,
    error::Error,
    utils,
};

/// ID of the `<object>` element embedding the badge SVG.
const DEFAULT_OBJECT_ID: &str = "badge";

/// Hidden input recording the snake body choice for form submission.
const SNAKE_BODY_INPUT_ID: &str = "id_badge_snake_colour";

/// Hidden input recording the snake extras choice for form submission.
const SNAKE_EXTRAS_INPUT_ID: &str = "id_badge_snake_extras";

/// Class of the snake body picker controls in the host page.
const SNAKE_BODY_PICKER: &str = "snake-body";

/// Class of the snake extras picker controls in the host page.
const SNAKE_EXTRAS_PICKER: &str = "snake-extras";

/// Marker class for the chosen control in each picker group.
const SELECTED_CLASS: &str = "selected";

/// Options for the [`BadgePreview`].
///
/// This carries everything the profile template used to inject as page
/// globals, so the component has no hidden inputs of its own.
#[derive(Debug, Default)]
pub struct BadgePreviewOptions {
    /// The ID of the embedding `<object>` element.
    object_id: Option<String>,
    /// The attendee's role, which picks the background colour.
    role: Role,
    /// The rate of the attendee's ticket, if they have one.
    ticket_rate: Option<TicketRate>,
    /// Company name from the order that paid for the ticket.
    company: Option<String>,
}

impl BadgePreviewOptions {
    /// Constructs a new [`BadgePreviewOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the ID of the embedding `<object>` element.
    pub fn object_id(mut self, id: &str) -> Self {
        self.object_id = Some(id.to_string());
        self
    }

    /// Sets the attendee's role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the rate of the attendee's ticket.
    pub fn ticket_rate(mut self, rate: TicketRate) -> Self {
        self.ticket_rate = Some(rate);
        self
    }

    /// Sets the company name from the ticket order.
    pub fn company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    /// Returns the object element ID.
    fn resolved_object_id(&self) -> String {
        match &self.object_id {
            Some(id) => id.clone(),
            None => DEFAULT_OBJECT_ID.to_string(),
        }
    }
}

/// Cached references into the embedded badge document.
///
/// Captured once per `load` of the `<object>` element, so every render
/// works on already-resolved nodes instead of re-querying the SVG.
struct BadgeDocument {
    name: SvgTextContentElement,
    company: Element,
    extratext: Element,
    snake_body: Element,
    snake_back: Element,
    snake_front: Element,
}

impl BadgeDocument {
    /// Resolves the badge SVG's nodes and applies the one-off background
    /// colouring for the attendee's role.
    fn capture(object: &HtmlObjectElement, role: Role) -> Result<Self, Error> {
        let svg = object
            .content_document()
            .ok_or(Error::BadgeDocumentNotLoaded)?;
        let name = utils::get_element_by_id(&svg, "name")?
            .dyn_into::<SvgTextContentElement>()
            .map_err(|_| Error::ElementNotFound("name".to_string()))?;

        if let Some(class) = role.background_class() {
            utils::get_element_by_id(&svg, "background")?.set_attribute("class", class)?;
        }

        Ok(Self {
            name,
            company: utils::get_element_by_id(&svg, "company")?,
            extratext: utils::get_element_by_id(&svg, "extratext")?,
            snake_body: utils::get_element_by_id(&svg, "snake-body")?,
            snake_back: utils::get_element_by_id(&svg, "snake-back")?,
            snake_front: utils::get_element_by_id(&svg, "snake-front")?,
        })
    }

    /// Projects the given state into the SVG.
    fn render(&self, state: &BadgeState) -> Result<(), Error> {
        self.name.set_text_content(Some(&state.name));
        self.company.set_text_content(Some(&state.company));
        self.extratext.set_text_content(Some(&state.extra_text()));

        fit_name_class(|class| {
            if self.name.set_attribute("class", class).is_err() {
                return 0.0;
            }
            self.name.get_computed_text_length()
        });

        if !state.snake_body.is_empty() {
            // The variant only changes the colour; the shape is shared.
            self.snake_body
                .set_attribute("xlink:href", "#solid-snake-body")?;
            self.snake_body
                .set_attribute("class", &format!("{}-snake snake-body", state.snake_body))?;
        }
        if !state.snake_extras.is_empty() {
            self.snake_back
                .set_attribute("xlink:href", &format!("#{}-back", state.snake_extras))?;
            self.snake_front
                .set_attribute("xlink:href", &format!("#{}-front", state.snake_extras))?;
        }
        Ok(())
    }
}

/// Live badge preview.
///
/// Keeps the embedded badge SVG in sync with the profile form. The handle
/// owns the event listeners: dropping it detaches the preview, and
/// [`BadgePreview::forget`] leaves it running for the rest of the page.
pub struct BadgePreview {
    state: Rc<RefCell<BadgeState>>,
    svg: Rc<RefCell<Option<BadgeDocument>>>,
    bindings: Vec<EventBinding<Event>>,
}

impl BadgePreview {
    /// Wires the preview up to the profile form.
    ///
    /// Reads the initial state from the form controls, applies the
    /// corporate company lock, and registers listeners for every watched
    /// input, the picker controls, and the `load` event of the embedding
    /// `<object>` element. The initial render happens as soon as the badge
    /// document is available, which may be immediately if it loaded before
    /// this module ran.
    pub fn attach(options: BadgePreviewOptions) -> Result<Self, Error> {
        let document = utils::document()?;
        let object_id = options.resolved_object_id();
        let object = utils::get_element_by_id(&document, &object_id)?
            .dyn_into::<HtmlObjectElement>()
            .map_err(|_| Error::ElementNotFound(object_id))?;

        if let Some(company) = options.company.as_deref().filter(|c| !c.is_empty()) {
            if let Ok(input) = utils::get_input_by_id(&document, Field::Company.input_id()) {
                input.set_value(company);
            }
        }
        if options
            .ticket_rate
            .as_ref()
            .is_some_and(TicketRate::locks_company)
        {
            if let Ok(input) = utils::get_input_by_id(&document, Field::Company.input_id()) {
                input.set_disabled(true);
            }
        }

        let state = Rc::new(RefCell::new(read_initial_state(&document)));
        let svg: Rc<RefCell<Option<BadgeDocument>>> = Rc::new(RefCell::new(None));

        mark_selected(&document, SNAKE_BODY_PICKER, &state.borrow().snake_body);
        mark_selected(&document, SNAKE_EXTRAS_PICKER, &state.borrow().snake_extras);

        let mut bindings = Vec::new();
        let role = options.role;
        {
            let svg = svg.clone();
            let state = state.clone();
            let object_ref = object.clone();
            bindings.push(EventBinding::new(&object, "load", move |_: Event| {
                match BadgeDocument::capture(&object_ref, role) {
                    Ok(nodes) => {
                        if let Err(err) = nodes.render(&state.borrow()) {
                            warn("badge render failed", err);
                        }
                        svg.replace(Some(nodes));
                    }
                    Err(err) => warn("badge document capture failed", err),
                }
            })?);
        }

        // The object's load event can fire before this module runs; if its
        // nodes are already queryable, don't wait for an event that will
        // never come again.
        let loaded = object
            .content_document()
            .and_then(|svg| svg.get_element_by_id("name"))
            .is_some();
        if loaded {
            if let Ok(nodes) = BadgeDocument::capture(&object, role) {
                if let Err(err) = nodes.render(&state.borrow()) {
                    warn("badge render failed", err);
                }
                svg.replace(Some(nodes));
            }
        }

        for field in Field::ALL {
            if let Ok(input) = utils::get_input_by_id(&document, field.input_id()) {
                let state = state.clone();
                let svg = svg.clone();
                let input_ref = input.clone();
                bindings.push(EventBinding::new(&input, "change", move |_: Event| {
                    field.apply(&mut state.borrow_mut(), input_ref.value());
                    render_if_ready(&svg, &state);
                })?);
            }
        }

        attach_picker(
            &document,
            SNAKE_BODY_PICKER,
            SNAKE_BODY_INPUT_ID,
            &state,
            &svg,
            &mut bindings,
            |state, variant| state.snake_body = variant,
        )?;
        attach_picker(
            &document,
            SNAKE_EXTRAS_PICKER,
            SNAKE_EXTRAS_INPUT_ID,
            &state,
            &svg,
            &mut bindings,
            |state, variant| state.snake_extras = variant,
        )?;

        Ok(Self {
            state,
            svg,
            bindings,
        })
    }

    /// Leaves the preview attached for the rest of the page.
    pub fn forget(self) {
        for binding in self.bindings {
            binding.forget();
        }
    }

    /// Re-renders the preview from the current state.
    ///
    /// A no-op until the badge document has loaded.
    pub fn render(&self) {
        render_if_ready(&self.svg, &self.state);
    }

    /// Returns a snapshot of the current badge state.
    pub fn state(&self) -> BadgeState {
        self.state.borrow().clone()
    }
}

/// Reads the starting state out of the form controls.
///
/// Missing controls read as empty strings, matching a form that simply
/// does not offer that field.
fn read_initial_state(document: &Document) -> BadgeState {
    let mut state = BadgeState::default();
    for field in Field::ALL {
        field.apply(&mut state, utils::input_value(document, field.input_id()));
    }
    state.snake_body = utils::input_value(document, SNAKE_BODY_INPUT_ID);
    state.snake_extras = utils::input_value(document, SNAKE_EXTRAS_INPUT_ID);
    state
}

/// Registers click handlers for one picker group.
fn attach_picker<F>(
    document: &Document,
    picker_class: &'static str,
    input_id: &'static str,
    state: &Rc<RefCell<BadgeState>>,
    svg: &Rc<RefCell<Option<BadgeDocument>>>,
    bindings: &mut Vec<EventBinding<Event>>,
    set: F,
) -> Result<(), Error>
where
    F: Fn(&mut BadgeState, String) + Clone + 'static,
{
    for control in utils::elements_by_class(document, picker_class) {
        let state = state.clone();
        let svg = svg.clone();
        let document = document.clone();
        let control_ref = control.clone();
        let set = set.clone();
        bindings.push(EventBinding::new(&control, "click", move |_: Event| {
            let Some(variant) = control_ref.get_attribute("data-id") else {
                return;
            };
            set(&mut state.borrow_mut(), variant.clone());
            if let Ok(input) = utils::get_input_by_id(&document, input_id) {
                input.set_value(&variant);
            }
            mark_selected(&document, picker_class, &variant);
            render_if_ready(&svg, &state);
        })?);
    }
    Ok(())
}

/// Marks the control with `data-id == variant` as selected and clears the
/// marker from the rest of its group.
fn mark_selected(document: &Document, picker_class: &str, variant: &str) {
    if variant.is_empty() {
        return;
    }
    for control in utils::elements_by_class(document, picker_class) {
        let chosen = control.get_attribute("data-id").as_deref() == Some(variant);
        let class_list = control.class_list();
        let _ = if chosen {
            class_list.add_1(SELECTED_CLASS)
        } else {
            class_list.remove_1(SELECTED_CLASS)
        };
    }
}

/// Renders if the badge document has been captured, otherwise does nothing.
///
/// Updates that arrive before the SVG has loaded are dropped rather than
/// surfaced; the pending state is rendered in full once the document's
/// `load` event fires.
fn render_if_ready(svg: &Rc<RefCell<Option<BadgeDocument>>>, state: &Rc<RefCell<BadgeState>>) {
    if let Some(nodes) = svg.borrow().as_ref() {
        if let Err(err) = nodes.render(&state.borrow()) {
            warn("badge render failed", err);
        }
    }
}

fn warn(message: &str, error: Error) {
    web_sys::console::warn_2(&JsValue::from_str(message), &JsValue::from(error));
}
