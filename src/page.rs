//! Per-page entry points.
//!
//! Each template calls the function for its page, passing the values it
//! renders server-side. The old scripts picked these up from page-level
//! globals; here they are explicit arguments.

use wasm_bindgen::prelude::*;

use crate::{
    badge::{BadgePreview, BadgePreviewOptions, Role, TicketRate},
    interest::{InterestToggle, InterestToggleOptions},
    visibility::{SectionToggle, SectionToggleOptions},
};

/// Installs the panic hook so panics land in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Sets up the badge preview on the profile page.
///
/// `ticket_rate` and `company` come from the attendee's ticket, when they
/// have one; a corporate rate locks the company field to the order's
/// company name.
#[wasm_bindgen]
pub fn init_badge_page(
    is_organiser: bool,
    is_contributor: bool,
    ticket_rate: Option<String>,
    company: Option<String>,
) -> Result<(), JsValue> {
    let mut options =
        BadgePreviewOptions::new().role(Role::from_flags(is_organiser, is_contributor));
    if let Some(rate) = ticket_rate.as_deref() {
        options = options.ticket_rate(TicketRate::parse(rate));
    }
    if let Some(company) = company.as_deref() {
        options = options.company(company);
    }
    BadgePreview::attach(options)?.forget();
    Ok(())
}

/// Sets up the conditional section on the grant application form.
#[wasm_bindgen]
pub fn init_grant_form() -> Result<(), JsValue> {
    SectionToggle::attach(SectionToggleOptions::new())?;
    Ok(())
}

/// Sets up interest toggling on the schedule page.
///
/// Anonymous visitors have no CSRF token and get a read-only schedule.
#[wasm_bindgen]
pub fn init_schedule_page(csrf_token: Option<String>) -> Result<(), JsValue> {
    let mut options = InterestToggleOptions::new();
    if let Some(token) = csrf_token.as_deref() {
        options = options.csrf_token(token);
    }
    InterestToggle::attach(options)?;
    Ok(())
}
