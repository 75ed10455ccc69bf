//! ## Badge preview
//!
//! The attendee profile page embeds the printable badge as an SVG inside an
//! `<object>` element and shows it next to the profile form. This module
//! keeps that preview in sync with the form, live, without a page reload.
//!
//! The component splits into two halves:
//!
//! - [`state`]: what the badge says. A plain [`BadgeState`] derived from the
//!   form controls, plus the pure rules that hang off it: extra-text
//!   assembly, role-to-background mapping, the corporate company lock, and
//!   the three-tier name sizing. None of it touches the DOM, so all of it
//!   is unit-tested natively.
//! - [`BadgePreview`]: the DOM wiring. It caches the SVG nodes once per
//!   `load` of the `<object>`, patches the state as change events arrive,
//!   and re-renders the whole preview on every edit. Renders requested
//!   before the SVG has loaded are dropped silently; the first render after
//!   `load` catches the preview up.
//!
//! Snake variants are swapped by retargeting `xlink:href` at template
//! shapes the SVG already contains (`#<variant>-front`, `#<variant>-back`,
//! and the shared `#solid-snake-body`), with per-variant colouring done by
//! stylesheet rules keyed on the `<variant>-snake` class. Pointing at a
//! template the SVG does not define is a content-authoring error; the
//! reference is applied anyway and the hole shows up in the preview.

/// Badge state and the pure rules derived from it.
pub mod state;

/// DOM-bound preview component.
mod preview;

pub use preview::{BadgePreview, BadgePreviewOptions};
pub use state::{BadgeState, Field, Role, TicketRate};
