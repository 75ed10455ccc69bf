#![warn(missing_docs, clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

/// Custom error type.
pub mod error;

/// Badge preview synchronization.
pub mod badge;

/// Schedule interest toggling.
pub mod interest;

/// Grant form section visibility.
pub mod visibility;

/// Web utility functions.
pub mod utils;

/// Event listener lifecycle.
mod callback;

/// Per-page entry points.
mod page;

// Re-export web_sys crate.
pub use web_sys;

pub use badge::{BadgePreview, BadgePreviewOptions, BadgeState, Field, Role, TicketRate};
pub use error::Error;
pub use interest::{InterestToggle, InterestToggleOptions};
pub use page::{init_badge_page, init_grant_form, init_schedule_page, start};
pub use visibility::{SectionToggle, SectionToggleOptions};
