//! Browser-automation action layer.
//!
//! Translates human-meaningful identifiers ("click the link named X", "fill
//! the field labeled Y") into concrete element lookups against a live
//! browser session, performs the action, and raises categorized failures
//! when resolution is ambiguous or the target is absent.
//!
//! The browser itself is reached only through the [`session::Session`]
//! trait; everything here is an in-process translation layer between the
//! fuzzy-identifier API and session primitives.

pub mod actor;
pub mod assertion;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod resolution;
pub mod session;

pub use actor::Actor;
pub use config::ActorConfig;
pub use error::StepError;
pub use session::Session;
pub use webact_common::{ActionCategory, ElementHandle, Identifier, SelectorKind, StrictLocator};
