pub mod element;
pub mod error;
pub mod locator;

pub use element::ElementHandle;
pub use error::SessionError;
pub use locator::{ActionCategory, Identifier, SelectorKind, StrictLocator};
