//! Locator resolution.
//!
//! Converts a fuzzy identifier plus an action category (and an optional
//! scoping context) into an ordered list of concrete selector strategies,
//! runs them against the session in priority order, and returns the first
//! strategy's full match set. Count adequacy is the dispatcher's concern;
//! the resolver only judges "did anything match".

pub mod engine;
pub mod result;
pub mod scope;
pub mod strategy;

pub use engine::Resolver;
pub use result::{AmbiguousError, MatchSet, ResolutionError};
pub use scope::ScopeManager;
pub use strategy::Strategy;
