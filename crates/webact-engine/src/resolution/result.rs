use thiserror::Error;
use webact_common::{ActionCategory, ElementHandle};

/// No strategy produced any match.
///
/// Never retried: resolution is deterministic over a fixed DOM snapshot, so
/// retrying an unmatched identifier against an unchanged page cannot
/// succeed.
#[derive(Error, Debug, Clone)]
#[error("No element matches '{identifier}' for {category} (tried: {})", attempted.join(", "))]
pub struct ResolutionError {
    pub identifier: String,
    pub category: ActionCategory,
    pub attempted: Vec<&'static str>,
}

/// A count-sensitive category (fill, toggle, select, scope) resolved to
/// more than one element.
#[derive(Error, Debug, Clone)]
#[error("'{identifier}' is ambiguous for {category}: {count} elements match")]
pub struct AmbiguousError {
    pub identifier: String,
    pub category: ActionCategory,
    pub count: usize,
}

/// The elements returned by the winning strategy for one resolution call.
///
/// Non-empty by construction and valid only for the action or assertion
/// that triggered the resolution; never cached across steps.
#[derive(Debug, Clone)]
pub struct MatchSet {
    pub identifier: String,
    pub category: ActionCategory,
    /// Name of the strategy that produced the matches.
    pub strategy: &'static str,
    pub elements: Vec<ElementHandle>,
}

impl MatchSet {
    /// First match, in document order.
    pub fn first(&self) -> &ElementHandle {
        &self.elements[0]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The single match, or `AmbiguousError` when the set holds more.
    pub fn require_single(&self) -> Result<&ElementHandle, AmbiguousError> {
        if self.elements.len() == 1 {
            Ok(&self.elements[0])
        } else {
            Err(AmbiguousError {
                identifier: self.identifier.clone(),
                category: self.category,
                count: self.elements.len(),
            })
        }
    }
}
