use serde::{Deserialize, Serialize};

/// Opaque handle to a DOM element, issued by the session driver.
///
/// Handles are transient: they are valid for the resolution call that
/// produced them and must not be cached across steps, since the DOM may
/// change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u64);

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element#{}", self.0)
    }
}
