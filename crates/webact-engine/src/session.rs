use async_trait::async_trait;
pub use webact_common::error::SessionError;
use webact_common::{ElementHandle, SelectorKind};

/// The capability set consumed from the browser-session collaborator.
///
/// One implementation per transport (WebDriver, CDP, an in-memory fake for
/// tests). The action layer owns no session state: it issues one primitive
/// call at a time and never caches handles across steps. Every method is an
/// await point; cancellation and timeouts belong to the transport.
#[async_trait]
pub trait Session: Send + Sync {
    /// Navigate to an absolute URL.
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError>;

    /// The URL currently loaded in the session.
    async fn current_url(&self) -> Result<String, SessionError>;

    /// Find all elements matching a raw selector, optionally restricted to
    /// the subtree rooted at `within`.
    async fn find_all(
        &mut self,
        kind: SelectorKind,
        value: &str,
        within: Option<&ElementHandle>,
    ) -> Result<Vec<ElementHandle>, SessionError>;

    /// Rendered text of one element's subtree.
    async fn text(&self, element: &ElementHandle) -> Result<String, SessionError>;

    /// Rendered text of the whole page.
    async fn page_text(&self) -> Result<String, SessionError>;

    /// Replace the value of a form field.
    async fn set_value(
        &mut self,
        element: &ElementHandle,
        value: &str,
    ) -> Result<(), SessionError>;

    /// Dispatch a click to an element.
    async fn click(&mut self, element: &ElementHandle) -> Result<(), SessionError>;

    /// Current checked state of a checkbox or radio.
    async fn is_checked(&self, element: &ElementHandle) -> Result<bool, SessionError>;

    /// Set the checked state of a checkbox or radio.
    async fn toggle(
        &mut self,
        element: &ElementHandle,
        desired: bool,
    ) -> Result<(), SessionError>;

    /// Choose an option node within a select node.
    async fn select_option(
        &mut self,
        select: &ElementHandle,
        option: &ElementHandle,
    ) -> Result<(), SessionError>;
}
