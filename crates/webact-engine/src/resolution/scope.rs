use crate::error::StepError;
use crate::resolution::engine::Resolver;
use crate::resolution::strategy;
use crate::session::Session;
use tracing::debug;
use webact_common::{ActionCategory, ElementHandle, Identifier};

/// Narrows resolution to a sub-tree when a context identifier is supplied.
///
/// A scope identifier is conventionally a CSS selector, with XPath and
/// exact text accepted as fallback. Unlike click targets, a scope must
/// resolve to exactly one container element; an ambiguous scope is always
/// an error.
pub struct ScopeManager;

impl ScopeManager {
    pub async fn resolve<S: Session + ?Sized>(
        session: &mut S,
        identifier: &Identifier,
    ) -> Result<ElementHandle, StepError> {
        let matches = match identifier {
            Identifier::Strict(strict) => {
                Resolver::resolve_strict(session, strict, ActionCategory::ClickLike, None).await?
            }
            Identifier::Fuzzy(raw) => {
                Resolver::run_strategies(
                    session,
                    raw,
                    ActionCategory::ClickLike,
                    strategy::scope_order(),
                    None,
                )
                .await?
            }
        };

        let container = *matches.require_single()?;
        debug!(scope = %identifier.describe(), %container, "scope resolved");
        Ok(container)
    }
}
