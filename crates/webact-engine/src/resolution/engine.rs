use crate::error::StepError;
use crate::resolution::result::{MatchSet, ResolutionError};
use crate::resolution::scope::ScopeManager;
use crate::resolution::strategy::{self, Strategy};
use crate::session::Session;
use tracing::{debug, trace};
use webact_common::{ActionCategory, ElementHandle, Identifier, StrictLocator};

/// Ordered-fallback locator resolution.
///
/// Strategies run in the category's canonical order; the first one that
/// yields at least one element wins and later strategies are never
/// consulted, even if the winning match count looks wrong for the category.
/// Match-count policy belongs to the dispatcher.
pub struct Resolver;

impl Resolver {
    /// Resolve an identifier for a category, optionally inside a scope.
    ///
    /// Scope resolution failure is fatal to the whole call; there is no
    /// fallback to a document-wide search.
    pub async fn resolve<S: Session + ?Sized>(
        session: &mut S,
        identifier: &Identifier,
        category: ActionCategory,
        scope: Option<&Identifier>,
    ) -> Result<MatchSet, StepError> {
        let within = match scope {
            Some(scope_id) => Some(ScopeManager::resolve(session, scope_id).await?),
            None => None,
        };
        Self::resolve_within(session, identifier, category, within.as_ref()).await
    }

    pub(crate) async fn resolve_within<S: Session + ?Sized>(
        session: &mut S,
        identifier: &Identifier,
        category: ActionCategory,
        within: Option<&ElementHandle>,
    ) -> Result<MatchSet, StepError> {
        match identifier {
            Identifier::Strict(strict) => {
                Self::resolve_strict(session, strict, category, within).await
            }
            Identifier::Fuzzy(raw) => {
                Self::run_strategies(session, raw, category, strategy::order_for(category), within)
                    .await
            }
        }
    }

    /// A strict locator resolves via exactly one lookup primitive; it is
    /// never subjected to fuzzy fallback, even when the lookup fails.
    pub(crate) async fn resolve_strict<S: Session + ?Sized>(
        session: &mut S,
        strict: &StrictLocator,
        category: ActionCategory,
        within: Option<&ElementHandle>,
    ) -> Result<MatchSet, StepError> {
        trace!(kind = %strict.kind, value = %strict.value, "strict lookup");
        let elements = session
            .find_all(strict.kind, &strict.value, within)
            .await?;
        if elements.is_empty() {
            return Err(ResolutionError {
                identifier: strict.to_string(),
                category,
                attempted: vec![strict.kind.as_str()],
            }
            .into());
        }
        Ok(MatchSet {
            identifier: strict.to_string(),
            category,
            strategy: strict.kind.as_str(),
            elements,
        })
    }

    pub(crate) async fn run_strategies<S: Session + ?Sized>(
        session: &mut S,
        raw: &str,
        category: ActionCategory,
        order: &[Strategy],
        within: Option<&ElementHandle>,
    ) -> Result<MatchSet, StepError> {
        let mut attempted = Vec::with_capacity(order.len());

        for step in order {
            attempted.push(step.name());

            // A strategy the identifier's shape rules out counts as a
            // zero-match attempt and never blocks later strategies.
            let Some((kind, query)) = step.query(raw) else {
                trace!(strategy = step.name(), identifier = raw, "not applicable");
                continue;
            };

            trace!(strategy = step.name(), %kind, query = %query, "attempting");
            let elements = session.find_all(kind, &query, within).await?;
            if !elements.is_empty() {
                debug!(
                    strategy = step.name(),
                    identifier = raw,
                    matches = elements.len(),
                    "resolved"
                );
                return Ok(MatchSet {
                    identifier: raw.to_string(),
                    category,
                    strategy: step.name(),
                    elements,
                });
            }
        }

        Err(ResolutionError {
            identifier: raw.to_string(),
            category,
            attempted,
        }
        .into())
    }
}
