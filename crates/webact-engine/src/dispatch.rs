//! Action dispatch.
//!
//! Applies category-specific selection-among-matches and invocation
//! semantics to a resolved match set. Count policy violations fail before
//! any session mutation happens, so a refused step leaves page state
//! untouched.

use crate::error::StepError;
use crate::resolution::result::{MatchSet, ResolutionError};
use crate::resolution::strategy::{option_text_xpath, option_value_xpath};
use crate::session::Session;
use tracing::debug;
use webact_common::{ActionCategory, SelectorKind};

pub struct Dispatcher;

impl Dispatcher {
    /// Click the first match, in document order. Multiple matches are
    /// tolerated; taking the first is stable across repeated calls against
    /// an unchanged DOM.
    pub async fn click<S: Session + ?Sized>(
        session: &mut S,
        matches: &MatchSet,
    ) -> Result<(), StepError> {
        debug!(identifier = %matches.identifier, strategy = matches.strategy, "click");
        session.click(matches.first()).await?;
        Ok(())
    }

    /// Fill the single matching field. Writing to several fields silently
    /// would corrupt test state, so an ambiguous match is a hard error.
    pub async fn fill<S: Session + ?Sized>(
        session: &mut S,
        matches: &MatchSet,
        value: &str,
    ) -> Result<(), StepError> {
        let field = matches.require_single()?;
        debug!(identifier = %matches.identifier, strategy = matches.strategy, "fill");
        session.set_value(field, value).await?;
        Ok(())
    }

    /// Bring the single matching checkbox or radio to `desired`. When the
    /// state already holds, the toggle is skipped entirely, so re-checking
    /// a checked box produces no driver call and no side effect.
    pub async fn toggle<S: Session + ?Sized>(
        session: &mut S,
        matches: &MatchSet,
        desired: bool,
    ) -> Result<(), StepError> {
        let control = matches.require_single()?;
        if session.is_checked(control).await? == desired {
            debug!(identifier = %matches.identifier, desired, "already in desired state");
            return Ok(());
        }
        debug!(identifier = %matches.identifier, strategy = matches.strategy, desired, "toggle");
        session.toggle(control, desired).await?;
        Ok(())
    }

    /// Choose an option within the single matching select. The option is
    /// resolved among the select's children by exact value first, then by
    /// exact visible text, and must itself be unique.
    pub async fn select<S: Session + ?Sized>(
        session: &mut S,
        matches: &MatchSet,
        choice: &str,
    ) -> Result<(), StepError> {
        let select = *matches.require_single()?;

        let by_value = session
            .find_all(SelectorKind::XPath, &option_value_xpath(choice), Some(&select))
            .await?;
        let options = if by_value.is_empty() {
            session
                .find_all(SelectorKind::XPath, &option_text_xpath(choice), Some(&select))
                .await?
        } else {
            by_value
        };

        let option_set = MatchSet {
            identifier: choice.to_string(),
            category: ActionCategory::SelectOption,
            strategy: "option",
            elements: options,
        };
        if option_set.is_empty() {
            return Err(ResolutionError {
                identifier: choice.to_string(),
                category: ActionCategory::SelectOption,
                attempted: vec!["option_value", "option_text"],
            }
            .into());
        }
        let option = option_set.require_single()?;

        debug!(identifier = %matches.identifier, choice, "select option");
        session.select_option(&select, option).await?;
        Ok(())
    }
}
