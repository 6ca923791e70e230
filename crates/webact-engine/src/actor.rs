//! The caller-facing step surface.
//!
//! An [`Actor`] owns one session exclusively for its lifetime and executes
//! one step at a time; the caller awaits each step before issuing the next.
//! Steps never retry: resolution is deterministic over a fixed DOM
//! snapshot, and a flaky session is a real failure.

use crate::assertion::AssertionEngine;
use crate::config::ActorConfig;
use crate::dispatch::Dispatcher;
use crate::error::StepError;
use crate::resolution::Resolver;
use crate::session::Session;
use tracing::debug;
use webact_common::{ActionCategory, Identifier};

pub struct Actor<S: Session> {
    session: S,
    config: ActorConfig,
}

impl<S: Session> Actor<S> {
    pub fn new(session: S, config: ActorConfig) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Navigate to a page. A bare path is joined to the configured base
    /// origin; an absolute URL is used verbatim.
    pub async fn am_on_page(&mut self, path_or_url: &str) -> Result<(), StepError> {
        let url = self.config.absolute(path_or_url)?;
        debug!(%url, "navigate");
        self.session.navigate(url.as_str()).await?;
        Ok(())
    }

    /// Current URL as reported by the session.
    pub async fn grab_current_url(&self) -> Result<String, StepError> {
        Ok(self.session.current_url().await?)
    }

    /// Click an element named by link/button text, CSS, XPath, or a
    /// `name`/`id` attribute. Acts on the first match.
    pub async fn click(&mut self, identifier: impl Into<Identifier>) -> Result<(), StepError> {
        self.click_impl(identifier.into(), None).await
    }

    /// As [`Actor::click`], searching only inside the scope container.
    pub async fn click_within(
        &mut self,
        identifier: impl Into<Identifier>,
        scope: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        self.click_impl(identifier.into(), Some(scope.into())).await
    }

    async fn click_impl(
        &mut self,
        identifier: Identifier,
        scope: Option<Identifier>,
    ) -> Result<(), StepError> {
        let matches = Resolver::resolve(
            &mut self.session,
            &identifier,
            ActionCategory::ClickLike,
            scope.as_ref(),
        )
        .await?;
        Dispatcher::click(&mut self.session, &matches).await
    }

    /// Fill a form field named by label text, CSS, or a `name`/`id`
    /// attribute. The field must be unique.
    pub async fn fill_field(
        &mut self,
        identifier: impl Into<Identifier>,
        value: &str,
    ) -> Result<(), StepError> {
        self.fill_impl(identifier.into(), value, None).await
    }

    pub async fn fill_field_within(
        &mut self,
        identifier: impl Into<Identifier>,
        value: &str,
        scope: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        self.fill_impl(identifier.into(), value, Some(scope.into()))
            .await
    }

    async fn fill_impl(
        &mut self,
        identifier: Identifier,
        value: &str,
        scope: Option<Identifier>,
    ) -> Result<(), StepError> {
        let matches = Resolver::resolve(
            &mut self.session,
            &identifier,
            ActionCategory::FillField,
            scope.as_ref(),
        )
        .await?;
        Dispatcher::fill(&mut self.session, &matches, value).await
    }

    /// Check a checkbox or radio named by its label text, CSS, or a
    /// `name`/`id` attribute. A no-op when the control is already checked.
    pub async fn check_option(
        &mut self,
        identifier: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        self.check_impl(identifier.into(), None).await
    }

    pub async fn check_option_within(
        &mut self,
        identifier: impl Into<Identifier>,
        scope: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        self.check_impl(identifier.into(), Some(scope.into())).await
    }

    async fn check_impl(
        &mut self,
        identifier: Identifier,
        scope: Option<Identifier>,
    ) -> Result<(), StepError> {
        let matches = Resolver::resolve(
            &mut self.session,
            &identifier,
            ActionCategory::CheckToggle,
            scope.as_ref(),
        )
        .await?;
        Dispatcher::toggle(&mut self.session, &matches, true).await
    }

    /// Choose an option inside a select named by its label text, CSS, or a
    /// `name`/`id` attribute. `choice` matches the option's value first,
    /// then its visible text.
    pub async fn select_option(
        &mut self,
        identifier: impl Into<Identifier>,
        choice: &str,
    ) -> Result<(), StepError> {
        let identifier = identifier.into();
        let matches = Resolver::resolve(
            &mut self.session,
            &identifier,
            ActionCategory::SelectOption,
            None,
        )
        .await?;
        Dispatcher::select(&mut self.session, &matches, choice).await
    }

    /// Assert that the page text contains `text`.
    pub async fn see(&mut self, text: &str) -> Result<(), StepError> {
        AssertionEngine::see_text(&mut self.session, text, None).await
    }

    /// Assert that the scope container's text contains `text`.
    pub async fn see_within(
        &mut self,
        text: &str,
        scope: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        AssertionEngine::see_text(&mut self.session, text, Some(&scope.into())).await
    }

    pub async fn dont_see(&mut self, text: &str) -> Result<(), StepError> {
        AssertionEngine::dont_see_text(&mut self.session, text, None).await
    }

    pub async fn dont_see_within(
        &mut self,
        text: &str,
        scope: impl Into<Identifier>,
    ) -> Result<(), StepError> {
        AssertionEngine::dont_see_text(&mut self.session, text, Some(&scope.into())).await
    }

    /// Assert that the current URL contains `fragment`.
    pub async fn see_in_current_url(&self, fragment: &str) -> Result<(), StepError> {
        AssertionEngine::see_in_current_url(&self.session, fragment).await
    }

    pub async fn dont_see_in_current_url(&self, fragment: &str) -> Result<(), StepError> {
        AssertionEngine::dont_see_in_current_url(&self.session, fragment).await
    }

    /// Assert that the current URL equals `expected`, with relative paths
    /// normalized against the configured base origin.
    pub async fn see_current_url_equals(&self, expected: &str) -> Result<(), StepError> {
        AssertionEngine::see_current_url_equals(&self.session, expected, &self.config.base_url)
            .await
    }

    pub async fn dont_see_current_url_equals(&self, expected: &str) -> Result<(), StepError> {
        AssertionEngine::dont_see_current_url_equals(&self.session, expected, &self.config.base_url)
            .await
    }
}
