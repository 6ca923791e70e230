//! Page-state assertions.
//!
//! Each predicate either returns normally or fails with an
//! [`AssertionError`] naming the expected and actual values, so "found it,
//! but state was wrong" stays distinguishable from "couldn't find it".

use crate::error::StepError;
use crate::resolution::scope::ScopeManager;
use crate::session::Session;
use thiserror::Error;
use tracing::debug;
use url::Url;
use webact_common::Identifier;

/// Which predicate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    UrlContains,
    UrlNotContains,
    UrlEquals,
    UrlNotEquals,
    TextPresent,
    TextAbsent,
}

impl AssertionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssertionKind::UrlContains => "url contains",
            AssertionKind::UrlNotContains => "url does not contain",
            AssertionKind::UrlEquals => "url equals",
            AssertionKind::UrlNotEquals => "url does not equal",
            AssertionKind::TextPresent => "text present",
            AssertionKind::TextAbsent => "text absent",
        }
    }
}

impl std::fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate check failed against live session state.
#[derive(Error, Debug, Clone)]
#[error("Assertion failed ({kind}): expected {expected:?}, actual {actual:?}")]
pub struct AssertionError {
    pub kind: AssertionKind,
    pub expected: String,
    pub actual: String,
}

pub struct AssertionEngine;

impl AssertionEngine {
    pub async fn see_in_current_url<S: Session + ?Sized>(
        session: &S,
        fragment: &str,
    ) -> Result<(), StepError> {
        let current = session.current_url().await?;
        if current.contains(fragment) {
            Ok(())
        } else {
            Err(fail(AssertionKind::UrlContains, fragment, &current))
        }
    }

    pub async fn dont_see_in_current_url<S: Session + ?Sized>(
        session: &S,
        fragment: &str,
    ) -> Result<(), StepError> {
        let current = session.current_url().await?;
        if current.contains(fragment) {
            Err(fail(AssertionKind::UrlNotContains, fragment, &current))
        } else {
            Ok(())
        }
    }

    /// URL equality. A relative `expected` is normalized against the base
    /// origin; an absolute URL is compared verbatim.
    pub async fn see_current_url_equals<S: Session + ?Sized>(
        session: &S,
        expected: &str,
        base: &Url,
    ) -> Result<(), StepError> {
        let expected_url = absolute(expected, base)?;
        let current = Url::parse(&session.current_url().await?)?;
        if current == expected_url {
            Ok(())
        } else {
            Err(fail(
                AssertionKind::UrlEquals,
                expected_url.as_str(),
                current.as_str(),
            ))
        }
    }

    pub async fn dont_see_current_url_equals<S: Session + ?Sized>(
        session: &S,
        expected: &str,
        base: &Url,
    ) -> Result<(), StepError> {
        let expected_url = absolute(expected, base)?;
        let current = Url::parse(&session.current_url().await?)?;
        if current == expected_url {
            Err(fail(
                AssertionKind::UrlNotEquals,
                expected_url.as_str(),
                current.as_str(),
            ))
        } else {
            Ok(())
        }
    }

    /// Text presence, optionally restricted to a scope container's subtree.
    pub async fn see_text<S: Session + ?Sized>(
        session: &mut S,
        text: &str,
        scope: Option<&Identifier>,
    ) -> Result<(), StepError> {
        let haystack = visible_text(session, scope).await?;
        debug!(text, scoped = scope.is_some(), "text assertion");
        if haystack.contains(text) {
            Ok(())
        } else {
            Err(fail(AssertionKind::TextPresent, text, &haystack))
        }
    }

    pub async fn dont_see_text<S: Session + ?Sized>(
        session: &mut S,
        text: &str,
        scope: Option<&Identifier>,
    ) -> Result<(), StepError> {
        let haystack = visible_text(session, scope).await?;
        if haystack.contains(text) {
            Err(fail(AssertionKind::TextAbsent, text, &haystack))
        } else {
            Ok(())
        }
    }
}

async fn visible_text<S: Session + ?Sized>(
    session: &mut S,
    scope: Option<&Identifier>,
) -> Result<String, StepError> {
    match scope {
        Some(scope_id) => {
            let container = ScopeManager::resolve(session, scope_id).await?;
            Ok(session.text(&container).await?)
        }
        None => Ok(session.page_text().await?),
    }
}

/// Normalize a caller-supplied URL: a bare path joins the base origin, an
/// absolute URL passes through.
fn absolute(expected: &str, base: &Url) -> Result<Url, url::ParseError> {
    match Url::parse(expected) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.join(expected),
        Err(e) => Err(e),
    }
}

fn fail(kind: AssertionKind, expected: &str, actual: &str) -> StepError {
    AssertionError {
        kind,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
    .into()
}
