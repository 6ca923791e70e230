//! Locator vocabulary.
//!
//! Callers name elements with an [`Identifier`]: either a fuzzy string whose
//! meaning depends on the action category ("More info" may be link text, a
//! CSS selector, an XPath expression or a `name` attribute), or an explicit
//! [`StrictLocator`] that pins the lookup to exactly one primitive and is
//! never subjected to fuzzy fallback.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The raw lookup primitives a session driver exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Css,
    XPath,
    Id,
    Name,
}

impl SelectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Css => "css",
            SelectorKind::XPath => "xpath",
            SelectorKind::Id => "id",
            SelectorKind::Name => "name",
        }
    }
}

impl std::fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SelectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(SelectorKind::Css),
            "xpath" => Ok(SelectorKind::XPath),
            "id" => Ok(SelectorKind::Id),
            "name" => Ok(SelectorKind::Name),
            other => Err(format!("unknown locator kind: {other}")),
        }
    }
}

/// An explicit kind-tagged locator, e.g. `{id: "checkin"}`.
///
/// Serialized as a single-entry map from kind to value, matching the
/// shape test authors write by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictLocator {
    pub kind: SelectorKind,
    pub value: String,
}

impl StrictLocator {
    pub fn new(kind: SelectorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(SelectorKind::Css, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(SelectorKind::XPath, value)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(SelectorKind::Id, value)
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::new(SelectorKind::Name, value)
    }
}

impl std::fmt::Display for StrictLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}: {}}}", self.kind, self.value)
    }
}

impl TryFrom<BTreeMap<String, String>> for StrictLocator {
    type Error = String;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut entries = map.into_iter();
        let (kind, value) = entries
            .next()
            .ok_or_else(|| "strict locator map is empty".to_string())?;
        if entries.next().is_some() {
            return Err("strict locator map must have exactly one entry".to_string());
        }
        Ok(StrictLocator {
            kind: kind.parse()?,
            value,
        })
    }
}

impl From<StrictLocator> for BTreeMap<String, String> {
    fn from(locator: StrictLocator) -> Self {
        BTreeMap::from([(locator.kind.as_str().to_string(), locator.value)])
    }
}

impl Serialize for StrictLocator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BTreeMap::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StrictLocator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        StrictLocator::try_from(map).map_err(serde::de::Error::custom)
    }
}

/// A caller-supplied element locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Explicit kind-tagged locator; resolved via exactly one strategy.
    Strict(StrictLocator),
    /// Fuzzy locator; interpreted by the category's strategy chain.
    Fuzzy(String),
}

impl Identifier {
    /// The raw form used in error reports.
    pub fn describe(&self) -> String {
        match self {
            Identifier::Strict(s) => s.to_string(),
            Identifier::Fuzzy(s) => s.clone(),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Fuzzy(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Fuzzy(s)
    }
}

impl From<StrictLocator> for Identifier {
    fn from(s: StrictLocator) -> Self {
        Identifier::Strict(s)
    }
}

impl From<&StrictLocator> for Identifier {
    fn from(s: &StrictLocator) -> Self {
        Identifier::Strict(s.clone())
    }
}

/// What kind of step a locator is being resolved for. Selects the
/// fallback strategy ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Navigate,
    ClickLike,
    TextAssertion,
    UrlAssertion,
    CheckToggle,
    SelectOption,
    FillField,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Navigate => "navigate",
            ActionCategory::ClickLike => "click",
            ActionCategory::TextAssertion => "text assertion",
            ActionCategory::UrlAssertion => "url assertion",
            ActionCategory::CheckToggle => "check",
            ActionCategory::SelectOption => "select",
            ActionCategory::FillField => "fill",
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a fuzzy identifier is shaped like an XPath expression.
pub fn looks_like_xpath(raw: &str) -> bool {
    raw.starts_with('/') || raw.starts_with("./") || raw.starts_with('(')
}

/// Whether a fuzzy identifier is plausibly a CSS selector.
///
/// Plain prose ("More info") is excluded; anything carrying a CSS-significant
/// character, or a bare token that could be a tag name, is allowed through.
/// A CSS-looking identifier that matches nothing does not block later
/// strategies, so this only has to be permissive enough, not exact.
pub fn looks_like_css(raw: &str) -> bool {
    if raw.is_empty() || looks_like_xpath(raw) {
        return false;
    }
    if raw
        .chars()
        .any(|c| matches!(c, '#' | '.' | '[' | ']' | '>' | '+' | '~' | ':' | '*'))
    {
        return true;
    }
    // A bare token with no whitespace could be a tag selector.
    !raw.contains(char::is_whitespace)
}
