//! Strategy table and query construction.
//!
//! Each [`Strategy`] is one concrete lookup method. The per-category
//! fallback order is a static table so the order is a single reviewable
//! artifact rather than nested conditionals. A strategy that does not apply
//! to the identifier's shape declines (yields no query) and counts as a
//! zero-match attempt.

use webact_common::locator::{looks_like_css, looks_like_xpath};
use webact_common::{ActionCategory, SelectorKind};

/// One concrete lookup method tried during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exact visible text of a link, button or button-like input.
    ClickableText,
    /// `<label>` text, following the label to its bound form field.
    LabelledField,
    /// As `LabelledField`, plus the control's own adjacent label text
    /// (checkbox, radio, select).
    ControlLabel,
    /// Identifier interpreted as a CSS selector.
    Css,
    /// Identifier interpreted as an XPath expression.
    XPath,
    /// Exact `name` attribute match.
    NameAttr,
    /// Exact `id` attribute match.
    IdAttr,
}

/// Click-like actions: visible text first, then selector interpretations,
/// then attribute matches.
const CLICK_ORDER: &[Strategy] = &[
    Strategy::ClickableText,
    Strategy::Css,
    Strategy::XPath,
    Strategy::NameAttr,
    Strategy::IdAttr,
];

/// Field filling: label-bound field first.
const FILL_ORDER: &[Strategy] = &[
    Strategy::LabelledField,
    Strategy::Css,
    Strategy::XPath,
    Strategy::NameAttr,
    Strategy::IdAttr,
];

/// Checkboxes, radios and selects: as `FILL_ORDER`, with the control's own
/// label text admitted in step one.
const CONTROL_ORDER: &[Strategy] = &[
    Strategy::ControlLabel,
    Strategy::Css,
    Strategy::XPath,
    Strategy::NameAttr,
    Strategy::IdAttr,
];

/// Scope containers are conventionally CSS selectors, with XPath and exact
/// text accepted as fallback.
const SCOPE_ORDER: &[Strategy] = &[
    Strategy::Css,
    Strategy::XPath,
    Strategy::ClickableText,
    Strategy::NameAttr,
    Strategy::IdAttr,
];

/// The canonical fallback order for a category.
pub fn order_for(category: ActionCategory) -> &'static [Strategy] {
    match category {
        ActionCategory::ClickLike => CLICK_ORDER,
        ActionCategory::FillField => FILL_ORDER,
        ActionCategory::CheckToggle | ActionCategory::SelectOption => CONTROL_ORDER,
        // Navigation and assertions only resolve container-style lookups.
        ActionCategory::Navigate
        | ActionCategory::TextAssertion
        | ActionCategory::UrlAssertion => SCOPE_ORDER,
    }
}

/// The order used when resolving a scope container.
pub fn scope_order() -> &'static [Strategy] {
    SCOPE_ORDER
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ClickableText => "clickable_text",
            Strategy::LabelledField => "labelled_field",
            Strategy::ControlLabel => "control_label",
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
            Strategy::NameAttr => "name",
            Strategy::IdAttr => "id",
        }
    }

    /// Build the raw selector this strategy would run for `raw`, or `None`
    /// when the identifier's shape rules the strategy out.
    pub fn query(&self, raw: &str) -> Option<(SelectorKind, String)> {
        match self {
            Strategy::ClickableText => {
                if looks_like_xpath(raw) {
                    return None;
                }
                Some((SelectorKind::XPath, clickable_text_xpath(raw)))
            }
            Strategy::LabelledField => {
                if looks_like_xpath(raw) {
                    return None;
                }
                Some((SelectorKind::XPath, labelled_field_xpath(raw)))
            }
            Strategy::ControlLabel => {
                if looks_like_xpath(raw) {
                    return None;
                }
                Some((SelectorKind::XPath, control_label_xpath(raw)))
            }
            Strategy::Css => looks_like_css(raw).then(|| (SelectorKind::Css, raw.to_string())),
            Strategy::XPath => {
                looks_like_xpath(raw).then(|| (SelectorKind::XPath, raw.to_string()))
            }
            Strategy::NameAttr => {
                if looks_like_xpath(raw) {
                    return None;
                }
                Some((SelectorKind::Name, raw.to_string()))
            }
            Strategy::IdAttr => {
                if looks_like_xpath(raw) {
                    return None;
                }
                Some((SelectorKind::Id, raw.to_string()))
            }
        }
    }
}

/// Links, buttons, and button-like inputs whose visible text equals `text`.
pub fn clickable_text_xpath(text: &str) -> String {
    let t = xpath_literal(text);
    format!(
        ".//a[normalize-space(.)={t}] \
         | .//button[normalize-space(.)={t}] \
         | .//input[(@type='submit' or @type='button' or @type='reset') and @value={t}]"
    )
}

/// Form fields bound to a `<label>` whose text equals `text`, either via
/// the label's `for` attribute or by nesting.
///
/// The label is matched within the search context, so a same-text label
/// outside a scope container never binds a field. Only the id lookup in
/// the `for`-branch is document-wide; ids are unique per document.
pub fn labelled_field_xpath(text: &str) -> String {
    let t = xpath_literal(text);
    format!(
        "//*[@id = .//label[normalize-space(.)={t}]/@for] \
         | .//label[normalize-space(.)={t}]//input \
         | .//label[normalize-space(.)={t}]//textarea \
         | .//label[normalize-space(.)={t}]//select"
    )
}

/// As [`labelled_field_xpath`], plus checkable controls sitting directly
/// beside the matching label (checkbox/radio markup that skips the `for`
/// attribute). The sibling axes admit only checkboxes and radios, so an
/// adjacent submit input next to the label is never picked up.
pub fn control_label_xpath(text: &str) -> String {
    let t = xpath_literal(text);
    let check = "[@type='checkbox' or @type='radio'][1]";
    format!(
        "{base} \
         | .//label[normalize-space(.)={t}]/preceding-sibling::input{check} \
         | .//label[normalize-space(.)={t}]/following-sibling::input{check}",
        base = labelled_field_xpath(text)
    )
}

/// Option children of a select, by exact `value` attribute.
pub fn option_value_xpath(value: &str) -> String {
    format!("./option[@value={}]", xpath_literal(value))
}

/// Option children of a select, by exact visible text.
pub fn option_text_xpath(text: &str) -> String {
    format!("./option[normalize-space(.)={}]", xpath_literal(text))
}

/// Quote a string as an XPath 1.0 literal. Falls back to `concat()` when
/// the text mixes both quote characters.
pub fn xpath_literal(s: &str) -> String {
    if !s.contains('\'') {
        format!("'{s}'")
    } else if !s.contains('"') {
        format!("\"{s}\"")
    } else {
        let parts: Vec<String> = s
            .split('\'')
            .map(|part| format!("'{part}'"))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}
