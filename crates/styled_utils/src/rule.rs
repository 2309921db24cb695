//! Nested style rules (the body of a `styled(Component)` block)

use crate::css;
use crate::fragment::{Interpolation, StyleFragment};

/// A selector with declarations, embedded fragments and nested rules, kept in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    body: Vec<StyleFragment>,
}

impl Rule {
    /// An empty rule for `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            body: Vec::new(),
        }
    }

    /// The rule's selector.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Add a single `property: value;` declaration.
    #[must_use]
    pub fn declare(mut self, property: &str, value: impl Into<Interpolation>) -> Self {
        self.body
            .push(css!({ property } ": " { value.into() } ";\n"));
        self
    }

    /// Embed a fragment (a mixin, a media query, another component's styles).
    #[must_use]
    pub fn with(mut self, fragment: StyleFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Nest a child rule inside this one.
    #[must_use]
    pub fn nest(mut self, child: Self) -> Self {
        self.body.push(child.into());
        self
    }

    /// Render the rule as `selector {\n body }`.
    pub fn to_fragment(&self) -> StyleFragment {
        let body = StyleFragment::concat(self.body.iter().cloned());
        css!({ self.selector.as_str() } " {\n" { body } "}\n")
    }
}

impl From<Rule> for StyleFragment {
    fn from(rule: Rule) -> Self {
        rule.to_fragment()
    }
}

impl From<Rule> for Interpolation {
    fn from(rule: Rule) -> Self {
        Self::Fragment(rule.to_fragment())
    }
}
