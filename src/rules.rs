//! Attribute match rules.
//!
//! A rule is plain data: a [`MatchMode`] plus a pattern. Both blacklists are
//! ordered lists of these, so new entries never touch the matching code.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::{KEYWORD_ATTRIBUTES, KEYWORD_CONTAINS, KEYWORD_EQUALS, KEYWORD_EXCEPTIONS};

/// How a rule pattern is compared against a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Equals,
    StartsWith,
    Contains,
    EndsWith,
}

impl MatchMode {
    #[inline]
    #[must_use]
    pub fn apply(self, haystack: &str, pattern: &str) -> bool {
        match self {
            MatchMode::Equals => haystack == pattern,
            MatchMode::StartsWith => haystack.starts_with(pattern),
            MatchMode::Contains => haystack.contains(pattern),
            MatchMode::EndsWith => haystack.ends_with(pattern),
        }
    }
}

/// A single `(mode, pattern)` entry of a blacklist or allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRule {
    pub mode: MatchMode,
    pub pattern: String,
}

impl AttributeRule {
    #[must_use]
    pub fn new(mode: MatchMode, pattern: impl Into<String>) -> Self {
        Self {
            mode,
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn equals(pattern: impl Into<String>) -> Self {
        Self::new(MatchMode::Equals, pattern)
    }

    #[must_use]
    pub fn starts_with(pattern: impl Into<String>) -> Self {
        Self::new(MatchMode::StartsWith, pattern)
    }

    #[must_use]
    pub fn contains(pattern: impl Into<String>) -> Self {
        Self::new(MatchMode::Contains, pattern)
    }

    #[must_use]
    pub fn ends_with(pattern: impl Into<String>) -> Self {
        Self::new(MatchMode::EndsWith, pattern)
    }

    /// Test a single token (or full attribute value) against this rule.
    ///
    /// With `case_sensitive` off both sides are ASCII-lowercased first.
    #[must_use]
    pub fn matches(&self, token: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.mode.apply(token, &self.pattern)
        } else {
            self.mode
                .apply(&token.to_ascii_lowercase(), &self.pattern.to_ascii_lowercase())
        }
    }

    /// Reject patterns that would match every token.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.trim().is_empty() {
            return Err(Error::InvalidRule(format!(
                "empty pattern for {:?} rule",
                self.mode
            )));
        }
        Ok(())
    }
}

/// Build one rule per pattern, all with the same mode.
#[must_use]
pub fn rules(mode: MatchMode, patterns: &[&str]) -> Vec<AttributeRule> {
    patterns
        .iter()
        .map(|p| AttributeRule::new(mode, *p))
        .collect()
}

/// Find the first rule matching any whitespace-separated token of `value`.
#[must_use]
pub fn first_token_match<'r>(
    value: &str,
    rules: &'r [AttributeRule],
    case_sensitive: bool,
) -> Option<(&'r AttributeRule, String)> {
    value.split_whitespace().find_map(|token| {
        rules
            .iter()
            .find(|rule| rule.matches(token, case_sensitive))
            .map(|rule| (rule, token.to_string()))
    })
}

/// Keyword blacklist with an allow-list that overrides it.
///
/// Keywords are matched per token. Exceptions are matched against the full
/// trimmed attribute value, and an exception on any inspected attribute
/// exempts the whole element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordFilter {
    /// Attributes inspected (default: `class`, `id`).
    pub attributes: Vec<String>,

    /// Per-token keyword rules.
    pub keywords: Vec<AttributeRule>,

    /// Full-value exception rules.
    pub exceptions: Vec<AttributeRule>,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        let mut keywords = rules(MatchMode::Equals, KEYWORD_EQUALS);
        keywords.extend(rules(MatchMode::Contains, KEYWORD_CONTAINS));
        Self {
            attributes: KEYWORD_ATTRIBUTES.iter().map(|a| (*a).to_string()).collect(),
            keywords,
            exceptions: rules(MatchMode::Equals, KEYWORD_EXCEPTIONS),
        }
    }
}

impl KeywordFilter {
    /// True when `value` as a whole is allow-listed.
    #[must_use]
    pub fn is_exception(&self, value: &str, case_sensitive: bool) -> bool {
        let value = value.trim();
        self.exceptions
            .iter()
            .any(|rule| rule.matches(value, case_sensitive))
    }

    /// Decide whether an element with these attribute values is removed.
    ///
    /// `values` yields `(attribute, value)` pairs for the inspected attributes.
    /// Returns the first offending `(attribute, token)` pair.
    #[must_use]
    pub fn offending<'v>(
        &self,
        values: &'v [(String, String)],
        case_sensitive: bool,
    ) -> Option<(&'v str, String)> {
        if values
            .iter()
            .any(|(_, value)| self.is_exception(value, case_sensitive))
        {
            return None;
        }
        values.iter().find_map(|(attr, value)| {
            first_token_match(value, &self.keywords, case_sensitive)
                .map(|(_, token)| (attr.as_str(), token))
        })
    }

    pub fn validate(&self) -> Result<()> {
        for rule in self.keywords.iter().chain(&self.exceptions) {
            rule.validate()?;
        }
        if self.attributes.iter().any(|a| a.trim().is_empty()) {
            return Err(Error::InvalidRule(
                "empty attribute name in keyword filter".to_string(),
            ));
        }
        Ok(())
    }
}
