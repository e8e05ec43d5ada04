//! Rewrite rules and rule groups.

use regex::{Regex, RegexBuilder};
use sq_core::{GroupName, Result, SqError};
use std::fmt;

/// How a rule rewrites text.
#[derive(Clone)]
pub enum Rewrite {
    /// Replace every non-overlapping match; the template may use `${n}`.
    Regex { pattern: Regex, replacement: &'static str },
    /// Hand-written scan for patterns the regex engine cannot express
    /// (look-around, back-references).
    Scan(fn(&str) -> String),
}

impl fmt::Debug for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex { pattern, replacement } => f
                .debug_struct("Regex")
                .field("pattern", &pattern.as_str())
                .field("replacement", replacement)
                .finish(),
            Self::Scan(_) => f.write_str("Scan"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    /// Pattern as written in the table, kept for diagnostics.
    pub source: &'static str,
    pub rewrite: Rewrite,
}

impl Rule {
    /// Case-insensitive regex rule.
    pub fn regex(source: &'static str, replacement: &'static str) -> Result<Self> {
        Self::build(source, replacement, true)
    }

    pub fn regex_case_sensitive(source: &'static str, replacement: &'static str) -> Result<Self> {
        Self::build(source, replacement, false)
    }

    /// Whole-word, case-insensitive literal substitution.
    pub fn word(phrase: &'static str, replacement: &'static str) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(phrase));
        let compiled = compile(&pattern, true)?;
        Ok(Self { source: phrase, rewrite: Rewrite::Regex { pattern: compiled, replacement } })
    }

    pub fn scan(source: &'static str, f: fn(&str) -> String) -> Self {
        Self { source, rewrite: Rewrite::Scan(f) }
    }

    fn build(source: &'static str, replacement: &'static str, case_insensitive: bool) -> Result<Self> {
        let pattern = compile(source, case_insensitive)?;
        Ok(Self { source, rewrite: Rewrite::Regex { pattern, replacement } })
    }

    pub fn apply(&self, text: &str) -> String {
        match &self.rewrite {
            Rewrite::Regex { pattern, replacement } => {
                pattern.replace_all(text, *replacement).into_owned()
            }
            Rewrite::Scan(f) => f(text),
        }
    }

    /// True when the rule re-emits exactly what it matched.
    pub fn is_identity(&self) -> bool {
        match &self.rewrite {
            Rewrite::Regex { pattern, replacement } => {
                *replacement == "${1}" && pattern.captures_len() == 2
            }
            Rewrite::Scan(_) => false,
        }
    }
}

fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| SqError::Pattern { pattern: pattern.to_string(), source })
}

/// Apply `rules` in order, each one consuming the previous output.
pub fn apply_all(rules: &[Rule], text: &str) -> String {
    let mut result = text.to_string();
    for rule in rules {
        result = rule.apply(&result);
    }
    result
}

/// A named, toggleable, ordered batch of rules run as one pipeline stage.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub name: GroupName,
    pub enabled: bool,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn new(name: GroupName, rules: Vec<Rule>) -> Self {
        Self { name, enabled: true, rules }
    }

    pub fn apply(&self, text: &str) -> String {
        apply_all(&self.rules, text)
    }

    /// Every rule in the group reinserts its match unchanged.
    pub fn is_identity(&self) -> bool {
        !self.rules.is_empty() && self.rules.iter().all(Rule::is_identity)
    }
}
