//! Prefix stripper implementation

use crate::domain::{Config, CustomPrefixRule};
use crate::strip::rules::{PrefixRule, DEFAULT_RULES};
use regex::Regex;
use std::collections::BTreeMap;

/// Characters that end a strippable span. A prefix span never reaches across
/// one of these, and the terminator itself is left in place.
fn is_span_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[derive(Clone, Debug)]
pub struct PrefixStripper {
    rules: Vec<PrefixRule>,
}

impl Default for PrefixStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixStripper {
    /// Stripper with the built-in `ACTION[Server]` and `ACTION[Main]` rules.
    pub fn new() -> Self {
        Self { rules: DEFAULT_RULES.clone() }
    }

    /// Stripper with no rules; every line passes through unchanged.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a stripper from the merged config.
    ///
    /// Empty markers and custom rules with an invalid regex are skipped with a
    /// warning rather than failing the run.
    pub fn from_config(cfg: &Config) -> Self {
        let mut stripper = if cfg.default_markers { Self::new() } else { Self::empty() };

        for (idx, marker) in cfg.markers.iter().enumerate() {
            if marker.is_empty() {
                tracing::warn!("Ignoring empty marker at position {}", idx + 1);
                continue;
            }
            let name = format!("marker_{}", idx + 1);
            stripper = stripper.with_rule(PrefixRule::marker(name, marker));
        }

        for (idx, custom) in cfg.custom_rules.iter().enumerate() {
            match compile_custom_rule(custom, idx) {
                Ok(rule) => stripper = stripper.with_rule(rule),
                Err(e) => {
                    tracing::warn!("Skipping custom rule '{}': {}", custom.pattern, e);
                }
            }
        }

        stripper
    }

    /// Append a rule; it runs after every rule already present.
    pub fn with_rule(mut self, rule: PrefixRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every configured prefix span from `line`.
    pub fn strip_prefixes(&self, line: &str) -> String {
        let mut counts = BTreeMap::new();
        self.strip_counted(line, &mut counts)
    }

    /// Strip `text` segment by segment, accumulating per-rule counts into `counts`.
    pub fn strip_counted(&self, text: &str, counts: &mut BTreeMap<String, usize>) -> String {
        if self.rules.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        for piece in text.split_inclusive(is_span_terminator) {
            let body = piece.strip_suffix(is_span_terminator).unwrap_or(piece);
            out.push_str(self.strip_segment(body, counts));
            out.push_str(&piece[body.len()..]);
        }
        out
    }

    fn strip_segment<'a>(
        &self,
        segment: &'a str,
        counts: &mut BTreeMap<String, usize>,
    ) -> &'a str {
        let mut rest = segment;
        for rule in &self.rules {
            if let Some(end) = rule.strip_end(rest) {
                rest = &rest[end..];
                *counts.entry(rule.name.clone()).or_insert(0) += 1;
            }
        }
        rest
    }
}

fn compile_custom_rule(cr: &CustomPrefixRule, idx: usize) -> Result<PrefixRule, regex::Error> {
    let pattern = Regex::new(&cr.pattern)?;
    let name = cr.name.clone().unwrap_or_else(|| format!("custom_{}", idx + 1));
    Ok(PrefixRule::pattern(name, pattern))
}
