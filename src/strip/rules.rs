//! Prefix rules
//!
//! ORDER MATTERS: rules run one after another on each line segment, and every rule
//! sees the text left behind by the rules before it. `ACTION[Server]` always runs
//! before `ACTION[Main]`; configured markers and regex rules follow in config order.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Debug)]
pub enum PrefixMatcher {
    /// A literal marker; the span ends after its last occurrence.
    Marker(String),
    /// A regex; the span ends after the latest-starting match.
    Pattern(Regex),
}

#[derive(Clone, Debug)]
pub struct PrefixRule {
    pub name: String,
    pub matcher: PrefixMatcher,
}

impl PrefixRule {
    pub fn marker(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self { name: name.into(), matcher: PrefixMatcher::Marker(marker.into()) }
    }

    pub fn pattern(name: impl Into<String>, pattern: Regex) -> Self {
        Self { name: name.into(), matcher: PrefixMatcher::Pattern(pattern) }
    }

    /// Byte offset just past the last match in `segment`, or `None` if the rule
    /// does not match at all.
    ///
    /// Everything before the returned offset is the span to strip. The search is
    /// an explicit last-occurrence scan, so `"M a M b"` with marker `"M "` yields
    /// the offset of `b`.
    pub fn strip_end(&self, segment: &str) -> Option<usize> {
        match &self.matcher {
            PrefixMatcher::Marker(marker) => {
                segment.rfind(marker.as_str()).map(|idx| idx + marker.len())
            }
            PrefixMatcher::Pattern(re) => latest_match_end(re, segment),
        }
    }
}

/// End offset of the match that starts furthest to the right.
///
/// `find_iter` only yields non-overlapping matches, which can miss a later start
/// hidden inside an earlier match, so every start position is tried instead.
fn latest_match_end(re: &Regex, segment: &str) -> Option<usize> {
    let mut pos = 0usize;
    let mut end = None;
    while pos <= segment.len() {
        let Some(m) = re.find_at(segment, pos) else {
            break;
        };
        end = Some(m.end());
        let step = segment[m.start()..].chars().next().map_or(1, char::len_utf8);
        pos = m.start() + step;
    }
    end
}

pub const ACTION_SERVER_MARKER: &str = "ACTION[Server]: ";
pub const ACTION_MAIN_MARKER: &str = "ACTION[Main]: ";

pub static DEFAULT_RULES: Lazy<Vec<PrefixRule>> = Lazy::new(|| {
    vec![
        PrefixRule::marker("action_server", ACTION_SERVER_MARKER),
        PrefixRule::marker("action_main", ACTION_MAIN_MARKER),
    ]
});
