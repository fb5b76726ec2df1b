//! Label matching for the search input.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// How the search term is compared against node labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive fuzzy matching (characters in order, gaps allowed).
    Fuzzy,
}

/// A compiled search term.
///
/// Built once per term and reused for every label in a pass. An empty term
/// matches everything regardless of mode.
pub struct LabelMatcher {
    kind: MatcherKind,
}

enum MatcherKind {
    All,
    Substring(String),
    Fuzzy {
        pattern: Pattern,
        matcher: Matcher,
        buf: Vec<char>,
    },
}

impl LabelMatcher {
    pub fn new(term: &str, mode: MatchMode) -> Self {
        if term.is_empty() {
            return Self {
                kind: MatcherKind::All,
            };
        }
        let kind = match mode {
            MatchMode::Substring => MatcherKind::Substring(term.to_lowercase()),
            MatchMode::Fuzzy => {
                let pattern =
                    Pattern::new(term, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
                // A whitespace-only term yields no atoms and would accept every label.
                if pattern.atoms.is_empty() {
                    MatcherKind::All
                } else {
                    MatcherKind::Fuzzy {
                        pattern,
                        matcher: Matcher::new(Config::DEFAULT),
                        buf: Vec::new(),
                    }
                }
            }
        };
        Self { kind }
    }

    /// Whether this matcher accepts every label.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, MatcherKind::All)
    }

    pub fn matches(&mut self, label: &str) -> bool {
        match &mut self.kind {
            MatcherKind::All => true,
            MatcherKind::Substring(needle) => label.to_lowercase().contains(needle.as_str()),
            MatcherKind::Fuzzy {
                pattern,
                matcher,
                buf,
            } => {
                let haystack = Utf32Str::new(label, buf);
                pattern.score(haystack, matcher).is_some()
            }
        }
    }
}

impl std::fmt::Debug for LabelMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MatcherKind::All => write!(f, "LabelMatcher::All"),
            MatcherKind::Substring(needle) => write!(f, "LabelMatcher::Substring({:?})", needle),
            MatcherKind::Fuzzy { .. } => write!(f, "LabelMatcher::Fuzzy"),
        }
    }
}
