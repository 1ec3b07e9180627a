// sentinel-core/src/domain/audit/matcher.rs
//
// Text-matching predicates for governance rules. Rules are data, not
// polymorphic types: a matcher is one of three closed variants, each of
// which yields every non-overlapping occurrence in left-to-right order.

use regex::Regex;

/// A single occurrence reported by a matcher.
///
/// Zero-copy: `text` borrows from the scanned input, `start` is the byte
/// offset of the match within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    pub start: usize,
    pub text: &'t str,
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled regex, evaluated with `find_iter`.
    Pattern(Regex),
    /// Plain substring search. No regex machinery needed for literal rules.
    Literal(String),
    /// Matches `<call>(<identifier>` and keeps the occurrence only when the
    /// identifier does NOT start with one of the allowed prefixes
    /// (case-sensitive). Stands in for a negative lookahead, which the
    /// regex crate does not support.
    Declaration {
        pattern: Regex,
        allowed_prefixes: Vec<String>,
    },
}

impl Matcher {
    pub fn pattern(regex: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(regex)?))
    }

    pub fn literal(needle: impl Into<String>) -> Self {
        Self::Literal(needle.into())
    }

    pub fn declaration<S: AsRef<str>>(
        call: &str,
        allowed_prefixes: &[S],
    ) -> Result<Self, regex::Error> {
        // Group 1 captures the identifier so the prefix check can anchor
        // at its exact start.
        let pattern = Regex::new(&format!(
            r"{}\(\s*([a-zA-Z0-9_]+)",
            regex::escape(call)
        ))?;
        Ok(Self::Declaration {
            pattern,
            allowed_prefixes: allowed_prefixes
                .iter()
                .map(|p| p.as_ref().to_string())
                .collect(),
        })
    }

    /// All non-overlapping occurrences in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<RuleMatch<'t>> {
        match self {
            Self::Pattern(regex) => regex
                .find_iter(text)
                .map(|m| RuleMatch {
                    start: m.start(),
                    text: m.as_str(),
                })
                .collect(),

            Self::Literal(needle) => text
                .match_indices(needle.as_str())
                .map(|(start, matched)| RuleMatch {
                    start,
                    text: matched,
                })
                .collect(),

            Self::Declaration {
                pattern,
                allowed_prefixes,
            } => pattern
                .captures_iter(text)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let identifier = caps.get(1)?.as_str();
                    if allowed_prefixes
                        .iter()
                        .any(|prefix| identifier.starts_with(prefix.as_str()))
                    {
                        return None;
                    }
                    Some(RuleMatch {
                        start: whole.start(),
                        text: whole.as_str(),
                    })
                })
                .collect(),
        }
    }
}
