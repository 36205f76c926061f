//! Query compilation.
//!
//! A raw query is split on whitespace into literal tokens. The compiled
//! matcher reports a hit when a text contains any token, ignoring case, and
//! can enumerate every non-overlapping hit for highlighting.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, SearchError};

/// Upper bound for the compiled token pattern.
const MATCHER_SIZE_LIMIT: usize = 16 * (1 << 20);

/// Token separator: Unicode whitespace plus the byte order mark, which
/// `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Capability shared by filtering and highlighting.
pub trait Matcher {
    /// Whether `text` contains at least one hit.
    fn is_match(&self, text: &str) -> bool;

    /// Byte ranges of all non-overlapping hits, in ascending order.
    ///
    /// Scanning is left to right; when two hits overlap, the one that starts
    /// first wins.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>>;
}

/// Case-insensitive literal multi-token matcher.
///
/// Tokens never carry pattern semantics: `"c++"` or `"(draft)"` match those
/// exact characters. When two tokens match at the same position the one that
/// appears first in the query wins.
///
/// Case folding is Unicode-aware, so `k` also matches the Kelvin sign
/// (U+212A) and `s` matches the long s (U+017F).
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    tokens: Vec<String>,
    regex: Regex,
}

impl QueryMatcher {
    /// Compile a raw query.
    ///
    /// Returns `Ok(None)` when the query holds no tokens (empty or
    /// whitespace only), meaning "no filter".
    pub fn compile(raw: &str) -> Result<Option<Self>> {
        let tokens: Vec<String> = raw
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();
        if tokens.is_empty() {
            return Ok(None);
        }

        let pattern = tokens
            .iter()
            .map(String::as_str)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(MATCHER_SIZE_LIMIT)
            .build()
            .map_err(|source| SearchError::Build {
                token_count: tokens.len(),
                source,
            })?;

        tracing::debug!(tokens = tokens.len(), "Compiled query matcher");
        Ok(Some(Self { tokens, regex }))
    }

    /// Tokens in query order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Matcher for QueryMatcher {
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex
            .find_iter(text)
            .map(|found| found.start()..found.end())
            .collect()
    }
}
