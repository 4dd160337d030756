//! Group marker extraction.
//!
//! Comment text embeds group lists using a fixed markup convention:
//!
//! ```text
//! Groups : [code]<I>Service Desk, Network Ops</I>[/code]
//! ```
//!
//! The label (`Groups` by default) is configurable so other labelled
//! sections can be mined the same way. Matching is case-insensitive and the
//! capture is non-greedy, so several markers in one blob are found separately.

use regex::{Regex, RegexBuilder};

/// Label used when none is given.
pub const DEFAULT_KEYWORD: &str = "Groups";

/// Compiled marker pattern for one keyword
#[derive(Debug, Clone)]
pub struct GroupPattern {
    keyword: String,
    regex: Regex,
}

impl GroupPattern {
    /// Build the pattern for `keyword`. The keyword is matched literally.
    pub fn new(keyword: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"{}\s*:\s*\[code\]<I>(.*?)</I>\[/code\]",
            regex::escape(keyword)
        );
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Trimmed, non-empty group names in order of appearance.
    pub fn extract<'a>(&'a self, blob: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(blob)
            .filter_map(|caps| caps.get(1))
            .flat_map(|list| list.as_str().split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
