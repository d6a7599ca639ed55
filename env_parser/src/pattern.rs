//! Whole-string patterns for [`EnvParser::get_string`](crate::EnvParser::get_string).
//!
//! A [`Pattern`] keeps the source the caller wrote (for error messages) next to
//! a compiled [`Regex`] anchored at both ends, so `[a-z]+` only accepts values
//! made entirely of lowercase letters. Explicit `^`/`$` anchors in the source
//! are harmless.
//!
//! Anchoring wraps the source as `^(?:source)$`. A source that ends inside a
//! verbose-mode comment (`(?x)abc # note`) would swallow the closing anchor, so
//! both [`Pattern::new`] and `TryFrom<Regex>` reject it with the compile error
//! instead of silently falling back to substring search.
//!
//! Syntax is the `regex` crate's. Unlike JavaScript, the Perl classes `\d`,
//! `\w`, `\s` and `\b` are Unicode-aware, so `\d+` accepts `"١٢"`. Use
//! `[0-9]` or the ASCII-only `(?-u:\d)` when only ASCII digits are valid.
//!
//! `Display` renders `/source/` with any unescaped `/` outside a character
//! class written as `\/`, the way a JavaScript regex literal prints.

use std::{fmt, str::FromStr};

use regex::Regex;

/// A case-sensitive regular expression matched against the whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    /// Compile `source` as a whole-string pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The pattern as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// `true` if the entire `value` matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }
}

/// Renders as `/source/`, escaping bare slashes.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        let mut escaped = false;
        let mut in_class = false;
        for c in self.source.chars() {
            match c {
                '/' if !escaped && !in_class => f.write_str("\\/")?,
                _ => write!(f, "{c}")?,
            }
            match c {
                '\\' if !escaped => {
                    escaped = true;
                    continue;
                }
                '[' if !escaped => in_class = true,
                ']' if !escaped => in_class = false,
                _ => {}
            }
            escaped = false;
        }
        f.write_str("/")
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = regex::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<Regex> for Pattern {
    type Error = regex::Error;

    fn try_from(re: Regex) -> Result<Self, Self::Error> {
        Self::new(re.as_str())
    }
}
