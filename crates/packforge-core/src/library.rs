//! Library dependency coordinates
//!
//! A library line has the form `group:name:version[:classifier][:url]`.
//! The URL segment may itself contain colons (`https://...`), so the line is
//! split into at most five segments and the last one is kept whole.

use crate::{PackError, PackResult};
use std::str::FromStr;

/// Maximum number of colon-separated segments in a coordinate line.
const MAX_SEGMENTS: usize = 5;

/// A library the pack depends on, parsed from one coordinate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryReference {
    pub group: String,
    pub name: String,
    pub version: String,
    pub classifier: Option<String>,
    pub url: Option<String>,
}

impl LibraryReference {
    /// Parse a single coordinate line.
    ///
    /// The line is used as given; callers trim it first. An empty classifier
    /// segment means "no classifier" so that `g:n:v::http://x` can carry a
    /// URL without one. A present URL segment is kept even when empty.
    pub fn parse(line: &str) -> PackResult<Self> {
        let segments: Vec<&str> = line.splitn(MAX_SEGMENTS, ':').collect();

        if segments.len() < 3 || segments[..3].iter().any(|s| s.is_empty()) {
            return Err(PackError::MalformedCoordinate {
                line: line.to_string(),
            });
        }

        let classifier = segments
            .get(3)
            .filter(|s| !s.is_empty())
            .map(|s| (*s).to_string());
        let url = segments.get(4).map(|s| (*s).to_string());

        Ok(Self {
            group: segments[0].to_string(),
            name: segments[1].to_string(),
            version: segments[2].to_string(),
            classifier,
            url,
        })
    }

    /// Parse every line of a libraries file, in order.
    ///
    /// Each line is trimmed. Blank lines are not skipped: they fail like any
    /// other coordinate without three segments.
    pub fn parse_list(content: &str) -> PackResult<Vec<Self>> {
        content.lines().map(|line| Self::parse(line.trim())).collect()
    }
}

impl FromStr for LibraryReference {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LibraryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "library/library_tests.rs"]
mod library_tests;
