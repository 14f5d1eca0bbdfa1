//! Content references
//!
//! A reference is the opaque identifier a pane is asked to display: an
//! absolute HTTP(S) URL, a transient local blob handle, or a symbolic
//! patent token of the form `patent:<id>`. References are immutable once
//! parsed; the viewer shell owns them and hands them to the pipeline by
//! value.

use std::fmt;

/// Prefix marking a symbolic patent token
pub const PATENT_PREFIX: &str = "patent:";

/// Prefix marking a transient local blob handle
pub const BLOB_PREFIX: &str = "blob:";

/// An opaque identifier for a document to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentReference {
    /// Absolute HTTP(S) URL, retrieved over the network
    Remote(String),

    /// Transient local object-URL handle (`blob:`), read directly
    LocalBlob(String),

    /// Symbolic token resolved by the external patent collaborator
    Patent(String),
}

impl ContentReference {
    /// Classify a raw input string.
    ///
    /// Returns `None` for empty input or a bare `patent:` prefix with no
    /// identifier. Anything that is not a blob handle or patent token is
    /// treated as a remote URL.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(id) = input.strip_prefix(PATENT_PREFIX) {
            if id.is_empty() {
                return None;
            }
            return Some(Self::Patent(id.to_string()));
        }
        if input.starts_with(BLOB_PREFIX) {
            return Some(Self::LocalBlob(input.to_string()));
        }
        Some(Self::Remote(input.to_string()))
    }

    /// The original spelling of the reference
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remote(url) | Self::LocalBlob(url) => url,
            Self::Patent(id) => id,
        }
    }

    pub fn is_patent(&self) -> bool {
        matches!(self, Self::Patent(_))
    }

    pub fn is_local_blob(&self) -> bool {
        matches!(self, Self::LocalBlob(_))
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) | Self::LocalBlob(url) => write!(f, "{url}"),
            Self::Patent(id) => write!(f, "{PATENT_PREFIX}{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_remote_urls() {
        assert_eq!(
            ContentReference::parse("https://example.com/doc.pdf"),
            Some(ContentReference::Remote("https://example.com/doc.pdf".into()))
        );
    }

    #[test]
    fn classifies_blob_handles() {
        let parsed = ContentReference::parse("blob:http://localhost/123-abc").unwrap();
        assert!(parsed.is_local_blob());
    }

    #[test]
    fn classifies_patent_tokens() {
        assert_eq!(
            ContentReference::parse("patent:US1234567"),
            Some(ContentReference::Patent("US1234567".into()))
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(ContentReference::parse("   "), None);
        assert_eq!(ContentReference::parse("patent:"), None);
    }

    #[test]
    fn display_round_trips_the_original_spelling() {
        for raw in ["patent:EP999", "blob:abc", "http://a/b"] {
            assert_eq!(ContentReference::parse(raw).unwrap().to_string(), raw);
        }
    }
}
