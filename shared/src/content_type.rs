//! Content type resolution
//!
//! Maps a declared MIME type string to one of a fixed set of render
//! categories. Resolution is a total pure function over an ordered table
//! of substring matchers: the first matching entry wins, and anything
//! unmatched (including an absent type) falls back to [`RenderCategory::Download`].
//! Categories are never guessed from byte content.

use serde::{Deserialize, Serialize};

/// The finite set of ways a resolved document may be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderCategory {
    /// Embeddable PDF payload
    Pdf,
    /// Directly displayable image
    Image,
    /// Spreadsheet or CSV, decoded into the normalized sheet model
    Tabular,
    /// Markup embedded structurally (after sanitization)
    Html,
    /// Recognized but not renderable: offered as a file
    Download,
    /// Reported for a pane in the errored state; never produced by the resolver
    Error,
}

impl RenderCategory {
    /// Short label for status display and logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Tabular => "tabular",
            Self::Html => "html",
            Self::Download => "download",
            Self::Error => "error",
        }
    }
}

/// Ordered dispatch table: first needle hit wins.
///
/// Order matters: several declared types share substrings (the openxml
/// word/sheet/presentation family), so the more specific rows sit above
/// the catch-all rows for their family.
const MATCH_TABLE: &[(&[&str], RenderCategory)] = &[
    (&["application/pdf"], RenderCategory::Pdf),
    (&["image/"], RenderCategory::Image),
    (
        &[
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "application/vnd.ms-excel",
        ],
        RenderCategory::Tabular,
    ),
    (&["text/csv"], RenderCategory::Tabular),
    (
        &[
            "application/msword",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "text/html",
        ],
        RenderCategory::Html,
    ),
    (
        &[
            "application/vnd.ms-powerpoint",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ],
        RenderCategory::Download,
    ),
];

const PRESENTATION_HINT: &str =
    "PPT/PPTX files cannot be rendered directly. Please download to view.";
const GENERIC_HINT: &str = "This file type is not directly renderable. Please download to view.";

/// Resolve a declared MIME type to its render category.
pub fn resolve(declared: Option<&str>) -> RenderCategory {
    let Some(declared) = declared else {
        return RenderCategory::Download;
    };
    for (needles, category) in MATCH_TABLE {
        if needles.iter().any(|needle| declared.contains(needle)) {
            return *category;
        }
    }
    RenderCategory::Download
}

/// Explanatory message shown alongside a download-only result.
pub fn download_hint(declared: Option<&str>) -> &'static str {
    match declared {
        Some(t) if t.contains("powerpoint") || t.contains("presentationml") => PRESENTATION_HINT,
        _ => GENERIC_HINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_documented_type() {
        let cases = [
            ("application/pdf", RenderCategory::Pdf),
            ("image/png", RenderCategory::Image),
            ("image/jpeg", RenderCategory::Image),
            (
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                RenderCategory::Tabular,
            ),
            ("application/vnd.ms-excel", RenderCategory::Tabular),
            ("text/csv", RenderCategory::Tabular),
            ("application/msword", RenderCategory::Html),
            (
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                RenderCategory::Html,
            ),
            ("text/html", RenderCategory::Html),
            ("application/vnd.ms-powerpoint", RenderCategory::Download),
            (
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                RenderCategory::Download,
            ),
        ];
        for (declared, expected) in cases {
            assert_eq!(resolve(Some(declared)), expected, "declared: {declared}");
        }
    }

    #[test]
    fn resolves_with_parameters_and_charsets() {
        assert_eq!(resolve(Some("text/html; charset=utf-8")), RenderCategory::Html);
        assert_eq!(resolve(Some("text/csv;charset=us-ascii")), RenderCategory::Tabular);
    }

    #[test]
    fn unknown_and_absent_types_fall_back_to_download() {
        assert_eq!(resolve(Some("application/octet-stream")), RenderCategory::Download);
        assert_eq!(resolve(Some("gibberish")), RenderCategory::Download);
        assert_eq!(resolve(None), RenderCategory::Download);
    }

    #[test]
    fn categories_serialize_as_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&RenderCategory::Tabular).unwrap(),
            "\"tabular\""
        );
        let parsed: RenderCategory = serde_json::from_str("\"download\"").unwrap();
        assert_eq!(parsed, RenderCategory::Download);
    }

    #[test]
    fn presentation_types_get_the_specific_hint() {
        assert_eq!(
            download_hint(Some("application/vnd.ms-powerpoint")),
            PRESENTATION_HINT
        );
        assert_eq!(download_hint(Some("application/zip")), GENERIC_HINT);
        assert_eq!(download_hint(None), GENERIC_HINT);
    }
}
