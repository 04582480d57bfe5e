//! Answer formatting for display.
//!
//! Every step is total: any input string, including the empty string, yields
//! a displayable answer ending in a newline. Source names are joined as given.

use crate::sources::SourceList;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Inline bullet separator produced by the model.
pub const BULLET_SEPARATOR: &str = " - ";

/// Prefix of every normalized bullet line.
pub const BULLET_PREFIX: &str = "- ";

/// Markdown bold marker.
pub const BOLD_MARKER: &str = "**";

/// Paragraph separator followed by line separator (U+2029 U+2028).
///
/// Renderers that collapse ASCII newlines still show the sources as a
/// separate block.
pub const PARAGRAPH_BREAK: &str = "\u{2029}\u{2028}";

/// Label in front of the cited source names.
pub const SOURCES_PREFIX: &str = "Sources: ";

/// A final, user-facing answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormattedAnswer(String);

impl FormattedAnswer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedAnswer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FormattedAnswer> for String {
    fn from(answer: FormattedAnswer) -> Self {
        answer.0
    }
}

/// Put inline `" - "` bullets on their own lines.
///
/// Text without the separator is returned unchanged, so answers that already
/// use one bullet per line are left alone.
pub fn normalize_bullets(text: &str) -> Cow<'_, str> {
    if !text.contains(BULLET_SEPARATOR) {
        return Cow::Borrowed(text);
    }

    let formatted = text.replace(BULLET_SEPARATOR, "\n- ");
    let stripped = formatted.trim_start();
    if stripped.starts_with(BULLET_PREFIX) {
        Cow::Owned(formatted)
    } else {
        Cow::Owned(format!("{}{}", BULLET_PREFIX, stripped))
    }
}

/// Remove every `**` marker.
pub fn strip_bold(text: &str) -> Cow<'_, str> {
    if text.contains(BOLD_MARKER) {
        Cow::Owned(text.replace(BOLD_MARKER, ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Produce the displayable answer from the raw answer text and its sources.
///
/// A missing body is treated as empty. When `sources` is non-empty, a
/// "Sources:" paragraph with the names joined by `", "` is appended. The
/// result ends in exactly one newline unless the last source name itself ends
/// in one.
///
/// # Example
/// ```
/// use kbchat_answer::{finalize, SourceList};
///
/// let answer = finalize("Point A - Point B", &SourceList::new());
/// assert_eq!(answer.as_str(), "- Point A\n- Point B\n");
/// ```
pub fn finalize<'a>(body_text: impl Into<Option<&'a str>>, sources: &SourceList) -> FormattedAnswer {
    let body = body_text.into().unwrap_or_default();

    let bulleted = normalize_bullets(body);
    let unbolded = strip_bold(&bulleted);
    let mut text = unbolded.trim_end().to_string();

    if !sources.is_empty() {
        text.push_str(PARAGRAPH_BREAK);
        text.push_str(SOURCES_PREFIX);
        text.push_str(&sources.join(", "));
    }
    text.push('\n');

    FormattedAnswer(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inline_bullets() {
        assert_eq!(
            normalize_bullets("Point A - Point B - Point C"),
            "- Point A\n- Point B\n- Point C"
        );
    }

    #[test]
    fn test_normalize_keeps_leading_bullet() {
        assert_eq!(
            normalize_bullets("- Point A - Point B"),
            "- Point A\n- Point B"
        );
    }

    #[test]
    fn test_normalize_leading_separator() {
        // A separator at the very start becomes an empty first line, which
        // is stripped before checking for the bullet prefix.
        assert_eq!(normalize_bullets(" - A - B"), "\n- A\n- B");
    }

    #[test]
    fn test_normalize_strips_leading_whitespace_when_prefixing() {
        assert_eq!(normalize_bullets("  Intro - A"), "- Intro\n- A");
    }

    #[test]
    fn test_normalize_passes_through_without_separator() {
        let text = "- already\n- one per line";
        assert!(matches!(normalize_bullets(text), Cow::Borrowed(_)));
        assert_eq!(normalize_bullets(""), "");
        assert_eq!(normalize_bullets("well-known"), "well-known");
    }

    #[test]
    fn test_strip_bold() {
        assert_eq!(strip_bold("**Bold** text"), "Bold text");
        assert_eq!(strip_bold("a ***b***"), "a *b*");
        assert_eq!(strip_bold("no markers"), "no markers");
    }

    #[test]
    fn test_finalize_bullets_without_sources() {
        let answer = finalize("Point A - Point B - Point C", &SourceList::new());
        assert_eq!(answer.as_str(), "- Point A\n- Point B\n- Point C\n");
    }

    #[test]
    fn test_finalize_with_sources() {
        let sources: SourceList = ["a.pdf", "a.pdf", "b.pdf"].into_iter().collect();
        let answer = finalize("**Bold** text", &sources);
        assert_eq!(
            answer.as_str(),
            "Bold text\u{2029}\u{2028}Sources: a.pdf, b.pdf\n"
        );
    }

    #[test]
    fn test_finalize_trims_trailing_whitespace() {
        let answer = finalize("Answer.  \n\n\t", &SourceList::new());
        assert_eq!(answer.as_str(), "Answer.\n");
    }

    #[test]
    fn test_finalize_missing_body() {
        assert_eq!(finalize(None, &SourceList::new()).as_str(), "\n");
        assert_eq!(finalize("", &SourceList::new()).as_str(), "\n");

        let sources: SourceList = ["Guide.pdf"].into_iter().collect();
        assert_eq!(
            finalize(None, &sources).as_str(),
            "\u{2029}\u{2028}Sources: Guide.pdf\n"
        );
    }

    #[test]
    fn test_finalize_joins_sources_verbatim() {
        let sources: SourceList = ["x.pdf", " "].into_iter().collect();
        assert_eq!(
            finalize("Body", &sources).as_str(),
            "Body\u{2029}\u{2028}Sources: x.pdf,  \n"
        );

        let sources: SourceList = ["odd.pdf\n"].into_iter().collect();
        assert_eq!(
            finalize("Text", &sources).as_str(),
            "Text\u{2029}\u{2028}Sources: odd.pdf\n\n"
        );
    }

    #[test]
    fn test_formatted_answer_serializes_as_string() {
        let answer = finalize("Hi", &SourceList::new());
        assert_eq!(serde_json::to_string(&answer).unwrap(), r#""Hi\n""#);
        assert_eq!(answer.to_string(), "Hi\n");
    }
}
