//! Javadoc extraction and sanitizing
//!
//! [`JavadocBlock`] keeps the raw comment next to its block tags so the
//! signature builder can look up `@param` descriptions. [`JavadocSanitizer`]
//! turns raw comment text into the one-line descriptions used for generated
//! API documentation.

pub mod normalize;

pub use normalize::{MarkupNormalizer, TextNormalizer};

/// A block tag such as `@param id the id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavadocTag {
    /// Tag name including the `@`
    pub name: String,
    /// Everything after the tag name, continuation lines joined by a space
    pub value: String,
}

/// A `/** ... */` comment as found in source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavadocBlock {
    pub raw: String,
    pub tags: Vec<JavadocTag>,
}

impl JavadocBlock {
    pub fn parse(raw: &str) -> Self {
        let body = raw
            .trim()
            .trim_start_matches("/**")
            .trim_end_matches("*/");

        let mut tags = Vec::new();
        let mut current: Option<JavadocTag> = None;

        for line in body.lines() {
            let line = line.trim().trim_start_matches('*').trim();
            if let Some(rest) = line.strip_prefix('@') {
                if let Some(tag) = current.take() {
                    tags.push(tag);
                }
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                current = Some(JavadocTag {
                    name: format!("@{}", name),
                    value: value.to_string(),
                });
            } else if let Some(tag) = current.as_mut() {
                if !line.is_empty() {
                    if !tag.value.is_empty() {
                        tag.value.push(' ');
                    }
                    tag.value.push_str(line);
                }
            }
        }
        if let Some(tag) = current {
            tags.push(tag);
        }

        Self {
            raw: raw.to_string(),
            tags,
        }
    }

    /// Values of every tag with the given name, in order
    pub fn tag_values(&self, name: &str) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|t| t.name == name)
            .map(|t| t.value.as_str())
            .collect()
    }
}

/// Cuts text before its first period, unless the period is the first character
pub fn truncate_at_period(text: &str) -> &str {
    match text.find('.') {
        Some(idx) if idx > 0 => &text[..idx],
        _ => text,
    }
}

/// Cleans raw comment text into a single descriptive line
pub struct JavadocSanitizer {
    normalizer: Box<dyn TextNormalizer>,
}

impl std::fmt::Debug for JavadocSanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavadocSanitizer").finish_non_exhaustive()
    }
}

impl Default for JavadocSanitizer {
    fn default() -> Self {
        Self::new(MarkupNormalizer)
    }
}

impl JavadocSanitizer {
    pub fn new(normalizer: impl TextNormalizer + 'static) -> Self {
        Self {
            normalizer: Box::new(normalizer),
        }
    }

    /// Sanitize a raw comment. Missing or garbage input gives an empty string.
    pub fn sanitize(&self, raw: Option<&str>, summary: bool) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        let mut desc = raw.trim();
        while let Some(rest) = desc.strip_prefix(['\n', '}', '-', '/']) {
            desc = rest.trim();
        }
        while let Some(rest) = desc.strip_suffix(['-', '/']) {
            desc = rest.trim();
        }

        let mut desc = self.normalizer.normalize(desc, summary);
        if desc.is_empty() {
            return desc;
        }

        if let Some(first) = desc.chars().next() {
            if first.is_lowercase() {
                let upper: String = first.to_uppercase().collect();
                desc.replace_range(..first.len_utf8(), &upper);
            }
        }

        if desc.ends_with('.') && only_words(&desc[..desc.len() - 1]) {
            desc.pop();
        }

        desc.trim().to_string()
    }

    /// Summary-mode sanitize cut before the first period
    pub fn summary(&self, raw: Option<&str>) -> String {
        let desc = self.sanitize(raw, true);
        truncate_at_period(&desc).to_string()
    }

    /// Description of the `@param` tag whose value starts with `name`
    ///
    /// Matching is a plain prefix test, so `id` also claims a tag for `idx`
    /// if that tag comes first.
    pub fn param_doc(&self, tags: &[&str], name: &str) -> String {
        tags.iter()
            .find_map(|value| value.strip_prefix(name))
            .map(|desc| self.sanitize(Some(desc), false))
            .unwrap_or_default()
    }
}

fn only_words(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '\'' | '-' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let raw = "/**\n * Adds evidence.\n *\n * @param disputeId The dispute id\n *   to add text evidence to\n * @param documentId The document id\n * @return the result\n */";
        let block = JavadocBlock::parse(raw);
        assert_eq!(
            block.tag_values("@param"),
            vec![
                "disputeId The dispute id to add text evidence to",
                "documentId The document id"
            ]
        );
        assert_eq!(block.tag_values("@return"), vec!["the result"]);
        assert_eq!(block.raw, raw);
    }

    #[test]
    fn test_sanitize_strips_garbage_and_capitalizes() {
        let s = JavadocSanitizer::default();
        assert_eq!(s.sanitize(Some("  -- the value to use //"), false), "The value to use");
        assert_eq!(s.sanitize(Some("} end of block"), false), "End of block");
    }

    #[test]
    fn test_sanitize_removes_period_only_for_plain_words() {
        let s = JavadocSanitizer::default();
        assert_eq!(s.sanitize(Some("The customer's id."), false), "The customer's id");
        assert_eq!(s.sanitize(Some("Uses version 2."), false), "Uses version 2.");
        assert_eq!(s.sanitize(Some("One. Two."), false), "One. Two.");
    }

    #[test]
    fn test_sanitize_null_and_garbage() {
        let s = JavadocSanitizer::default();
        assert_eq!(s.sanitize(None, true), "");
        assert_eq!(s.sanitize(Some("/** */"), true), "");
        assert_eq!(s.sanitize(Some("---///"), false), "");
    }

    #[test]
    fn test_sanitize_idempotent_on_clean_text() {
        let s = JavadocSanitizer::default();
        let clean = "The document id of a previously uploaded document";
        assert_eq!(s.sanitize(Some(clean), false), clean);
        assert_eq!(s.sanitize(Some(clean), true), clean);
    }

    #[test]
    fn test_summary_truncates_at_period() {
        let s = JavadocSanitizer::default();
        let raw = "/** Provides methods to interact with Dispute objects. Extended remarks follow. */";
        assert_eq!(
            s.summary(Some(raw)),
            "Provides methods to interact with Dispute objects"
        );
    }

    #[test]
    fn test_truncate_keeps_leading_period() {
        assert_eq!(truncate_at_period(".hidden"), ".hidden");
        assert_eq!(truncate_at_period("a.b"), "a");
        assert_eq!(truncate_at_period("none"), "none");
    }

    #[test]
    fn test_param_doc_prefix_match() {
        let s = JavadocSanitizer::default();
        let tags = vec!["disputeId The dispute id to add text evidence to", "documentId the document"];
        assert_eq!(s.param_doc(&tags, "disputeId"), "The dispute id to add text evidence to");
        assert_eq!(s.param_doc(&tags, "documentId"), "The document");
        assert_eq!(s.param_doc(&tags, "missing"), "");
    }
}
