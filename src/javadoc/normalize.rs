//! Markup and whitespace normalization for Javadoc text
//!
//! The sanitizer delegates the heavy lifting to a [`TextNormalizer`]. The
//! default [`MarkupNormalizer`] strips comment decoration, HTML tags and
//! inline `{@link}` style tags, and collapses the block to a single line.

use regex::Regex;
use std::sync::OnceLock;

/// Characters kept besides identifier characters and whitespace
const VALID_CHARS: &str = ".,-='/\\!&%():;#${}";

/// Block tags that end the descriptive part of a comment
const TERMINATING_TAGS: &[&str] = &["@param", "@return", "@deprecated"];

static XML_TAG: OnceLock<Regex> = OnceLock::new();
static INLINE_TAGS: OnceLock<Vec<Regex>> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static ESCAPED_URL: OnceLock<Regex> = OnceLock::new();

fn xml_tag() -> &'static Regex {
    XML_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn inline_tags() -> &'static [Regex] {
    INLINE_TAGS.get_or_init(|| {
        [
            r"\{@link\s?(\w+)\}",
            r"\{@link\s?([\w.#(\d,)]+)\}",
            // common typo: @{link Foo}
            r"@\{link\s?(\w+)\}",
            r"@\{link\s?([\w.#(\d,)]+)\}",
            r"\{@\w+\s#?([\w.#(\d,)]+)\}",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
    })
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn escaped_url() -> &'static Regex {
    ESCAPED_URL.get_or_init(|| Regex::new(r"\\(https?:)").expect("valid regex"))
}

/// Collapses a comment block into plain single-line text
pub trait TextNormalizer: Send + Sync {
    /// In summary mode only the first sentence or paragraph is kept.
    fn normalize(&self, text: &str, summary: bool) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupNormalizer;

impl MarkupNormalizer {
    fn collect_lines(text: &str, summary: bool) -> String {
        let mut sb = String::new();
        let mut first = true;

        for line in text.lines() {
            let line = line
                .trim()
                .trim_start_matches('*')
                .trim_end_matches('*')
                .trim();

            if TERMINATING_TAGS.iter().any(|t| line.starts_with(t)) {
                break;
            }
            if line.starts_with('@') {
                continue;
            }

            if !first {
                sb.push(' ');
            }
            sb.push_str(line);

            let have_text = !sb.trim().is_empty();
            if have_text && summary && (line.is_empty() || line.ends_with('.')) {
                break;
            }
            first = false;
        }

        sb
    }
}

impl TextNormalizer for MarkupNormalizer {
    fn normalize(&self, text: &str, summary: bool) -> String {
        if text.is_empty() {
            return String::new();
        }

        let collected = Self::collect_lines(text, summary);
        let mut s = xml_tag().replace_all(&collected, "").into_owned();
        for re in inline_tags() {
            s = re.replace_all(&s, "${1}").into_owned();
        }

        let filtered: String = s
            .chars()
            .filter_map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '$' || VALID_CHARS.contains(c) {
                    Some(c)
                } else if c.is_whitespace() {
                    Some(' ')
                } else {
                    None
                }
            })
            .collect();

        let collapsed = whitespace().replace_all(&filtered, " ");
        let unescaped = escaped_url().replace_all(&collapsed, "${1}");
        unescaped.trim().to_string()
    }
}
