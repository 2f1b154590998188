//! Frontmatter header parsing.
//!
//! A document may open with a block delimited by `---` lines holding
//! `key: value` pairs:
//!
//! ```text
//! ---
//! title: Hello World
//! author: Jane Doe
//! ---
//! # Chapter One
//! ```
//!
//! Keys are case-insensitive. The value is everything after the first colon,
//! trimmed, so values may themselves contain colons. Lines without a colon are
//! ignored. When a key appears more than once the last occurrence wins.

use crate::error::ConvertError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Opening delimiter, the shortest interior, and the closing delimiter line.
/// The interior group is skipped for an empty block (`---\n---`).
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)??---(?:\r?\n|\z)")
        .expect("frontmatter pattern is valid")
});

/// Parsed frontmatter keys (lowercased) and their raw string values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

/// The metadata a conversion consumes, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub title: String,
    pub author: Option<String>,
}

/// Parse the frontmatter block at the start of `content`.
///
/// Returns `None` when the text does not open with a delimited block.
pub fn extract(content: &str) -> Option<Frontmatter> {
    let captures = BLOCK.captures(content)?;
    let interior = captures.get(1).map_or("", |m| m.as_str());
    Some(Frontmatter::parse(interior))
}

/// Return `content` with the leading frontmatter block removed.
///
/// Everything after the closing delimiter line is returned untouched; text
/// without a block comes back as is.
pub fn strip(content: &str) -> &str {
    match BLOCK.find(content) {
        Some(m) => &content[m.end()..],
        None => content,
    }
}

impl Frontmatter {
    fn parse(block: &str) -> Self {
        let mut fields = HashMap::new();

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            fields.insert(key, value.trim().to_string());
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Validate the fields a conversion needs: a non-empty `title` and an
    /// optional `author`. Values are taken verbatim.
    pub fn metadata(&self) -> Result<BookMetadata, ConvertError> {
        let title = match self.title() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return Err(ConvertError::MissingTitle),
        };

        let author = self
            .author()
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        Ok(BookMetadata { title, author })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOOK: &str = "---\ntitle: Hello World\nauthor: Jane Doe\n---\n# Chapter One\n\nText.\n";

    #[test]
    fn extracts_title_and_author() {
        let fm = extract(BOOK).unwrap();
        assert_eq!(fm.title(), Some("Hello World"));
        assert_eq!(fm.author(), Some("Jane Doe"));
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let fm = extract("---\nTitle:  Spaced Out  \nAUTHOR: Someone\n---\n").unwrap();
        assert_eq!(fm.get("TITLE"), Some("Spaced Out"));
        assert_eq!(fm.get("author"), Some("Someone"));
    }

    #[test]
    fn values_keep_inner_colons() {
        let fm = extract("---\ntitle: Part 1: The Beginning\n---\nbody").unwrap();
        assert_eq!(fm.title(), Some("Part 1: The Beginning"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let fm = extract("---\njust some words\ntitle: T\n: orphan\n---\n").unwrap();
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.title(), Some("T"));
    }

    #[test]
    fn last_duplicate_wins() {
        let fm = extract("---\ntitle: First\nTitle: Second\n---\n").unwrap();
        assert_eq!(fm.title(), Some("Second"));
    }

    #[test]
    fn missing_block_is_none() {
        assert!(extract("# Just a heading\n").is_none());
        assert!(extract("\n---\ntitle: late\n---\n").is_none());
        assert!(extract("---\ntitle: unterminated\n").is_none());
    }

    #[test]
    fn empty_block_is_present_but_empty() {
        let fm = extract("---\n---\nbody\n").unwrap();
        assert_eq!(fm.len(), 0);
        assert!(matches!(fm.metadata(), Err(ConvertError::MissingTitle)));
    }

    #[test]
    fn crlf_delimiters() {
        let text = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        assert_eq!(extract(text).unwrap().title(), Some("Windows"));
        assert_eq!(strip(text), "Body\r\n");
    }

    #[test]
    fn strip_returns_text_after_closing_line() {
        assert_eq!(strip(BOOK), "# Chapter One\n\nText.\n");
    }

    #[test]
    fn strip_keeps_later_rules_and_whitespace() {
        let text = "---\ntitle: T\n---\n\n  indented\n---\nmore\n";
        assert_eq!(strip(text), "\n  indented\n---\nmore\n");
    }

    #[test]
    fn strip_without_block_is_noop() {
        let text = "No frontmatter here.\n---\n";
        assert_eq!(strip(text), text);
        assert_eq!(strip(strip(text)), text);
    }

    #[test]
    fn closing_delimiter_must_be_whole_line() {
        let text = "---\ntitle: T\n----\nx\n---\nbody";
        let fm = extract(text).unwrap();
        assert_eq!(fm.get("title"), Some("T"));
        assert_eq!(strip(text), "body");
    }

    #[test]
    fn metadata_requires_title() {
        let fm = extract("---\nauthor: Nobody\n---\n").unwrap();
        assert!(matches!(fm.metadata(), Err(ConvertError::MissingTitle)));

        let fm = extract("---\ntitle:\n---\n").unwrap();
        assert!(matches!(fm.metadata(), Err(ConvertError::MissingTitle)));
    }

    #[test]
    fn metadata_author_is_optional() {
        let meta = extract("---\ntitle: Solo\nauthor:\n---\n")
            .unwrap()
            .metadata()
            .unwrap();
        assert_eq!(
            meta,
            BookMetadata {
                title: "Solo".to_string(),
                author: None,
            }
        );
    }

    #[test]
    fn bracketed_values_are_verbatim() {
        let meta = extract("---\ntitle: [Draft] My Book\nauthor: {Anonymous}\n---\n")
            .unwrap()
            .metadata()
            .unwrap();
        assert_eq!(meta.title, "[Draft] My Book");
        assert_eq!(meta.author.as_deref(), Some("{Anonymous}"));
    }

    proptest! {
        #[test]
        fn title_comes_back_trimmed(title in "[^\r\n]*") {
            let text = format!("---\ntitle:{}\n---\nbody\n", title);
            let fm = extract(&text).unwrap();
            prop_assert_eq!(fm.title(), Some(title.trim()));
        }

        #[test]
        fn strip_leaves_exactly_the_rest(
            block in "([a-z]{1,8}: [^\r\n-]{0,20}\n){0,5}[a-z]{1,8}: [^\r\n-]{0,20}",
            rest in "(?s).*",
        ) {
            let text = format!("---\n{}\n---\n{}", block, rest);
            prop_assert_eq!(strip(&text), rest.as_str());
        }
    }
}
