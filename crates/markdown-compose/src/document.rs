use std::path::Path;

use crate::error::{ComposeError, ComposeResult};
use crate::fs::write_document;

/// Paired-delimiter emphasis styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Crossed,
    InlineCode,
}

impl Emphasis {
    /// The delimiter placed on both sides of the wrapped text.
    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
            Emphasis::Crossed => "~~",
            Emphasis::InlineCode => "`",
        }
    }
}

/// Heading depth, validated to the ATX range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 6;

    pub fn new(value: i64) -> ComposeResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ComposeError::HeadingLevelOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Number of list rows, validated to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(usize);

impl RowCount {
    pub fn new(value: i64) -> ComposeResult<Self> {
        if value > 0 {
            Ok(Self(value as usize))
        } else {
            Err(ComposeError::RowCountOutOfRange(value))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Append-only sequence of formatted fragments.
///
/// Fragments are never reordered, edited, or removed once appended; the
/// rendered document is their concatenation in append order with no
/// separator of its own. Separators, where a format needs one, are baked
/// into the fragment text at append time.
#[derive(Debug, Default, Clone)]
pub struct Document {
    fragments: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Appends `text` unmodified.
    pub fn append_plain(&mut self, text: &str) {
        self.fragments.push(text.to_string());
    }

    /// Wraps `text` in the style's delimiter pair and appends it as one
    /// fragment, so the pair is never split across fragments.
    pub fn append_emphasis(&mut self, text: &str, style: Emphasis) {
        let mark = style.delimiter();
        self.fragments.push(format!("{mark}{text}{mark}"));
    }

    /// Appends `[label](url)` verbatim. Labels or URLs containing
    /// brackets, parentheses, or newlines produce syntactically broken
    /// Markdown; they are not rejected.
    pub fn append_link(&mut self, label: &str, url: &str) {
        self.fragments.push(format!("[{label}]({url})"));
    }

    /// Appends an ATX heading with a trailing newline. A separating
    /// newline is prepended unless the buffer is empty or the previous
    /// fragment already ends in one, so headings start on a fresh line
    /// without introducing a blank line.
    pub fn append_heading(&mut self, text: &str, level: HeadingLevel) {
        let hashes = "#".repeat(level.get() as usize);
        let on_fresh_line = match self.fragments.last() {
            None => true,
            Some(last) => last.ends_with('\n'),
        };

        let fragment = if on_fresh_line {
            format!("{hashes} {text}\n")
        } else {
            format!("\n{hashes} {text}\n")
        };
        self.fragments.push(fragment);
    }

    /// Renders `rows` as one list fragment: `"{i}. {row}"` lines when
    /// `ordered` (1-based), `"* {row}"` lines otherwise, joined with
    /// newlines plus a single trailing newline.
    pub fn append_list(&mut self, rows: &[String], ordered: bool) {
        let rendered: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if ordered {
                    format!("{}. {row}", index + 1)
                } else {
                    format!("* {row}")
                }
            })
            .collect();

        self.fragments.push(format!("{}\n", rendered.join("\n")));
    }

    /// Appends a single newline as its own fragment.
    pub fn append_newline(&mut self) {
        self.fragments.push("\n".to_string());
    }

    /// Concatenates all fragments in append order.
    pub fn render(&self) -> String {
        self.fragments.concat()
    }

    /// Writes `render()` to `path`, creating or overwriting the file.
    pub fn save(&self, path: &Path) -> ComposeResult<()> {
        write_document(path, &self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emphasis_wraps_with_exact_delimiters() {
        let cases = [
            (Emphasis::Bold, "**strong**"),
            (Emphasis::Italic, "*lean*"),
            (Emphasis::Crossed, "~~gone~~"),
            (Emphasis::InlineCode, "`code`"),
        ];

        for (style, expected) in cases {
            let mut document = Document::new();
            let text = expected.trim_matches(|ch| ch == '*' || ch == '~' || ch == '`');
            document.append_emphasis(text, style);
            assert_eq!(document.render(), expected);
            assert_eq!(document.fragment_count(), 1);
        }
    }

    #[test]
    fn link_renders_label_then_url() {
        let mut document = Document::new();
        document.append_link("docs", "https://example.com");
        assert_eq!(document.render(), "[docs](https://example.com)");
    }

    #[test]
    fn heading_on_empty_document_has_no_leading_newline() {
        let mut document = Document::new();
        document.append_heading("Title", HeadingLevel::new(2).unwrap());
        assert_eq!(document.render(), "## Title\n");
    }

    #[test]
    fn heading_after_inline_text_starts_a_fresh_line() {
        let mut document = Document::new();
        document.append_plain("intro");
        document.append_heading("Title", HeadingLevel::new(1).unwrap());
        assert_eq!(document.render(), "intro\n# Title\n");
    }

    #[test]
    fn heading_after_newline_fragment_adds_no_blank_line() {
        let mut document = Document::new();
        document.append_plain("intro");
        document.append_newline();
        document.append_heading("Title", HeadingLevel::new(3).unwrap());
        assert_eq!(document.render(), "intro\n### Title\n");
    }

    #[test]
    fn consecutive_headings_never_double_newlines() {
        let mut document = Document::new();
        document.append_heading("First", HeadingLevel::new(1).unwrap());
        document.append_heading("Second", HeadingLevel::new(2).unwrap());
        assert_eq!(document.render(), "# First\n## Second\n");
        assert!(!document.render().contains("\n\n"));
    }

    #[test]
    fn ordered_list_numbers_rows_from_one() {
        let mut document = Document::new();
        document.append_list(&["a".to_string(), "b".to_string()], true);
        assert_eq!(document.render(), "1. a\n2. b\n");
    }

    #[test]
    fn unordered_list_bullets_every_row() {
        let mut document = Document::new();
        document.append_list(&["a".to_string(), "b".to_string()], false);
        assert_eq!(document.render(), "* a\n* b\n");
    }

    #[test]
    fn list_is_a_single_fragment() {
        let mut document = Document::new();
        document.append_list(&["x".to_string(), "y".to_string(), "z".to_string()], true);
        assert_eq!(document.fragment_count(), 1);
    }

    #[test]
    fn render_is_pure_over_append_history() {
        let build = || {
            let mut document = Document::new();
            document.append_plain("Hi");
            document.append_emphasis("there", Emphasis::Bold);
            document.append_heading("Notes", HeadingLevel::new(2).unwrap());
            document.append_list(&["one".to_string()], false);
            document
        };

        let first = build();
        let second = build();
        assert_eq!(first.render(), second.render());
        assert_eq!(first.render(), first.render());
    }

    #[test]
    fn heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_err());
        assert!(HeadingLevel::new(7).is_err());
        assert_eq!(HeadingLevel::new(1).unwrap().get(), 1);
        assert_eq!(HeadingLevel::new(6).unwrap().get(), 6);
    }

    #[test]
    fn row_count_rejects_zero_and_negatives() {
        assert!(RowCount::new(0).is_err());
        assert!(RowCount::new(-3).is_err());
        assert_eq!(RowCount::new(1).unwrap().get(), 1);
        assert_eq!(RowCount::new(42).unwrap().get(), 42);
    }

    #[test]
    fn save_writes_rendered_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        let mut document = Document::new();
        document.append_plain("Hi");
        document.append_emphasis("there", Emphasis::Bold);
        document.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hi**there**");
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.md");

        let document = Document::new();
        let err = document.save(&path).unwrap_err();
        assert!(matches!(err, ComposeError::Io(_)));
    }
}
