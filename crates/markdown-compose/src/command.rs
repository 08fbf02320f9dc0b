//! Command vocabulary for the interactive session.
//!
//! Token spellings are an external contract: users type them at the
//! prompt, so they must stay exactly as listed here.

/// A command token that produces exactly one new fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Plain,
    Bold,
    Italic,
    Header,
    Link,
    InlineCode,
    OrderedList,
    UnorderedList,
    NewLine,
    Crossed,
}

impl Formatter {
    /// Every formatter, in the order the help listing presents them.
    pub const ALL: [Formatter; 10] = [
        Formatter::Plain,
        Formatter::Bold,
        Formatter::Italic,
        Formatter::Header,
        Formatter::Link,
        Formatter::InlineCode,
        Formatter::OrderedList,
        Formatter::UnorderedList,
        Formatter::NewLine,
        Formatter::Crossed,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Formatter::Plain => "plain",
            Formatter::Bold => "bold",
            Formatter::Italic => "italic",
            Formatter::Header => "header",
            Formatter::Link => "link",
            Formatter::InlineCode => "inline-code",
            Formatter::OrderedList => "ordered-list",
            Formatter::UnorderedList => "unordered-list",
            Formatter::NewLine => "new-line",
            Formatter::Crossed => "crossed",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "plain" => Some(Formatter::Plain),
            "bold" => Some(Formatter::Bold),
            "italic" => Some(Formatter::Italic),
            "header" => Some(Formatter::Header),
            "link" => Some(Formatter::Link),
            "inline-code" => Some(Formatter::InlineCode),
            "ordered-list" => Some(Formatter::OrderedList),
            "unordered-list" => Some(Formatter::UnorderedList),
            "new-line" => Some(Formatter::NewLine),
            "crossed" => Some(Formatter::Crossed),
            _ => None,
        }
    }
}

/// A command token that controls the session instead of formatting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Help,
    Done,
}

impl Directive {
    pub const ALL: [Directive; 2] = [Directive::Help, Directive::Done];

    pub fn token(self) -> &'static str {
        match self {
            Directive::Help => "!help",
            Directive::Done => "!done",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "!help" => Some(Directive::Help),
            "!done" => Some(Directive::Done),
            _ => None,
        }
    }
}

/// Any recognized command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Formatter(Formatter),
    Directive(Directive),
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        Directive::from_token(token)
            .map(Command::Directive)
            .or_else(|| Formatter::from_token(token).map(Command::Formatter))
    }
}
