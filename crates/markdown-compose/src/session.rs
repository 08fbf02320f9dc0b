//! Interactive command loop.
//!
//! The session reads one command token per iteration, gathers whatever
//! parameters the command needs through blocking prompts, applies the
//! matching buffer operation, and echoes the full rendered document.
//! The loop ends on `!done`, which saves the document first.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::command::{Command, Directive, Formatter};
use crate::document::{Document, Emphasis, HeadingLevel, RowCount};
use crate::error::{ComposeError, ComposeResult};

/// Where `!done` writes the document unless a caller overrides it.
pub const DEFAULT_OUTPUT_PATH: &str = "output.md";

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// One interactive composition session over a borrowed document.
///
/// Generic over the input and output handles so tests can drive it with
/// in-memory buffers while the binary uses locked stdin/stdout.
pub struct Session<'a, R, W> {
    document: &'a mut Document,
    input: R,
    output: W,
    output_path: PathBuf,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(document: &'a mut Document, input: R, output: W) -> Self {
        Self {
            document,
            input,
            output,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Overrides the path `!done` saves to.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Runs iterations until the exit directive stops the loop.
    pub fn run(&mut self) -> ComposeResult<()> {
        loop {
            if self.step()? == LoopControl::Stop {
                return Ok(());
            }
        }
    }

    /// Executes a single read-dispatch-apply iteration.
    pub fn step(&mut self) -> ComposeResult<LoopControl> {
        let token = self.prompt("Choose a formatter:")?;

        match Command::from_token(&token) {
            None => {
                writeln!(self.output, "Unknown formatting type or command")?;
                Ok(LoopControl::Continue)
            }
            Some(Command::Directive(Directive::Help)) => {
                self.print_help()?;
                Ok(LoopControl::Continue)
            }
            Some(Command::Directive(Directive::Done)) => {
                self.document.save(&self.output_path)?;
                Ok(LoopControl::Stop)
            }
            Some(Command::Formatter(formatter)) => {
                self.apply(formatter)?;
                let rendered = self.document.render();
                writeln!(self.output, "{rendered}")?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn apply(&mut self, formatter: Formatter) -> ComposeResult<()> {
        match formatter {
            Formatter::Plain => {
                let text = self.prompt("Text: ")?;
                self.document.append_plain(&text);
            }
            Formatter::Bold => {
                let text = self.prompt("Text: ")?;
                self.document.append_emphasis(&text, Emphasis::Bold);
            }
            Formatter::Italic => {
                let text = self.prompt("Text: ")?;
                self.document.append_emphasis(&text, Emphasis::Italic);
            }
            Formatter::InlineCode => {
                let text = self.prompt("Text: ")?;
                self.document.append_emphasis(&text, Emphasis::InlineCode);
            }
            Formatter::Crossed => {
                let text = self.prompt("Text: ")?;
                self.document.append_emphasis(&text, Emphasis::Crossed);
            }
            Formatter::Link => {
                let label = self.prompt("Label: ")?;
                let url = self.prompt("URL: ")?;
                self.document.append_link(&label, &url);
            }
            Formatter::Header => {
                let level = self.prompt_heading_level()?;
                let text = self.prompt("Text: ")?;
                self.document.append_heading(&text, level);
            }
            Formatter::OrderedList => {
                let rows = self.prompt_rows()?;
                self.document.append_list(&rows, true);
            }
            Formatter::UnorderedList => {
                let rows = self.prompt_rows()?;
                self.document.append_list(&rows, false);
            }
            Formatter::NewLine => {
                self.document.append_newline();
            }
        }

        Ok(())
    }

    /// Retries until the user enters an integer within [1,6].
    fn prompt_heading_level(&mut self) -> ComposeResult<HeadingLevel> {
        loop {
            let raw = self.prompt("Level: ")?;
            let Ok(value) = raw.trim().parse::<i64>() else {
                writeln!(self.output, "The level must be a whole number")?;
                continue;
            };

            match HeadingLevel::new(value) {
                Ok(level) => return Ok(level),
                Err(_) => {
                    writeln!(self.output, "The level should be within the range of 1 to 6")?;
                }
            }
        }
    }

    /// Retries until the user enters a positive integer.
    fn prompt_row_count(&mut self) -> ComposeResult<RowCount> {
        loop {
            let raw = self.prompt("Number of rows: ")?;
            let Ok(value) = raw.trim().parse::<i64>() else {
                writeln!(self.output, "The number of rows must be a whole number")?;
                continue;
            };

            match RowCount::new(value) {
                Ok(count) => return Ok(count),
                Err(_) => {
                    writeln!(
                        self.output,
                        "The number of rows should be greater than zero"
                    )?;
                }
            }
        }
    }

    fn prompt_rows(&mut self) -> ComposeResult<Vec<String>> {
        let count = self.prompt_row_count()?;
        let mut rows = Vec::with_capacity(count.get());
        for index in 1..=count.get() {
            rows.push(self.prompt(&format!("Row #{index}: "))?);
        }
        Ok(rows)
    }

    fn print_help(&mut self) -> ComposeResult<()> {
        let formatters: Vec<&str> = Formatter::ALL.iter().map(|f| f.token()).collect();
        let directives: Vec<&str> = Directive::ALL.iter().map(|d| d.token()).collect();

        writeln!(self.output, "Available formatters: {}", formatters.join(" "))?;
        writeln!(self.output, "Special commands: {}", directives.join(" "))?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> ComposeResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line, stripping only the line terminator. End of input
    /// mid-session is an error: the exit directive is the only clean
    /// way to finish.
    fn read_line(&mut self) -> ComposeResult<String> {
        let mut buffer = String::new();
        let bytes_read = self.input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            return Err(ComposeError::UnexpectedEof);
        }

        if buffer.ends_with('\n') {
            buffer.pop();

            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        Ok(buffer)
    }
}
