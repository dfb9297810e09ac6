//! Line editor abstraction for the reading shell.
//!
//! The shell talks to a [`LineEditor`], so tests can drive it with scripted
//! input while the binary uses rustyline.

use std::borrow::Cow;

use lectern_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Sets the book names offered for completion.
    fn set_books(&mut self, books: Vec<String>);

    /// Sets the version codes offered after `:version`.
    fn set_versions(&mut self, versions: Vec<String>);
}

/// Shell commands offered for completion.
pub const COMMANDS: &[&str] = &[":help", ":version", ":versions", ":books", ":offline", ":json", ":text", ":quit"];

#[derive(Helper, Completer, Hinter, Validator)]
struct LecternHelper {
    #[rustyline(Completer)]
    completer: ReferenceCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for LecternHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(&'s self, prompt: &'p str, default: bool) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;34m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes book names at the start of a line, commands after `:`, and
/// version codes after `:version`.
#[derive(Default)]
struct ReferenceCompleter {
    books: Vec<String>,
    versions: Vec<String>,
}

impl ReferenceCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let head = &line[..pos];

        if let Some(rest) = head.strip_prefix(":version ") {
            let start = pos - rest.len();
            return (start, matching(rest, self.versions.iter().map(String::as_str)));
        }
        if head.starts_with(':') {
            if head.contains(' ') {
                return (pos, Vec::new());
            }
            return (0, matching(head, COMMANDS.iter().copied()));
        }
        // Nothing to offer once a chapter number has been typed.
        if let Some((_, last)) = head.rsplit_once(' ') {
            if last.chars().any(|c| c.is_ascii_digit()) {
                return (pos, Vec::new());
            }
        }
        (0, matching(head, self.books.iter().map(String::as_str)))
    }
}

fn matching<'a>(typed: &str, options: impl Iterator<Item = &'a str>) -> Vec<Pair> {
    let typed = typed.to_lowercase();
    options
        .filter(|option| option.to_lowercase().starts_with(&typed))
        .map(|option| Pair {
            display: option.to_string(),
            replacement: option.to_string(),
        })
        .collect()
}

impl Completer for ReferenceCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<LecternHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = LecternHelper {
            completer: ReferenceCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_books(&mut self, books: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.books = books;
        }
    }

    fn set_versions(&mut self, versions: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.versions = versions;
        }
    }
}
