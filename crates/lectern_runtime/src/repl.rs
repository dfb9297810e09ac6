//! The interactive reading shell.

use std::io::{self, Write};

use lectern_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::format::OutputFormat;
use crate::session::Session;

/// What one line of input asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Lookup(&'a str),
    Help,
    SetVersion(&'a str),
    ListVersions,
    ListBooks,
    Offline(Option<bool>),
    Format(OutputFormat),
    Quit,
}

fn parse_command(input: &str) -> Result<Command<'_>> {
    let Some(command) = input.strip_prefix(':') else {
        return Ok(Command::Lookup(input));
    };
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, arg)| (name, arg.trim()));

    match (name, arg) {
        ("help" | "h" | "?", _) => Ok(Command::Help),
        ("version" | "v", "") => Err(Error::invalid_request("version", "usage: :version CODE")),
        ("version" | "v", code) => Ok(Command::SetVersion(code)),
        ("versions", _) => Ok(Command::ListVersions),
        ("books", _) => Ok(Command::ListBooks),
        ("offline", "") => Ok(Command::Offline(None)),
        ("offline", "on") => Ok(Command::Offline(Some(true))),
        ("offline", "off") => Ok(Command::Offline(Some(false))),
        ("offline", _) => Err(Error::invalid_request("offline", "usage: :offline on|off")),
        ("json", _) => Ok(Command::Format(OutputFormat::Json)),
        ("text", _) => Ok(Command::Format(OutputFormat::Text)),
        ("quit" | "q" | "exit", _) => Ok(Command::Quit),
        (other, _) => Err(Error::invalid_request("command", format!("unknown command :{other}; try :help"))),
    }
}

/// The interactive shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a shell with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a shell with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_books(
            session
                .resolver()
                .catalog()
                .books()
                .map(|book| book.localized_name().to_string())
                .collect(),
        );
        editor.set_versions(
            session
                .resolver()
                .versions()
                .iter()
                .map(|version| version.code().to_string())
                .collect(),
        );
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "lectern> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the shell until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            self.editor.add_history(input);

            match self.eval(input) {
                Ok(Some(output)) => print!("{output}"),
                Ok(None) => break,
                Err(e) => Self::print_error(&e),
            }
            let _ = io::stdout().flush();
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line. Returns the text to print, or `None` to exit.
    ///
    /// # Errors
    ///
    /// Returns malformed-command, parse and resolution errors.
    pub fn eval(&mut self, input: &str) -> Result<Option<String>> {
        let output = match parse_command(input.trim())? {
            Command::Lookup(reference) => {
                let mut text = self.session.lookup(reference)?;
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                text
            }
            Command::Help => HELP.to_string(),
            Command::SetVersion(code) => {
                self.session.set_version(code)?;
                format!("version set to {}\n", self.session.version().unwrap_or_default())
            }
            Command::ListVersions => {
                let current = self
                    .session
                    .version()
                    .unwrap_or(self.session.config().default_version.as_str())
                    .to_string();
                self.session
                    .resolver()
                    .versions()
                    .iter()
                    .map(|v| {
                        let marker = if v.code().eq_ignore_ascii_case(&current) { '*' } else { ' ' };
                        format!("{marker} {:<11} {:<10} {}\n", v.code(), v.track().name(), v.label())
                    })
                    .collect()
            }
            Command::ListBooks => {
                let names: Vec<&str> = self
                    .session
                    .resolver()
                    .catalog()
                    .books()
                    .map(|book| book.localized_name())
                    .collect();
                let mut text = names.join(", ");
                text.push('\n');
                text
            }
            Command::Offline(None) => {
                format!("offline: {}\n", if self.session.offline() { "on" } else { "off" })
            }
            Command::Offline(Some(offline)) => {
                self.session.set_offline(offline)?;
                format!("offline: {}\n", if offline { "on" } else { "off" })
            }
            Command::Format(format) => {
                self.session.set_format(format);
                format!("output: {}\n", if format == OutputFormat::Json { "json" } else { "text" })
            }
            Command::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;34mLectern\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a reference like `John 3:16`, or :help. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
REFERENCES
    John 3              A whole chapter
    John 3:16           One verse
    1 Cor 13:4-7        A range

COMMANDS
    :version CODE       Use a version (e.g. KJV, WEB, ALMEIDA)
    :versions           List versions
    :books              List books
    :offline [on|off]   Show or switch external providers
    :json / :text       Switch output format
    :help               This text
    :quit or Ctrl+D     Exit
";
