//! Control commands
//!
//! One command per line on stdin. Command words are case-insensitive;
//! everything after the command (and the optional color) is the text.

use std::fmt;
use std::str::FromStr;

use ledsign_core::{Color, DisplayMode};

/// Shown by `help`
pub const HELP: &str = "\
static [color] <text>    show centered; scrolls instead if too wide
scroll [color] <text>    scroll the text
clear                    stop any display loop, blank the sign
status                   print state and current message
help                     list commands
quit                     stop and exit
colors: red, green, orange";

/// A parsed control command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show text, static or scrolling
    Show {
        mode: DisplayMode,
        /// `None` means the configured default color
        color: Option<Color>,
        text: String,
    },
    Clear,
    Status,
    Help,
    Quit,
}

/// Command parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    Empty,
    /// First word is not a command
    Unknown(String),
    /// `static`/`scroll` without any text
    MissingText,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => f.write_str("empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command {:?}, try `help`", word),
            CommandError::MissingText => f.write_str("no text given"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Color named by `word`, if it is one of the lit colors
///
/// Numeric codes are not accepted here so that text such as
/// `static 2 for 1` is not taken apart.
fn color_word(word: &str) -> Option<Color> {
    Color::ALL
        .into_iter()
        .filter(|color| color.is_lit())
        .find(|color| color.name().eq_ignore_ascii_case(word))
}

/// Split off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

fn parse_show(mode: DisplayMode, args: &str) -> Result<Command, CommandError> {
    let (first, rest) = split_word(args);
    let (color, text) = match color_word(first) {
        // A lone color name is the text itself
        Some(color) if !rest.is_empty() => (Some(color), rest),
        _ => (None, args),
    };

    if text.is_empty() {
        return Err(CommandError::MissingText);
    }
    Ok(Command::Show {
        mode,
        color,
        text: text.to_owned(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, args) = split_word(line);

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "static" => parse_show(DisplayMode::Static, args),
            "scroll" => parse_show(DisplayMode::Scrolling, args),
            "clear" => Ok(Command::Clear),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }
}
