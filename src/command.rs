use std::fmt;
use std::str::FromStr;

use crate::app::Intent;

/// One line typed into the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    /// Set both bounds and apply them in one go.
    Range(i64, i64),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  d, draw          draw a number
  u, undo          put the last number back
  min N / max N    edit a bound
  apply            reset to the edited bounds
  range MIN MAX    edit both bounds and reset
  show             print the board
  json             print the board as JSON
  q, quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    NotANumber(String),
    UnexpectedArgument(String),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "type a command, or `help`"),
            Self::Unknown(cmd) => write!(f, "unknown command `{cmd}`, try `help`"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::NotANumber(text) => write!(f, "`{text}` is not a number"),
            Self::UnexpectedArgument(text) => write!(f, "unexpected argument `{text}`"),
        }
    }
}

impl std::error::Error for ParseCommandError {}

/// Parse a bound typed by the user. Fractions are truncated toward zero;
/// values outside `i64` are refused rather than clamped.
pub fn parse_bound(text: &str) -> Option<i64> {
    // 2^63 is exact in f64; anything at or past it does not fit.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .map(f64::trunc)
            .filter(|f| f.is_finite() && (-LIMIT..LIMIT).contains(f))
            .map(|f| f as i64)
    })
}

fn bound(arg: Option<&str>, what: &'static str) -> Result<i64, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingArgument(what))?;
    parse_bound(arg).ok_or_else(|| ParseCommandError::NotANumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "d" | "draw" => Command::Intent(Intent::Draw),
            "u" | "undo" => Command::Intent(Intent::Undo),
            "min" => Command::Intent(Intent::SetMin(bound(words.next(), "start number")?)),
            "max" => Command::Intent(Intent::SetMax(bound(words.next(), "end number")?)),
            "apply" | "reset" => Command::Intent(Intent::ApplyRange),
            "range" => {
                let min = bound(words.next(), "start number")?;
                let max = bound(words.next(), "end number")?;
                Command::Range(min, max)
            }
            "show" | "s" => Command::Show,
            "json" => Command::Json,
            "help" | "h" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}
