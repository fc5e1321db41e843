//! # Command Dispatch
//!
//! Input lines are free text: a command keyword followed by its arguments.
//! [`parse`] scans [`COMMANDS`] in order and takes the first keyword the line
//! starts with, so table order decides between keywords that share a prefix.
//!
//! ```text
//! "show all 3"        -> (ShowAll, "3")
//! "add Ann +380501111111"  -> (Add, "Ann +380501111111")
//! "what?"             -> (Unknown, "what?")
//! ```
//!
//! Keywords match case-insensitively; arguments are passed through as typed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Hello,
    Add,
    Phone,
    Change,
    ShowAll,
    Exit,
    Birthday,
    Find,
    DaysLeft,
    RemovePhone,
    SetBirthday,
    Unknown,
}

/// Keyword table, scanned top to bottom.
pub const COMMANDS: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("phone", Command::Phone),
    ("change", Command::Change),
    ("show all", Command::ShowAll),
    ("exit", Command::Exit),
    ("close", Command::Exit),
    ("good bye", Command::Exit),
    ("birthday", Command::Birthday),
    ("find", Command::Find),
    ("days left", Command::DaysLeft),
    ("remove phone", Command::RemovePhone),
    ("set birthday", Command::SetBirthday),
];

impl Command {
    /// The keyword a user types for this command.
    pub fn keyword(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, cmd)| *cmd == self)
            .map(|(kw, _)| *kw)
            .unwrap_or("")
    }

    /// Whether running this command can change the book.
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Command::Add | Command::Change | Command::RemovePhone | Command::SetBirthday
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Unknown => write!(f, "<unknown>"),
            cmd => write!(f, "{}", cmd.keyword()),
        }
    }
}

/// A line split into its command and the argument text after the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: Command,
    pub args: &'a str,
}

impl<'a> Invocation<'a> {
    /// Whitespace-separated argument words.
    pub fn words(&self) -> Vec<&'a str> {
        self.args.split_whitespace().collect()
    }
}

pub fn parse(line: &str) -> Invocation<'_> {
    let line = line.trim();
    for (keyword, command) in COMMANDS {
        if let Some(rest) = strip_keyword(line, keyword) {
            return Invocation {
                command: *command,
                args: rest.trim(),
            };
        }
    }
    Invocation {
        command: Command::Unknown,
        args: line,
    }
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&line[keyword.len()..])
    } else {
        None
    }
}
