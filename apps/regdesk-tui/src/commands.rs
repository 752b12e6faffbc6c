//! `:` command parsing

use std::path::PathBuf;

use regdesk_core::{Category, ParseEnumError, RegulationStatus};

/// A parsed command-line entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Move the highlighted regulation, with an optional note
    Move {
        category: Category,
        note: Option<String>,
    },
    /// Move every selected regulation
    Bulk(Category),
    Tag(String),
    Untag(String),
    Status(RegulationStatus),
    /// Create a regulation at the top of a column
    New { category: Category, title: String },
    Export(Option<PathBuf>),
    Undo,
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    InvalidArgument(#[from] ParseEnumError),
}

/// Parse the text typed after `:`. Returns `Ok(None)` for a blank line.
pub fn parse_command(input: &str) -> Result<Option<Command>, CommandError> {
    let input = input.trim();
    let Some((name, rest)) = split_word(input) else {
        return Ok(None);
    };

    let command = match name {
        "q" | "quit" => Command::Quit,
        "move" | "mv" => {
            let (category, note) = split_word(rest).ok_or(CommandError::Usage(
                ":move <personal|relevant|irrelevant> [note]",
            ))?;
            Command::Move {
                category: category.parse()?,
                note: (!note.is_empty()).then(|| note.to_string()),
            }
        }
        "bulk" => {
            let category = non_empty(rest, ":bulk <personal|relevant|irrelevant>")?;
            Command::Bulk(category.parse()?)
        }
        "tag" => Command::Tag(non_empty(rest, ":tag <tag>")?.to_string()),
        "untag" => Command::Untag(non_empty(rest, ":untag <tag>")?.to_string()),
        "status" => Command::Status(
            non_empty(
                rest,
                ":status <in-effect|in-planning|partially-applicable|out-of-effect>",
            )?
            .parse()?,
        ),
        "new" => {
            let (category, title) =
                split_word(rest).ok_or(CommandError::Usage(":new <category> <title>"))?;
            if title.is_empty() {
                return Err(CommandError::Usage(":new <category> <title>"));
            }
            Command::New {
                category: category.parse()?,
                title: title.to_string(),
            }
        }
        "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "undo" => Command::Undo,
        "clear" => Command::ClearSelection,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((input, "")),
    }
}

fn non_empty<'a>(value: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(value)
    }
}
