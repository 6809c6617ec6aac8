//! Shell command parsing.

use contacts_core::ContactId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One line of user input mapped to a store action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    SortByName,
    SortByPopularity,
    Delete(ContactId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(value) => write!(f, "unknown command `{value}`; type `help`"),
            Self::MissingArgument(usage) => write!(f, "missing argument; usage: {usage}"),
        }
    }
}

impl Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "sort" => match words.next().map(str::to_ascii_lowercase).as_deref() {
                Some("name") => Ok(Self::SortByName),
                Some("popularity" | "pop") => Ok(Self::SortByPopularity),
                Some(other) => Err(CommandError::Unknown(format!("sort {other}"))),
                None => Err(CommandError::MissingArgument("sort name|popularity")),
            },
            "delete" | "rm" => {
                let raw = words
                    .next()
                    .ok_or(CommandError::MissingArgument("delete <id>"))?;
                Ok(Self::Delete(ContactId::parse_input(raw)))
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP_TEXT: &str = "\
commands:
  list                  show visible contacts
  add                   add a random contact from the reserve
  sort name             sort by name (A-Z)
  sort popularity       sort by popularity (highest first)
  delete <id>           delete a visible contact
  help                  show this help
  quit                  exit";

#[cfg(test)]
mod tests {
    use super::{Command, CommandError};
    use contacts_core::ContactId;

    #[test]
    fn parses_simple_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  ADD ".parse::<Command>(), Ok(Command::Add));
        assert_eq!("sort name".parse::<Command>(), Ok(Command::SortByName));
        assert_eq!("sort Popularity".parse::<Command>(), Ok(Command::SortByPopularity));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parses_delete_with_numeric_or_text_id() {
        assert_eq!(
            "delete 3".parse::<Command>(),
            Ok(Command::Delete(ContactId::Number(3)))
        );
        assert_eq!(
            "rm 11731993-0604-4bee-80d5-67ad845d0a38".parse::<Command>(),
            Ok(Command::Delete(ContactId::Text(
                "11731993-0604-4bee-80d5-67ad845d0a38".to_string()
            )))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "sort".parse::<Command>(),
            Err(CommandError::MissingArgument("sort name|popularity"))
        );
        assert_eq!(
            "delete".parse::<Command>(),
            Err(CommandError::MissingArgument("delete <id>"))
        );
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
