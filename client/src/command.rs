use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "Available commands:
  create <count>                  - Generate <count> fake blogs on the server
  list                            - List every blog
  get <id>                        - Show one blog
  update <id> \"<title>\" <content> - Replace the title and content of a blog
  delete <id>                     - Delete a blog
  stats                           - Show how many blogs the server holds
  help                            - Show this message
  quit                            - Exit the client";

/// One line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(i64),
    List,
    Get(String),
    Update {
        id: String,
        title: String,
        content: String,
    },
    Delete(String),
    Stats,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("count must be an integer, got '{0}'")]
    InvalidCount(String),
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("Unknown command: '{0}'")]
    Unknown(String),
}

/// Splits on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> Result<Vec<String>, ParseCommandError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if in_quotes {
        return Err(ParseCommandError::UnterminatedQuote);
    }
    if pending {
        args.push(current);
    }
    Ok(args)
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let args = split_args(line.trim())?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["create", count] => count
                .parse::<i64>()
                .map(Command::Create)
                .map_err(|_| ParseCommandError::InvalidCount(count.to_string())),
            ["create", ..] => Err(ParseCommandError::Usage("create <count>")),
            ["list"] => Ok(Command::List),
            ["get", id] => Ok(Command::Get(id.to_string())),
            ["get", ..] => Err(ParseCommandError::Usage("get <id>")),
            ["update", id, title, content] => Ok(Command::Update {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
            }),
            ["update", ..] => Err(ParseCommandError::Usage("update <id> \"<title>\" <content>")),
            ["delete", id] => Ok(Command::Delete(id.to_string())),
            ["delete", ..] => Err(ParseCommandError::Usage("delete <id>")),
            ["stats"] => Ok(Command::Stats),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(line.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  stats ".parse::<Command>(), Ok(Command::Stats));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("create 3".parse::<Command>(), Ok(Command::Create(3)));
        assert_eq!("create -1".parse::<Command>(), Ok(Command::Create(-1)));
        assert_eq!("delete abc".parse::<Command>(), Ok(Command::Delete("abc".into())));
    }

    #[test]
    fn test_update_with_quoted_title() {
        let cmd: Command = r#"update 42 "New Title" content"#.parse().unwrap();
        assert_eq!(
            cmd,
            Command::Update {
                id: "42".into(),
                title: "New Title".into(),
                content: "content".into(),
            }
        );
    }

    #[test]
    fn test_empty_quoted_arg_is_kept() {
        let cmd: Command = r#"update 42 "" x"#.parse().unwrap();
        assert_eq!(
            cmd,
            Command::Update {
                id: "42".into(),
                title: "".into(),
                content: "x".into(),
            }
        );
    }

    #[test]
    fn test_malformed_commands() {
        assert_eq!(
            "create lots".parse::<Command>(),
            Err(ParseCommandError::InvalidCount("lots".into()))
        );
        assert_eq!(
            "get".parse::<Command>(),
            Err(ParseCommandError::Usage("get <id>"))
        );
        assert_eq!(
            r#"update 1 "open"#.parse::<Command>(),
            Err(ParseCommandError::UnterminatedQuote)
        );
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(ParseCommandError::Unknown("frobnicate".into()))
        );
    }
}
