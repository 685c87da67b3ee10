//! Session command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on. Range checks on numbers are
//! left to the session, which owns the domain rules.

use tracing::warn;

use crate::layout::ViewMode;

/// A parsed shell-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Back to display rotation 1 and the standard view, keeping the offset.
    NewSession,

    /// Jump to a display rotation.
    Rotation(u8),

    Next,
    Prev,

    /// Set the rotation offset directly.
    Offset(u8),

    /// Set the offset from the setter's starting position.
    Start(u8),

    /// Select a view mode.
    View(ViewMode),

    /// Flip between the standard and actual views.
    Toggle,

    /// Print the current layout as protocol lines.
    Show,

    /// Print the current layout as one JSON line.
    Json,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "newsession" => Some(Command::NewSession),
        "next" => Some(Command::Next),
        "prev" => Some(Command::Prev),
        "toggle" => Some(Command::Toggle),
        "show" => Some(Command::Show),
        "json" => Some(Command::Json),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "rotation" => parse_number(&tokens).map(Command::Rotation),
        "offset" => parse_number(&tokens).map(Command::Offset),
        "start" => parse_number(&tokens).map(Command::Start),
        "view" => parse_view(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses the single numeric argument of `rotation`, `offset` and `start`.
fn parse_number(tokens: &[&str]) -> Option<u8> {
    if tokens.len() != 2 {
        warn!("malformed {}: expected '{} <n>'", tokens[0], tokens[0]);
        return None;
    }
    match tokens[1].parse::<u8>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("invalid {} value: '{}'", tokens[0], tokens[1]);
            None
        }
    }
}

/// Parses `view standard|actual`.
fn parse_view(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed view: expected 'view standard|actual'");
        return None;
    }
    match ViewMode::from_name(tokens[1]) {
        Some(mode) => Some(Command::View(mode)),
        None => {
            warn!("unknown view mode: '{}'", tokens[1]);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("hello"), Some(Command::Hello));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("newsession"), Some(Command::NewSession));
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("prev"), Some(Command::Prev));
        assert_eq!(parse_command("toggle"), Some(Command::Toggle));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("json"), Some(Command::Json));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_and_whitespace() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t\n"), None);
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(parse_command("serve"), None);
    }

    #[test]
    fn parse_with_surrounding_whitespace() {
        assert_eq!(parse_command("  next  "), Some(Command::Next));
        assert_eq!(parse_command("\trotation   4 "), Some(Command::Rotation(4)));
    }

    #[test]
    fn parse_numeric_commands() {
        assert_eq!(parse_command("rotation 3"), Some(Command::Rotation(3)));
        assert_eq!(parse_command("offset 5"), Some(Command::Offset(5)));
        assert_eq!(parse_command("start 6"), Some(Command::Start(6)));
        // Out-of-domain numbers still parse; the session rejects them.
        assert_eq!(parse_command("rotation 9"), Some(Command::Rotation(9)));
    }

    #[test]
    fn parse_numeric_commands_malformed() {
        assert_eq!(parse_command("rotation"), None);
        assert_eq!(parse_command("rotation two"), None);
        assert_eq!(parse_command("offset -1"), None);
        assert_eq!(parse_command("start 1 2"), None);
        assert_eq!(parse_command("rotation 300"), None);
    }

    #[test]
    fn parse_view() {
        assert_eq!(parse_command("view actual"), Some(Command::View(ViewMode::Actual)));
        assert_eq!(parse_command("view standard"), Some(Command::View(ViewMode::Standard)));
        assert_eq!(parse_command("view"), None);
        assert_eq!(parse_command("view upside-down"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name Config value counter"),
            Some(Command::SetOption {
                name: "Config".to_string(),
                value: Some("counter".to_string()),
            })
        );
    }

    #[test]
    fn parse_setoption_value_with_spaces() {
        assert_eq!(
            parse_command("setoption name Overrides value /tmp/my formations.json"),
            Some(Command::SetOption {
                name: "Overrides".to_string(),
                value: Some("/tmp/my formations.json".to_string()),
            })
        );
    }

    #[test]
    fn parse_setoption_without_value() {
        assert_eq!(
            parse_command("setoption name Overrides"),
            Some(Command::SetOption {
                name: "Overrides".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn parse_setoption_malformed() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption Config"), None);
        assert_eq!(parse_command("setoption name value x"), None);
    }
}
