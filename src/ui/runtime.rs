//! Line-oriented terminal front end.
//!
//! Plays the rendering collaborator: turns stdin lines into coordinator
//! events and prints the view model whenever a new snapshot is published.

use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::coordinator::{is_valid_term, Coordinator, CoordinatorEvent, CoordinatorHandle};
use crate::ui::render::render;
use crate::ui::search::ViewState;

const HELP: &str = "\
Type a word and press enter to update the input.
Commands:
  :submit          look up the current word
  :accept          take the suggested correction
  :split on|off    toggle auto-splitting
  :limit N         associations per split
  :advanced        show/hide advanced options
  :mark NAME       highlight an association
  :show            print the current view
  :quit            exit";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(String),
    Submit,
    Accept,
    Split(bool),
    Limit(u32),
    ToggleAdvanced,
    Mark(String),
    Show,
    Help,
    Quit,
}

/// Parse a line. Anything not starting with `:` is new input text.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Input(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("submit" | "s", None) => Ok(Command::Submit),
        ("accept" | "a", None) => Ok(Command::Accept),
        ("split", Some("on")) => Ok(Command::Split(true)),
        ("split", Some("off")) => Ok(Command::Split(false)),
        ("split", _) => Err("usage: :split on|off".to_string()),
        ("limit", Some(value)) => match value.parse::<u32>() {
            Ok(limit) if limit > 0 => Ok(Command::Limit(limit)),
            _ => Err(format!("invalid limit '{}': expected a positive number", value)),
        },
        ("limit", None) => Err("usage: :limit N".to_string()),
        ("advanced", None) => Ok(Command::ToggleAdvanced),
        ("mark", Some(name)) => Ok(Command::Mark(name.to_string())),
        ("mark", None) => Err("usage: :mark NAME".to_string()),
        ("show", None) => Ok(Command::Show),
        ("help" | "h", None) => Ok(Command::Help),
        ("quit" | "q", None) => Ok(Command::Quit),
        _ => Err(format!("unknown command ':{}' (try :help)", rest.trim())),
    }
}

/// Run the interactive loop until `:quit`, EOF or Ctrl-C.
pub async fn run_interactive(handle: CoordinatorHandle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut view = handle.subscribe();

    stdout.write_all(format!("{}\n\n", HELP).as_bytes()).await?;
    stdout.flush().await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Show) => {
                        let text = render(&handle.snapshot());
                        stdout.write_all(text.as_bytes()).await?;
                    }
                    Ok(Command::Help) => {
                        stdout.write_all(format!("{}\n", HELP).as_bytes()).await?;
                    }
                    Ok(command) => apply(&handle, command)?,
                    Err(message) => {
                        stdout.write_all(format!("  ? {}\n", message).as_bytes()).await?;
                    }
                }
                stdout.flush().await?;
            }
            changed = view.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = render(&view.borrow_and_update());
                stdout.write_all(format!("\n{}", text).as_bytes()).await?;
                stdout.flush().await?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    let _ = handle.shutdown();
    Ok(())
}

fn apply(handle: &CoordinatorHandle, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Input(text) => handle.input_changed(text)?,
        Command::Submit => handle.submit()?,
        Command::Accept => handle.accept_suggestion()?,
        Command::Split(enabled) => handle.advanced_config_changed(Some(enabled), None)?,
        Command::Limit(limit) => handle.advanced_config_changed(None, Some(limit))?,
        Command::ToggleAdvanced => handle.toggle_advanced_search()?,
        Command::Mark(name) => handle.toggle_highlight(name)?,
        Command::Show | Command::Help | Command::Quit => {}
    }
    Ok(())
}

/// Submit `word` once and drive `coordinator` until both halves of the
/// fan-out settled.
///
/// `split` and `limit` override the configured advanced options only when
/// given.
pub async fn run_lookup(
    mut coordinator: Coordinator,
    word: &str,
    split: Option<bool>,
    limit: Option<u32>,
) -> anyhow::Result<ViewState> {
    if !is_valid_term(word) {
        bail!("'{}' is not a word: only letters A-Z are allowed", word);
    }

    coordinator.handle_event(CoordinatorEvent::InputChanged(word.to_string()));
    if split.is_some() || limit.is_some() {
        coordinator.handle_event(CoordinatorEvent::AdvancedConfigChanged {
            split_enabled: split,
            limit,
        });
    }
    coordinator.handle_event(CoordinatorEvent::Submit);

    while coordinator.view().is_loading() {
        if coordinator.step().await.is_break() {
            bail!("coordinator stopped before the lookup finished");
        }
    }

    Ok(coordinator.view().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_input() {
        assert_eq!(parse_command("hello"), Ok(Command::Input("hello".into())));
        assert_eq!(parse_command(""), Ok(Command::Input(String::new())));
        assert_eq!(parse_command("dog\r\n"), Ok(Command::Input("dog".into())));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(":submit"), Ok(Command::Submit));
        assert_eq!(parse_command(":a"), Ok(Command::Accept));
        assert_eq!(parse_command(":split on"), Ok(Command::Split(true)));
        assert_eq!(parse_command(":split off"), Ok(Command::Split(false)));
        assert_eq!(parse_command(":limit 5"), Ok(Command::Limit(5)));
        assert_eq!(parse_command(":advanced"), Ok(Command::ToggleAdvanced));
        assert_eq!(parse_command(":mark moon"), Ok(Command::Mark("moon".into())));
        assert_eq!(parse_command(":q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_command(":limit 0").is_err());
        assert!(parse_command(":limit many").is_err());
        assert!(parse_command(":split maybe").is_err());
        assert!(parse_command(":mark").is_err());
        assert!(parse_command(":frobnicate").is_err());
    }
}
