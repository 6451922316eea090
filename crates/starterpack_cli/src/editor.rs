//! Interactive theme editing session
//!
//! Reads commands from stdin on a current-thread runtime. Between commands
//! the loop sleeps until the store's pending write is due, so edits are
//! saved once typing goes quiet, the same way a slider drag would be.

use anyhow::Result;
use starterpack_app::App;
use starterpack_theme::{ConfigField, PartialThemeConfig};
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

const HELP: &str = "\
commands:
  set <field> <value>   change one field (e.g. `set primary-hue 200`)
  show [field]          print the current config, or one field
  css                   print the theme as CSS variables
  save                  write pending changes now
  reset                 restore the default config
  help                  show this message
  quit                  leave the editor";

#[derive(Debug, Clone, PartialEq)]
enum EditCommand {
    Set(PartialThemeConfig),
    Show(Option<ConfigField>),
    Css,
    Save,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Option<EditCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    // Values may contain spaces, e.g. `rgb(16, 20, 24)`
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((line, ""));

    let command = match head {
        "set" => {
            let Some((field, value)) = rest.split_once(char::is_whitespace) else {
                return Err("usage: set <field> <value>".to_string());
            };
            let field: ConfigField = field.parse().map_err(|e| format!("{e}"))?;
            let partial = PartialThemeConfig::from_field(field, value.trim())
                .map_err(|e| format!("{e}"))?;
            EditCommand::Set(partial)
        }
        "show" if rest.is_empty() => EditCommand::Show(None),
        "show" => {
            let field: ConfigField = rest.parse().map_err(|e| format!("{e}"))?;
            EditCommand::Show(Some(field))
        }
        "css" => EditCommand::Css,
        "save" => EditCommand::Save,
        "reset" => EditCommand::Reset,
        "help" | "?" => EditCommand::Help,
        "quit" | "exit" | "q" => EditCommand::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(Some(command))
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

pub async fn run(app: &mut App) -> Result<()> {
    let listener = app.store().subscribe(|theme| {
        debug!(primary = %theme.colors.primary, "theme regenerated");
    });

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = app.next_deadline();
        tokio::select! {
            _ = wait_until(deadline) => {
                if app.tick() {
                    println!("saved");
                }
            }
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(EditCommand::Quit)) => break,
                    Ok(Some(command)) => execute(app, command)?,
                    Ok(None) => {}
                    Err(message) => println!("error: {message}"),
                }
            }
        }
    }

    if app.store().has_pending_write() {
        warn!("leaving editor with unsaved changes");
        println!("unsaved changes discarded (use `save` before quitting)");
    }
    app.store().unsubscribe(listener);
    info!("editor closed");
    Ok(())
}

fn execute(app: &mut App, command: EditCommand) -> Result<()> {
    match command {
        EditCommand::Set(partial) => {
            if app.store_mut().update(&partial) {
                println!("ok");
            } else {
                println!("unchanged");
            }
        }
        EditCommand::Show(None) => {
            println!("{}", serde_json::to_string_pretty(&*app.store().config())?);
        }
        EditCommand::Show(Some(field)) => {
            println!("{field} = {}", app.store().config().field_value(field));
        }
        EditCommand::Css => print!("{}", app.store().theme().to_css(":root")),
        EditCommand::Save => match app.store_mut().flush() {
            Ok(true) => println!("saved"),
            Ok(false) => println!("nothing to save"),
            Err(err) => println!("error: save failed: {err}"),
        },
        EditCommand::Reset => {
            app.store_mut().reset();
            println!("reset to defaults");
        }
        EditCommand::Help => println!("{HELP}"),
        EditCommand::Quit => {}
    }
    Ok(())
}
