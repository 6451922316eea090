//! Starterpack CLI
//!
//! Inspect and edit the persisted theme config, export the generated theme
//! as JSON or CSS variables, and list the application's routes.

mod editor;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use starterpack_app::{App, AppConfig, CONFIG_FILE};
use starterpack_theme::{Color, PartialThemeConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generative theme toolkit
#[derive(Parser, Debug)]
#[command(name = "starterpack")]
#[command(about = "Inspect, edit and export the Starterpack theme")]
#[command(version)]
struct Cli {
    /// Config file or directory containing starterpack.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Enable developer-only pages
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the theme derived from the stored config
    Theme {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// CSS selector for the variable block
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Read or change the stored config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List available routes
    Routes,

    /// Interactive theme editing session
    Edit,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the current config as JSON
    Show,
    /// Apply a partial update and save it
    Set(SetArgs),
    /// Restore the default config and save it
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Css,
}

#[derive(Args, Debug, Default)]
struct SetArgs {
    #[arg(long, value_parser = finite_f32)]
    primary_hue: Option<f32>,
    #[arg(long, value_parser = finite_f32)]
    spacing_unit: Option<f32>,
    #[arg(long, value_parser = finite_f32)]
    radius_scale: Option<f32>,
    #[arg(long, value_parser = finite_f32)]
    base_font_size: Option<f32>,
    #[arg(long, value_parser = finite_f32)]
    shadow_intensity: Option<f32>,
    #[arg(long)]
    background_color: Option<Color>,
    #[arg(long)]
    text_color: Option<Color>,
    #[arg(long)]
    shadow_color: Option<Color>,

    /// Partial config as JSON, e.g. '{"primaryHue": 200}'. Flags win over it.
    #[arg(long, value_name = "PATCH")]
    json: Option<String>,
}

/// Numeric flag values; NaN and infinities have no JSON form
fn finite_f32(raw: &str) -> std::result::Result<f32, String> {
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("{raw} is not a finite number")),
        Err(err) => Err(err.to_string()),
    }
}

impl SetArgs {
    fn into_partial(self) -> Result<PartialThemeConfig> {
        let mut partial = match &self.json {
            Some(json) => serde_json::from_str::<PartialThemeConfig>(json)
                .context("Invalid --json patch")?,
            None => PartialThemeConfig::new(),
        };

        partial.primary_hue = self.primary_hue.or(partial.primary_hue);
        partial.spacing_unit = self.spacing_unit.or(partial.spacing_unit);
        partial.radius_scale = self.radius_scale.or(partial.radius_scale);
        partial.base_font_size = self.base_font_size.or(partial.base_font_size);
        partial.shadow_intensity = self.shadow_intensity.or(partial.shadow_intensity);
        partial.background_color = self.background_color.or(partial.background_color);
        partial.text_color = self.text_color.or(partial.text_color);
        partial.shadow_color = self.shadow_color.or(partial.shadow_color);

        Ok(partial)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config.logging.level);

    let mut app = App::start(config)?;
    let result = run(cli.command, &mut app);
    app.stop();
    result
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut config = AppConfig::load_or_default(&path)?;

    if let Some(dir) = &cli.storage_dir {
        config.storage.dir = Some(dir.clone());
    }
    if cli.dev {
        config.features.dev_pages = true;
    }
    Ok(config)
}

/// Log to stderr; RUST_LOG takes precedence over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, app: &mut App) -> Result<()> {
    match command {
        Command::Theme { format, selector } => {
            let theme = app.store().theme();
            match format {
                Format::Json => println!("{}", theme.to_json_pretty()?),
                Format::Css => print!("{}", theme.to_css(&selector)),
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show => print_config(app)?,
            ConfigAction::Set(args) => {
                let partial = args.into_partial()?;
                if partial.is_empty() {
                    anyhow::bail!("Nothing to set. Pass at least one field flag or --json.");
                }
                if !app.store_mut().update(&partial) {
                    tracing::info!("config unchanged");
                }
                app.store_mut()
                    .flush()
                    .context("Failed to save theme config")?;
                print_config(app)?;
            }
            ConfigAction::Reset => {
                app.store_mut().reset();
                app.store_mut()
                    .flush()
                    .context("Failed to save theme config")?;
                print_config(app)?;
            }
        },
        Command::Routes => {
            for route in app.router().routes() {
                let marker = if route.dev_only { "  (dev)" } else { "" };
                println!("{:<16} {}{}", route.path, route.label, marker);
            }
        }
        Command::Edit => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(editor::run(app))?;
        }
    }
    Ok(())
}

fn print_config(app: &App) -> Result<()> {
    let json = serde_json::to_string_pretty(&*app.store().config())?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("starterpack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["routes", "--dev", "--storage-dir", "/tmp/sp"]);
        assert!(cli.dev);
        assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/sp")));
        assert!(matches!(cli.command, Command::Routes));
    }

    #[test]
    fn test_theme_format() {
        let cli = parse(&["theme", "--format", "css"]);
        match cli.command {
            Command::Theme { format, selector } => {
                assert_eq!(format, Format::Css);
                assert_eq!(selector, ":root");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_set_flags_override_json_patch() {
        let cli = parse(&[
            "config",
            "set",
            "--json",
            r##"{"primaryHue": 10, "textColor": "#000"}"##,
            "--primary-hue",
            "200",
            "--background-color",
            "#101010",
        ]);
        let Command::Config {
            action: ConfigAction::Set(args),
        } = cli.command
        else {
            panic!("expected config set");
        };

        let partial = args.into_partial().unwrap();
        assert_eq!(
            partial,
            PartialThemeConfig::new()
                .primary_hue(200.0)
                .text_color(Color::BLACK)
                .background_color(Color::from_hex(0x101010))
        );
    }

    #[test]
    fn test_set_rejects_bad_input() {
        assert!(Cli::try_parse_from(["starterpack", "config", "set", "--text-color", "nope"]).is_err());
        for value in ["NaN", "inf", "-inf"] {
            assert!(
                Cli::try_parse_from(["starterpack", "config", "set", "--primary-hue", value])
                    .is_err(),
                "accepted --primary-hue {value}"
            );
        }
        assert!(Cli::try_parse_from(["starterpack", "config", "set", "--spacing-unit=-4"]).is_ok());

        let args = SetArgs {
            json: Some(r#"{"hue": 1}"#.into()),
            ..SetArgs::default()
        };
        assert!(args.into_partial().is_err());
    }
}
