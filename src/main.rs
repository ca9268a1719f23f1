//! filmstrip: a terminal photo gallery with a movable cursor

mod config;
mod gallery;
mod tui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use config::FilmstripConfig;
use tui::theme::{CustomTheme, ThemeVariant};

#[derive(Parser)]
#[command(
    name = "filmstrip",
    version,
    about = "A terminal photo gallery with a movable cursor over an ordered filmstrip"
)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme for this session, overriding the configured one
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Photo name to append to the startup roster (repeatable)
    #[arg(long = "photo", value_name = "NAME")]
    photos: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the available themes
    Themes,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Themes) => {
            list_themes();
            Ok(())
        }
        Some(Command::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "filmstrip", &mut io::stdout());
            Ok(())
        }
        None => run_tui(&cli),
    }
}

fn run_tui(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => FilmstripConfig::load_from(path)?,
        None => FilmstripConfig::load()?,
    };
    config.gallery.photos.extend(cli.photos.iter().cloned());

    let theme_override = cli
        .theme
        .as_deref()
        .map(|name| {
            ThemeVariant::from_name(name)
                .with_context(|| format!("Unknown theme '{name}' (see `filmstrip themes`)"))
        })
        .transpose()?;

    tui::run(&config, theme_override)
}

fn list_themes() {
    println!("{}", "Available themes:".bold());
    for variant in ThemeVariant::all() {
        let marker = if *variant == ThemeVariant::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", variant.display_name().cyan(), marker);
    }
    if CustomTheme::exists() {
        println!("  {}", ThemeVariant::Custom.display_name().magenta());
    } else if let Ok(path) = CustomTheme::file_path() {
        println!(
            "  {} {}",
            "Custom:".dimmed(),
            format!("create {} to enable", path.display()).dimmed()
        );
    }
}
