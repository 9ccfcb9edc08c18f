use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sapper_core::{CellCount, Coord, GameSession};

use command::{Command, HELP};
use render::Event;
use settings::{GameSettings, Settings};

mod command;
mod render;
mod settings;

/// Play Minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long)]
    width: Option<Coord>,

    /// Board height in cells
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with a [game] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit one JSON object per command instead of drawing the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = args.config.as_deref().map(Settings::load).transpose()?;
    let overrides = GameSettings {
        width: args.width,
        height: args.height,
        mines: args.mines,
    };
    let config = settings::resolve(settings.as_ref().map(|s| &s.game), &overrides)?;
    log::debug!("seed: {:?}", args.seed);

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(config, seed),
        None => GameSession::new(config),
    }
    .context("Could not start a game")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "{HELP}\n")?;
        draw(&mut out, &session)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read a command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) if args.json => {
                let message = format!("{err:#}");
                render::write_json_line(&mut out, &Event::Error { message })?;
                continue;
            }
            Err(err) => {
                writeln!(out, "{err:#}, type ? for help")?;
                continue;
            }
        };
        log::trace!("command: {command:?}");

        match command {
            Command::Reveal(coords) => match session.reveal(coords) {
                Ok(report) if args.json => {
                    render::write_json_line(&mut out, &Event::Reveal(&report))?;
                }
                Ok(report) => {
                    if let Err(err) = report.into_result() {
                        writeln!(out, "{err}")?;
                    }
                    draw(&mut out, &session)?;
                }
                Err(err) => show_error(&mut out, args.json, err)?,
            },
            Command::ToggleFlag(coords) => match session.toggle_flag(coords) {
                Ok(report) if args.json => {
                    render::write_json_line(&mut out, &Event::Flag(&report))?;
                }
                Ok(report) => {
                    if let Err(err) = report.into_result() {
                        writeln!(out, "{err}")?;
                    }
                    draw(&mut out, &session)?;
                }
                Err(err) => show_error(&mut out, args.json, err)?,
            },
            Command::Reset => {
                session.reset().context("Could not start a new game")?;
                if args.json {
                    let event = Event::NewGame {
                        remaining_flags: session.remaining_flags(),
                        status: session.status(),
                    };
                    render::write_json_line(&mut out, &event)?;
                } else {
                    draw(&mut out, &session)?;
                }
            }
            Command::Help if args.json => {
                render::write_json_line(&mut out, &Event::Help { text: HELP })?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

fn show_error(out: &mut impl Write, json: bool, err: impl Display) -> io::Result<()> {
    if json {
        let message = err.to_string();
        render::write_json_line(out, &Event::Error { message })
    } else {
        writeln!(out, "{err}")
    }
}

fn draw(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    write!(out, "{}", render::render_board(session.board()))?;
    writeln!(out, "flags left: {}", session.remaining_flags())?;
    if let Some(message) = render::status_line(session.status()) {
        writeln!(out, "{message}  (n for a new game)")?;
    }
    Ok(())
}
