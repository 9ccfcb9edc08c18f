use std::str::FromStr;

use anyhow::{Context, bail};
use sapper_core::{Coord, Coord2};

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   place or remove a flag
  n           new game
  ?           this help
  q           quit";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::ToggleFlag(parse_coords(&mut words)?),
            "n" | "new" => Command::Reset,
            "?" | "h" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after command");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut axis = |name: &str| -> anyhow::Result<Coord> {
        let word = words.next().with_context(|| format!("missing {name}"))?;
        word.parse()
            .with_context(|| format!("{name} must be a number from 0 to {}", Coord::MAX))
    };
    let row = axis("row")?;
    let col = axis("column")?;
    Ok((row, col))
}
