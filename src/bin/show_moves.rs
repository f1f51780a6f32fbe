//! Prints a position and its move options.
//!
//! ```text
//! show_moves [--config game.toml] [--play 1,4>1,3 --play 6,3>6,4] [--at 1,3] [--json]
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use diagonal_chess::chess::config::GameConfig;
use diagonal_chess::chess::piece::PieceKind;
use diagonal_chess::core::coord::Coord;
use diagonal_chess::game::Game;
use diagonal_chess::rules::move_option::MoveOption;

#[derive(Parser, Debug)]
#[command(name = "show_moves")]
#[command(about = "Show the move options of a position in the diagonal chess variant")]
struct Cli {
    /// TOML game config (defaults to the built-in diagonal layout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Moves to play first, as `x,y>x,y` with an optional `=<piece>` promotion suffix
    #[arg(short, long)]
    play: Vec<String>,

    /// Only show the options of the piece on this cell
    #[arg(long)]
    at: Option<Coord>,

    /// Print options as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the built-in config as TOML and exit
    #[arg(long, default_value_t = false)]
    dump_config: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    from: Coord,
    options: Vec<&'a MoveOption>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", toml::to_string(&GameConfig::diagonal())?);
        return Ok(());
    }

    let cfg = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_toml_str(&text)?
        }
        None => GameConfig::diagonal(),
    };
    let mut game = Game::from_config(&cfg)?;

    for mv in &cli.play {
        let (from, option) = resolve(&game, mv)?;
        game.apply(from, &option)?;
    }

    let moves: Vec<(Coord, MoveOption)> = match cli.at {
        Some(at) => game.move_options(at).into_iter().map(|o| (at, o)).collect(),
        None => game.legal_moves(),
    };

    if cli.json {
        let mut listings: Vec<Listing<'_>> = Vec::new();
        for (from, option) in &moves {
            match listings.last_mut() {
                Some(l) if l.from == *from => l.options.push(option),
                _ => listings.push(Listing {
                    from: *from,
                    options: vec![option],
                }),
            }
        }
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    let to_move = game.side_to_move();
    println!(
        "{} ({}), ply {}",
        cfg.name,
        game.player_name(to_move).unwrap_or("?"),
        game.ply()
    );
    print!("{}", game.board().render());
    for (from, option) in &moves {
        println!("{from} -> {option}");
    }
    println!("{} option(s)", moves.len());
    Ok(())
}

/// Finds the option named by `x,y>x,y[=kind]` among the current options.
fn resolve(game: &Game, text: &str) -> Result<(Coord, MoveOption)> {
    let (from, rest) = text
        .split_once('>')
        .ok_or_else(|| anyhow!("move {text:?} is not of the form x,y>x,y"))?;
    let (target, promote) = match rest.split_once('=') {
        Some((t, k)) => (t, Some(k.parse::<PieceKind>().map_err(|e| anyhow!(e))?)),
        None => (rest, None),
    };
    let from: Coord = from.parse().map_err(|e: String| anyhow!(e))?;
    let target: Coord = target.parse().map_err(|e: String| anyhow!(e))?;

    let mut candidates = game
        .move_options(from)
        .into_iter()
        .filter(|o| o.target == target && o.promotion() == promote);
    let Some(option) = candidates.next() else {
        bail!("{text}: no such move option");
    };
    if candidates.next().is_some() {
        bail!("{text}: ambiguous move");
    }
    Ok((from, option))
}
