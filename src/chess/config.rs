use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::chess::layout::{BoardLayout, Side};
use crate::chess::piece::PieceKind;
use crate::core::player::{Direction, Player};
use crate::error::Error;
use crate::rules::pawn::DEFAULT_PROMOTIONS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /// Forward direction of this player's pawns.
    pub direction: Direction,
}

/// A game description, usually read from TOML:
///
/// ```toml
/// name = "mini"
/// promotions = ["queen", "knight"]
/// rows = ["..k", "...", "P.."]
///
/// [[players]]
/// name = "white"
/// direction = "up"
///
/// [[players]]
/// name = "black"
/// direction = "down"
/// ```
///
/// See [`BoardLayout`] for the row format. Upper-case letters belong to the
/// first player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    #[serde(default = "default_promotions")]
    pub promotions: Vec<PieceKind>,
    pub rows: Vec<String>,
    pub players: Vec<PlayerConfig>,
}

fn default_promotions() -> Vec<PieceKind> {
    DEFAULT_PROMOTIONS.to_vec()
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let cfg: GameConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The diagonal starting position: white in the lower-left corner moving
    /// up and right, black in the upper-right corner moving down and left.
    pub fn diagonal() -> Self {
        let rows = [
            "...prbq.",
            "....pnpk",
            "....ppbn",
            "P....ppr",
            "RPP....p",
            "NBPP....",
            "KPNP....",
            ".QBRP...",
        ];
        Self {
            name: "diagonal".to_string(),
            promotions: default_promotions(),
            rows: rows.iter().map(|r| r.to_string()).collect(),
            players: vec![
                PlayerConfig {
                    name: "white".to_string(),
                    direction: Direction::Up,
                },
                PlayerConfig {
                    name: "black".to_string(),
                    direction: Direction::Down,
                },
            ],
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.players.len() != 2 {
            return Err(Error::InvalidConfig {
                reason: format!("expected 2 players, found {}", self.players.len()),
            });
        }
        if self
            .promotions
            .iter()
            .any(|k| matches!(k, PieceKind::Pawn | PieceKind::King))
        {
            return Err(Error::InvalidConfig {
                reason: "pawns may only promote to knight, bishop, rook or queen".to_string(),
            });
        }
        Ok(())
    }

    pub fn sides(&self) -> [Side; 2] {
        [
            Side {
                player: Player(0),
                direction: self.players[0].direction,
            },
            Side {
                player: Player(1),
                direction: self.players[1].direction,
            },
        ]
    }

    pub fn layout(&self) -> Result<BoardLayout, Error> {
        self.validate()?;
        Ok(BoardLayout::new(self.rows.iter().cloned(), self.sides())
            .with_promotions(self.promotions.clone()))
    }

    pub fn build_board(&self) -> Result<Board, Error> {
        self.layout()?.build()
    }
}
