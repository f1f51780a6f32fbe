use thiserror::Error;

use crate::core::coord::Coord;
use crate::core::player::Player;

/// Errors raised while building a game or applying moves.
///
/// Move generation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A layout row contains a character that is not a cell token
    #[error("layout row {row}, column {column}: unknown cell token {token:?}")]
    UnknownCellToken { row: usize, column: usize, token: char },

    /// The configuration is structurally unusable
    #[error("invalid game config: {reason}")]
    InvalidConfig { reason: String },

    /// The configuration text is not valid TOML for a game config
    #[error("cannot parse game config: {0}")]
    ConfigSyntax(#[from] toml::de::Error),

    /// A move was requested from an empty cell
    #[error("no piece at {0}")]
    NoPieceAt(Coord),

    /// A move was requested for a piece of the side not to move
    #[error("piece at {at} belongs to {owner}, but {to_move} is to move")]
    NotYourTurn {
        at: Coord,
        owner: Player,
        to_move: Player,
    },

    /// The requested option is not among the piece's current options
    #[error("illegal move from {from} to {target}")]
    IllegalMove { from: Coord, target: Coord },
}
