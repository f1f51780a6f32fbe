//! Low-level value types shared by the board, the rules and the engine.
//!
//! - [`coord`]: integer cell coordinates and common step sets (king moves).
//! - [`player`]: opaque player identity and the forward [`player::Direction`] of a piece.

pub mod coord;
pub mod player;
