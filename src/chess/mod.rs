//! Piece kinds, starting layouts and game configuration.

pub mod config;
pub mod layout;
pub mod piece;
