//! Move generation for a diagonal chess variant on boards of arbitrary shape.
//!
//! The centrepiece is the directional pawn rule in [`rules::pawn`]: one-step
//! forward and sideways-forward advances, three diagonal capture offsets, a
//! perpendicular special capture driven by piece history, and promotion on
//! the extreme cells of a column or row. [`game::Game`] is a small engine that
//! applies the resulting move options and keeps that history up to date.

pub mod board;
pub mod chess;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

pub use crate::error::Error;
