//! Move generation.
//!
//! Each piece kind owns one [`MoveRule`]. A [`RuleRegistry`] maps kinds to
//! rules and answers "which moves does the piece on this cell have?" for the
//! engine. Rules are pure queries: they read the board and piece history and
//! never mutate anything, so a shared `&Board` may be queried from several
//! threads at once.

pub mod move_option;
pub mod pawn;
pub mod riders;

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::board::{Board, PieceView};
use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;

use self::move_option::MoveOption;
use self::pawn::PawnRule;
use self::riders::{LeaperRule, RiderRule};

/// Move computation for one piece kind.
pub trait MoveRule: Send + Sync {
    /// Candidate moves of `piece`, in a deterministic order.
    fn compute_move_options(&self, piece: &PieceView<'_>) -> Vec<MoveOption>;
}

#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<PieceKind, Box<dyn MoveRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directional pawn plus the classical riders and leapers.
    pub fn standard() -> Self {
        let mut reg = Self::new();
        reg.register(PieceKind::Pawn, PawnRule);
        reg.register(PieceKind::Knight, LeaperRule::knight());
        reg.register(PieceKind::Bishop, RiderRule::for_kind(PieceKind::Bishop));
        reg.register(PieceKind::Rook, RiderRule::for_kind(PieceKind::Rook));
        reg.register(PieceKind::Queen, RiderRule::for_kind(PieceKind::Queen));
        reg.register(PieceKind::King, LeaperRule::king());
        reg
    }

    /// Installs `rule` for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: PieceKind, rule: impl MoveRule + 'static) {
        self.rules.insert(kind, Box::new(rule));
    }

    pub fn rule(&self, kind: PieceKind) -> Option<&dyn MoveRule> {
        self.rules.get(&kind).map(|r| r.as_ref())
    }

    /// Move options of the piece on `at`.
    ///
    /// Empty when the cell is empty or no rule is registered for the piece.
    pub fn move_options(&self, board: &Board, at: Coord) -> Vec<MoveOption> {
        let Some(view) = board.piece_view(at) else {
            return Vec::new();
        };
        let Some(rule) = self.rule(view.kind()) else {
            debug!("no move rule registered for {} at {at}", view.kind());
            return Vec::new();
        };
        let options = rule.compute_move_options(&view);
        debug!("{} at {at}: {} option(s)", view.kind(), options.len());
        options
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<PieceKind> = self.rules.keys().copied().collect();
        kinds.sort();
        f.debug_struct("RuleRegistry").field("kinds", &kinds).finish()
    }
}
