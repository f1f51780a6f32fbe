use log::info;

use crate::board::Board;
use crate::chess::config::GameConfig;
use crate::chess::piece::Piece;
use crate::core::coord::Coord;
use crate::core::player::Player;
use crate::error::Error;
use crate::rules::move_option::{MoveExtra, MoveOption};
use crate::rules::RuleRegistry;

/// A move that has been applied, with everything it removed from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub player: Player,
    pub from: Coord,
    pub option: MoveOption,
    pub captured: Vec<(Coord, Piece)>,
}

/// Minimal move-application engine.
///
/// Owns the board and all piece history. Players move in the order they
/// were given, cycling. Rules are consulted through a [`RuleRegistry`].
#[derive(Debug)]
pub struct Game {
    board: Board,
    rules: RuleRegistry,
    players: Vec<String>,
    to_move: usize,
    ply: u32,
}

impl Game {
    /// `players[i]` names `Player(i)`.
    pub fn new(board: Board, players: Vec<String>) -> Self {
        Self {
            board,
            rules: RuleRegistry::standard(),
            players,
            to_move: 0,
            ply: 0,
        }
    }

    pub fn from_config(cfg: &GameConfig) -> Result<Self, Error> {
        let board = cfg.build_board()?;
        let names = cfg.players.iter().map(|p| p.name.clone()).collect();
        Ok(Self::new(board, names))
    }

    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        Player(self.to_move as u8)
    }

    pub fn player_name(&self, player: Player) -> Option<&str> {
        self.players.get(player.0 as usize).map(String::as_str)
    }

    /// Options of whichever piece stands on `at`, regardless of turn.
    pub fn move_options(&self, at: Coord) -> Vec<MoveOption> {
        self.rules.move_options(&self.board, at)
    }

    /// Every option of every piece of the side to move, in board order.
    pub fn legal_moves(&self) -> Vec<(Coord, MoveOption)> {
        let player = self.side_to_move();
        self.board
            .pieces()
            .filter(|(_, p)| p.player == player)
            .flat_map(|(at, _)| self.move_options(at).into_iter().map(move |o| (at, o)))
            .collect()
    }

    /// Applies `option` for the piece on `from` and passes the turn.
    ///
    /// The option must be one of the piece's current options.
    pub fn apply(&mut self, from: Coord, option: &MoveOption) -> Result<AppliedMove, Error> {
        let to_move = self.side_to_move();
        let owner = self
            .board
            .piece_at(from)
            .ok_or(Error::NoPieceAt(from))?
            .player;
        if owner != to_move {
            return Err(Error::NotYourTurn {
                at: from,
                owner,
                to_move,
            });
        }
        if !self.move_options(from).contains(option) {
            return Err(Error::IllegalMove {
                from,
                target: option.target,
            });
        }

        let mut captured = Vec::with_capacity(option.captures.len());
        for &at in &option.captures {
            if let Some(piece) = self.board.take(at) {
                captured.push((at, piece));
            }
        }

        let mut piece = self.board.take(from).ok_or(Error::NoPieceAt(from))?;
        if let MoveExtra::Promotion { into } = option.extra {
            piece.kind = into;
        }
        piece.history.last_position = Some(from);
        piece.history.moved_turns_ago = Some(0);
        if let Err(piece) = self.board.place(option.target, piece) {
            // Off-board target: put the mover and every victim back.
            let _ = self.board.place(from, piece);
            for (at, victim) in captured {
                let _ = self.board.place(at, victim);
            }
            return Err(Error::IllegalMove {
                from,
                target: option.target,
            });
        }

        info!(
            "ply {}: {} {} -> {} ({} captured)",
            self.ply,
            self.player_name(to_move).unwrap_or("?"),
            from,
            option,
            captured.len()
        );

        self.advance_turn();

        Ok(AppliedMove {
            player: to_move,
            from,
            option: option.clone(),
            captured,
        })
    }

    fn advance_turn(&mut self) {
        self.ply += 1;
        self.to_move = (self.to_move + 1) % self.players.len().max(1);
        self.board.for_each_history_mut(|h| {
            if let Some(n) = h.moved_turns_ago.as_mut() {
                *n = n.saturating_add(1);
            }
        });
    }
}
