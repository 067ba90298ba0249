use std::cmp::Reverse;
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::game_loop::{Winner, simulate};
use super::{Board, GameError, Mark, all_possible_moves};

/// Chooses a cell for `mark` to play on `board`. The returned index is
/// expected to be one of `all_possible_moves(board)`; the game loop rejects
/// anything else.
pub trait Player {
    fn choose_move(&mut self, mark: Mark, board: &Board) -> Result<usize, GameError>;
}

impl<F> Player for F
where
    F: FnMut(Mark, &Board) -> usize,
{
    fn choose_move(&mut self, mark: Mark, board: &Board) -> Result<usize, GameError> {
        Ok(self(mark, board))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

pub fn create_bot(bot_type: BotType, seed: u64) -> Box<dyn Player> {
    match bot_type {
        BotType::Random => Box::new(RandomBot::new(seed)),
        BotType::Minimax => Box::new(MinimaxBot),
    }
}

/// Picks uniformly among the legal moves, re-sampling on every call.
pub struct RandomBot {
    rng: StdRng,
    seed: u64,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Player for RandomBot {
    fn choose_move(&mut self, _mark: Mark, board: &Board) -> Result<usize, GameError> {
        let available_moves = all_possible_moves(board.cells());
        if available_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..available_moves.len());
        Ok(available_moves[idx])
    }
}

/// Exhaustive minimax: every candidate is scored by playing the game out to
/// the end with both sides using this bot.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxBot;

impl MinimaxBot {
    /// Scores each legal move for `mark` in ascending index order:
    /// `1` for a forced win, `0` for a draw, `-1` for a loss.
    pub fn score_moves(&self, mark: Mark, board: &Board) -> Result<Vec<(usize, i32)>, GameError> {
        let opponent = mark.opponent().ok_or(GameError::InvalidMark(mark))?;

        all_possible_moves(board.cells())
            .into_iter()
            .map(|index| {
                let next = board.with_move(index, mark)?;
                let result = simulate(next, opponent)?;
                Ok((index, score_outcome(result.winner, mark)))
            })
            .collect()
    }
}

impl Player for MinimaxBot {
    fn choose_move(&mut self, mark: Mark, board: &Board) -> Result<usize, GameError> {
        let mut scored = self.score_moves(mark, board)?;
        // Stable sort, so equal scores keep ascending index order.
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored
            .first()
            .map(|&(index, _)| index)
            .ok_or(GameError::NoLegalMoves)
    }
}

fn score_outcome(winner: Winner, mark: Mark) -> i32 {
    match winner.mark() {
        Some(winner_mark) if winner_mark == mark => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// Plays a fixed sequence of moves, in order.
pub struct ScriptedPlayer {
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(&mut self, _mark: Mark, _board: &Board) -> Result<usize, GameError> {
        self.moves.pop_front().ok_or(GameError::ScriptExhausted)
    }
}
