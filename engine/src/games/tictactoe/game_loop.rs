use std::fmt;

use crate::log;
use super::{Board, GameError, GameStatus, Mark, MinimaxBot, Player, game_status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    X,
    O,
    Draw,
}

impl Winner {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Winner::X => Some(Mark::X),
            Winner::O => Some(Mark::O),
            Winner::Draw => None,
        }
    }

    fn from_status(status: GameStatus) -> Option<Winner> {
        match status {
            GameStatus::XWon => Some(Winner::X),
            GameStatus::OWon => Some(Winner::O),
            GameStatus::Draw => Some(Winner::Draw),
            GameStatus::InProgress => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::X => write!(f, "X"),
            Winner::O => write!(f, "O"),
            Winner::Draw => write!(f, "Cat's game"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Winner,
    pub board: Board,
}

/// Plays a game with X moving first, from `starting_board` or an empty board.
pub fn play_the_game<PX, PO>(
    player_x: &mut PX,
    player_o: &mut PO,
    starting_board: Option<Board>,
) -> Result<GameResult, GameError>
where
    PX: Player + ?Sized,
    PO: Player + ?Sized,
{
    play_from(player_x, player_o, starting_board.unwrap_or_default(), Mark::X)
}

/// Runs the turn loop from `board` with `to_move` about to play, until X wins,
/// O wins or the board fills up, checked in that order before every move.
pub fn play_from<PX, PO>(
    player_x: &mut PX,
    player_o: &mut PO,
    board: Board,
    to_move: Mark,
) -> Result<GameResult, GameError>
where
    PX: Player + ?Sized,
    PO: Player + ?Sized,
{
    let mut board = board;
    let mut current_mark = to_move;

    loop {
        if let Some(winner) = Winner::from_status(game_status(&board)) {
            return Ok(GameResult { winner, board });
        }

        let index = match current_mark {
            Mark::X => player_x.choose_move(Mark::X, &board)?,
            Mark::O => player_o.choose_move(Mark::O, &board)?,
            Mark::Empty => return Err(GameError::InvalidMark(Mark::Empty)),
        };

        board = board.with_move(index, current_mark).inspect_err(|e| {
            log!("Rejected move from {}: {}", current_mark, e);
        })?;

        current_mark = match current_mark.opponent() {
            Some(next) => next,
            None => return Err(GameError::InvalidMark(current_mark)),
        };
    }
}

/// Plays `board` out to the end with minimax on both sides.
pub fn simulate(board: Board, to_move: Mark) -> Result<GameResult, GameError> {
    play_from(&mut MinimaxBot, &mut MinimaxBot, board, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{RandomBot, ScriptedPlayer};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn unused_player() -> impl FnMut(Mark, &Board) -> usize {
        |_: Mark, _: &Board| -> usize { panic!("player should not be asked to move on a finished board") }
    }

    #[test]
    fn test_determines_the_winner_of_finished_boards() {
        let x_board = board("XXX......");
        let x_result = play_the_game(&mut unused_player(), &mut unused_player(), Some(x_board)).unwrap();
        assert_eq!(x_result.winner, Winner::X);
        assert_eq!(x_result.board, x_board);

        let o_board = board("OOO......");
        let o_result = play_the_game(&mut unused_player(), &mut unused_player(), Some(o_board)).unwrap();
        assert_eq!(o_result.winner, Winner::O);
        assert_eq!(o_result.board, o_board);

        let cats_board = board("XOXOXOOXO");
        let cats_result = play_the_game(&mut unused_player(), &mut unused_player(), Some(cats_board)).unwrap();
        assert_eq!(cats_result.winner, Winner::Draw);
        assert_eq!(cats_result.board, cats_board);
    }

    #[test]
    fn test_allows_players_to_play() {
        let mut x_player = ScriptedPlayer::new([0, 1, 2]);
        let mut o_player = ScriptedPlayer::new([3, 7]);

        let result = play_the_game(&mut x_player, &mut o_player, None).unwrap();

        assert_eq!(result.winner, Winner::X);
        assert_eq!(result.board, board("XXXO...O."));
        assert_eq!(x_player.remaining(), 0);
        assert_eq!(o_player.remaining(), 0);
    }

    #[test]
    fn test_closures_are_players() {
        let mut x_moves = [4usize, 0, 6, 5, 7].into_iter();
        let mut o_moves = [8usize, 2, 3, 1].into_iter();
        let mut x_player = |mark: Mark, _: &Board| {
            assert_eq!(mark, Mark::X);
            x_moves.next().unwrap()
        };
        let mut o_player = |mark: Mark, _: &Board| {
            assert_eq!(mark, Mark::O);
            o_moves.next().unwrap()
        };

        let result = play_the_game(&mut x_player, &mut o_player, None).unwrap();

        assert_eq!(result.winner, Winner::Draw);
        assert_eq!(result.board, board("XOOOXXXXO"));
    }

    #[test]
    fn test_o_can_win() {
        let mut x_player = ScriptedPlayer::new([0, 1, 8]);
        let mut o_player = ScriptedPlayer::new([2, 4, 6]);

        let result = play_the_game(&mut x_player, &mut o_player, None).unwrap();

        assert_eq!(result.winner, Winner::O);
        assert_eq!(result.board, board("XXO.O.O.X"));
    }

    #[test]
    fn test_resumes_partially_played_board() {
        let mut x_player = ScriptedPlayer::new([5]);
        let mut o_player = ScriptedPlayer::new(Vec::new());

        let result = play_the_game(&mut x_player, &mut o_player, Some(board("...XX.OO."))).unwrap();

        assert_eq!(result.winner, Winner::X);
    }

    #[test]
    fn test_play_from_respects_side_to_move() {
        // X would win on 2, but it is O's turn and O completes the middle row.
        let mut x_player = ScriptedPlayer::new(Vec::new());
        let mut o_player = ScriptedPlayer::new([3]);

        let result = play_from(&mut x_player, &mut o_player, board("XX..OO.X."), Mark::O).unwrap();

        assert_eq!(result.winner, Winner::O);
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut x_player = ScriptedPlayer::new([4, 0]);
        let mut o_player = ScriptedPlayer::new([4]);

        let result = play_the_game(&mut x_player, &mut o_player, None);

        assert!(matches!(result, Err(GameError::IllegalMove { index: 4, mark: Mark::O })));
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let mut x_player = |_: Mark, _: &Board| 9usize;
        let mut o_player = ScriptedPlayer::new(Vec::new());

        let result = play_the_game(&mut x_player, &mut o_player, None);

        assert!(matches!(result, Err(GameError::IllegalMove { index: 9, mark: Mark::X })));
    }

    #[test]
    fn test_player_errors_propagate() {
        let mut x_player = ScriptedPlayer::new([0]);
        let mut o_player = ScriptedPlayer::new(Vec::new());

        let result = play_the_game(&mut x_player, &mut o_player, None);

        assert!(matches!(result, Err(GameError::ScriptExhausted)));
    }

    #[test]
    fn test_play_from_rejects_empty_mark() {
        let result = play_from(&mut unused_player(), &mut unused_player(), Board::new(), Mark::Empty);
        assert!(matches!(result, Err(GameError::InvalidMark(Mark::Empty))));
    }

    #[test]
    fn test_random_games_always_finish() {
        for seed in 0..50 {
            let mut x_player = RandomBot::new(seed);
            let mut o_player = RandomBot::new(seed.wrapping_add(1000));

            let result = play_the_game(&mut x_player, &mut o_player, None).unwrap();

            assert!(game_status(&result.board).is_terminal());
            let x_count = result.board.count(Mark::X);
            let o_count = result.board.count(Mark::O);
            assert!(x_count == o_count || x_count == o_count + 1);
        }
    }

    #[test]
    fn test_simulate_is_a_draw_from_empty_corner_reply() {
        let result = simulate(board("X........"), Mark::O).unwrap();
        assert_eq!(result.winner, Winner::Draw);
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::X.to_string(), "X");
        assert_eq!(Winner::O.to_string(), "O");
        assert_eq!(Winner::Draw.to_string(), "Cat's game");
        assert_eq!(Winner::Draw.mark(), None);
    }
}
