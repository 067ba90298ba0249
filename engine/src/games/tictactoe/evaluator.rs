use super::board::{Cell, is_invalid, is_valid};
use super::lines::{LINES, Line};
use super::{Board, GameStatus, Mark};

/// Degenerate boards (length other than 9) are never won.
pub fn has_player_won<C: Cell>(player: C, board: &[C]) -> bool {
    is_valid(board) && LINES.iter().any(|line| owns_line(player, board, line))
}

/// Every cell filled. Says nothing about whether somebody also won.
pub fn is_cats_game<C: Cell>(board: &[C]) -> bool {
    is_valid(board) && board.iter().all(Cell::is_filled)
}

/// Degenerate boards count as complete: there is nothing left to play on them.
pub fn is_complete<C: Cell>(board: &[C]) -> bool {
    is_invalid(board)
        || filled_symbols(board)
            .into_iter()
            .any(|player| has_player_won(player, board))
        || is_cats_game(board)
}

pub fn all_possible_moves<C: Cell>(board: &[C]) -> Vec<usize> {
    if is_invalid(board) {
        return Vec::new();
    }

    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_filled())
        .map(|(index, _)| index)
        .collect()
}

pub fn game_status(board: &Board) -> GameStatus {
    let cells = board.cells();
    if has_player_won(Mark::X, cells) {
        GameStatus::XWon
    } else if has_player_won(Mark::O, cells) {
        GameStatus::OWon
    } else if is_cats_game(cells) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

fn owns_line<C: Cell>(player: C, board: &[C], line: &Line) -> bool {
    line.iter().all(|&index| board[index] == player)
}

/// Distinct filled symbols in order of first appearance.
fn filled_symbols<C: Cell>(board: &[C]) -> Vec<C> {
    let mut symbols = Vec::new();
    for &cell in board.iter().filter(|cell| cell.is_filled()) {
        if !symbols.contains(&cell) {
            symbols.push(cell);
        }
    }
    symbols
}
