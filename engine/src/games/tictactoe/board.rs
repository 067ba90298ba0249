use std::fmt;
use std::str::FromStr;

use super::{GameError, Mark};

pub const BOARD_SIDE: usize = 3;
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// A value that can occupy a board cell. The evaluator only needs equality
/// and an "is something here" test, so it works for any symbol type.
pub trait Cell: Copy + Eq {
    fn is_filled(&self) -> bool;
}

impl Cell for Mark {
    fn is_filled(&self) -> bool {
        *self != Mark::Empty
    }
}

/// A space is an empty cell, anything else is some player's symbol.
impl Cell for char {
    fn is_filled(&self) -> bool {
        *self != ' '
    }
}

pub fn is_valid<C>(board: &[C]) -> bool {
    board.len() == BOARD_SIZE
}

pub fn is_invalid<C>(board: &[C]) -> bool {
    !is_valid(board)
}

/// Row-major 3x3 grid, `index = row * 3 + col`. Boards are values: applying a
/// move returns a new board and leaves the original untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_legal_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        if mark.opponent().is_none() {
            return Err(GameError::InvalidMark(mark));
        }
        if !self.is_legal_move(index) {
            return Err(GameError::IllegalMove { index, mark });
        }

        let mut next = *self;
        next.cells[index] = mark;
        Ok(next)
    }
}

impl From<[Mark; BOARD_SIZE]> for Board {
    fn from(cells: [Mark; BOARD_SIZE]) -> Self {
        Self::from_cells(cells)
    }
}

/// Parses nine cell characters (`X`, `O`, and `.`, `-` or space for empty).
/// Newlines and `|` separators are ignored so a rendered grid can be pasted.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| *c != '\n' && *c != '\r' && *c != '|')
            .map(|c| Mark::from_char(c).ok_or_else(|| GameError::Input(format!("Invalid cell character '{}'", c))))
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [Mark; BOARD_SIZE] = marks.try_into().map_err(|marks: Vec<Mark>| {
            GameError::Input(format!("Expected {} cells, got {}", BOARD_SIZE, marks.len()))
        })?;

        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {} ", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
