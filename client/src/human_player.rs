use std::io::{self, BufRead, Cursor, Stdin, Write};

use tictactoe_engine::tictactoe::{
    BOARD_SIDE, Board, GameError, Mark, Player, all_possible_moves, parse_move_input,
};

pub trait LineSource {
    /// Returns 0 at end of input, like `BufRead::read_line`.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.lock().read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Renders the board with the 1-based number of every open cell, so the
/// human knows what to type.
pub fn render_with_hints(board: &Board) -> String {
    let mut out = String::new();
    for (row, cells) in board.cells().chunks(BOARD_SIDE).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let labels: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, mark)| match mark {
                Mark::Empty => (row * BOARD_SIDE + col + 1).to_string(),
                filled => filled.to_string(),
            })
            .collect();
        out.push_str(&format!(" {} \n", labels.join(" | ")));
    }
    out
}

/// Prompts for a cell until the answer names an open one.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, mark: Mark, board: &Board) -> Result<usize, GameError> {
        let possible_moves = all_possible_moves(board.cells());
        if possible_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        loop {
            writeln!(self.output)?;
            write!(self.output, "{}", render_with_hints(board))?;
            write!(self.output, "Player {}, choose a cell: ", mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::Input("input closed before a move was chosen".to_string()));
            }

            if let Some(index) = parse_move_input(&line, &possible_moves) {
                return Ok(index);
            }
            writeln!(self.output, "'{}' is not an open cell.", line.trim())?;
        }
    }
}
