/// Three board indices that win when they all hold the same mark.
pub type Line = [usize; 3];

pub const ROWS: [Line; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
pub const COLUMNS: [Line; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
pub const DIAGONALS: [Line; 2] = [[0, 4, 8], [2, 4, 6]];

/// Rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    ROWS[0],
    ROWS[1],
    ROWS[2],
    COLUMNS[0],
    COLUMNS[1],
    COLUMNS[2],
    DIAGONALS[0],
    DIAGONALS[1],
];
