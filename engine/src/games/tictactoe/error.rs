use super::Mark;

#[derive(Debug)]
pub enum GameError {
    IllegalMove { index: usize, mark: Mark },
    InvalidMark(Mark),
    NoLegalMoves,
    ScriptExhausted,
    Input(String),
    Io(std::io::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalMove { index, mark } => {
                write!(f, "Illegal move: {:?} cannot be placed at cell {}", mark, index)
            }
            GameError::InvalidMark(mark) => write!(f, "{:?} is not a player mark", mark),
            GameError::NoLegalMoves => write!(f, "No legal moves available"),
            GameError::ScriptExhausted => write!(f, "Scripted player ran out of moves"),
            GameError::Input(message) => write!(f, "Input error: {}", message),
            GameError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}
