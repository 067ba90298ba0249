mod board;
mod bot_controller;
mod error;
mod evaluator;
mod game_loop;
mod input;
mod lines;
mod types;

pub use board::{BOARD_SIDE, BOARD_SIZE, Board, Cell, is_invalid, is_valid};
pub use bot_controller::{BotType, MinimaxBot, Player, RandomBot, ScriptedPlayer, create_bot};
pub use error::GameError;
pub use evaluator::{all_possible_moves, game_status, has_player_won, is_cats_game, is_complete};
pub use game_loop::{GameResult, Winner, play_from, play_the_game, simulate};
pub use input::{is_valid_input, parse_move_input};
pub use lines::{COLUMNS, DIAGONALS, LINES, Line, ROWS};
pub use types::{GameStatus, Mark};
