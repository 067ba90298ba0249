/// Parses a 1-based cell number typed by a human into a board index, accepting
/// it only when that index is one of `possible_moves`.
pub fn parse_move_input(input: &str, possible_moves: &[usize]) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    let index = number.checked_sub(1)?;
    possible_moves.contains(&index).then_some(index)
}

pub fn is_valid_input(input: &str, possible_moves: &[usize]) -> bool {
    parse_move_input(input, possible_moves).is_some()
}
