use fibtile_core::{Command, Direction};

/// A line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Input {
    Command(Command),
    Quit,
}

/// Maps key names and words to engine input, anything unrecognized yields `None` and is ignored.
pub(crate) fn parse_input(token: &str) -> Option<Input> {
    let token = token.trim();
    if let Some(direction) = parse_direction(token) {
        return Some(Input::Command(direction.into()));
    }

    match token.to_ascii_lowercase().as_str() {
        "n" | "new" | "new game" | "r" | "restart" => Some(Input::Command(Command::NewGame)),
        "c" | "continue" | "keep going" => Some(Input::Command(Command::ContinuePastWin)),
        "q" | "quit" | "exit" | "escape" => Some(Input::Quit),
        _ => None,
    }
}

fn parse_direction(token: &str) -> Option<Direction> {
    // browser key names are case sensitive
    match token {
        "ArrowLeft" => return Some(Direction::Left),
        "ArrowRight" => return Some(Direction::Right),
        "ArrowUp" => return Some(Direction::Up),
        "ArrowDown" => return Some(Direction::Down),
        _ => {}
    }

    match token.to_ascii_lowercase().as_str() {
        "left" | "a" | "h" => Some(Direction::Left),
        "right" | "d" | "l" => Some(Direction::Right),
        "up" | "w" | "k" => Some(Direction::Up),
        "down" | "s" | "j" => Some(Direction::Down),
        _ => None,
    }
}

/// Splits a `--moves` argument on commas and whitespace.
pub(crate) fn split_moves(moves: &str) -> impl Iterator<Item = &str> {
    moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
