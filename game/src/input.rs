use engine::display::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveLeft,
    MoveRight,
    Rotate,
}

/// Fixed bindings: Escape quits, `a`/`d` move, `w` rotates. Everything else is ignored.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::Quit),
        Key::Char('a') => Some(Action::MoveLeft),
        Key::Char('d') => Some(Action::MoveRight),
        Key::Char('w') => Some(Action::Rotate),
        Key::Char(_) => None,
    }
}
