use sdl2::{event::Event, keyboard::Keycode};

use super::scene::Clip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// everything a key press can do in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectClip(Clip),
    Move(Direction),
    ToggleMusic,
    Quit,
}

/// the whole control surface. keys not listed do nothing
pub const KEY_BINDINGS: &[(Keycode, Action)] = &[
    // spritesheet
    (Keycode::Num1, Action::SelectClip(Clip::First)),
    (Keycode::Kp1, Action::SelectClip(Clip::First)),
    (Keycode::Num2, Action::SelectClip(Clip::Second)),
    (Keycode::Kp2, Action::SelectClip(Clip::Second)),
    (Keycode::Num3, Action::SelectClip(Clip::Third)),
    (Keycode::Kp3, Action::SelectClip(Clip::Third)),
    (Keycode::Num4, Action::SelectClip(Clip::Fourth)),
    (Keycode::Kp4, Action::SelectClip(Clip::Fourth)),
    // movement
    (Keycode::Up, Action::Move(Direction::Up)),
    (Keycode::W, Action::Move(Direction::Up)),
    (Keycode::Down, Action::Move(Direction::Down)),
    (Keycode::S, Action::Move(Direction::Down)),
    (Keycode::Left, Action::Move(Direction::Left)),
    (Keycode::A, Action::Move(Direction::Left)),
    (Keycode::Right, Action::Move(Direction::Right)),
    (Keycode::D, Action::Move(Direction::Right)),
    // audio
    (Keycode::M, Action::ToggleMusic),
    // quit
    (Keycode::Q, Action::Quit),
    (Keycode::Escape, Action::Quit),
];

pub fn action_for_key(key: Keycode) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, action)| action)
}

/// window close and bound key presses; every other event is ignored
pub fn action_for_event(event: &Event) -> Option<Action> {
    match event {
        Event::Quit { .. } => Some(Action::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => action_for_key(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    #[test]
    fn number_row_and_keypad_select_same_clip() {
        assert_eq!(action_for_key(Keycode::Num3), Some(Action::SelectClip(Clip::Third)));
        assert_eq!(action_for_key(Keycode::Kp3), Some(Action::SelectClip(Clip::Third)));
        assert_eq!(action_for_key(Keycode::Num1), action_for_key(Keycode::Kp1));
        assert_eq!(action_for_key(Keycode::Num4), action_for_key(Keycode::Kp4));
    }

    #[test]
    fn arrows_and_wasd_move_the_same_way() {
        let pairs = [
            (Keycode::Up, Keycode::W, Direction::Up),
            (Keycode::Down, Keycode::S, Direction::Down),
            (Keycode::Left, Keycode::A, Direction::Left),
            (Keycode::Right, Keycode::D, Direction::Right),
        ];
        for (arrow, letter, direction) in pairs {
            assert_eq!(action_for_key(arrow), Some(Action::Move(direction)));
            assert_eq!(action_for_key(letter), Some(Action::Move(direction)));
        }
    }

    #[test]
    fn quit_and_music_keys() {
        assert_eq!(action_for_key(Keycode::Q), Some(Action::Quit));
        assert_eq!(action_for_key(Keycode::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(Keycode::M), Some(Action::ToggleMusic));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        for key in [Keycode::Num5, Keycode::Space, Keycode::Return, Keycode::P] {
            assert_eq!(action_for_key(key), None);
        }
    }

    #[test]
    fn every_key_is_bound_once() {
        for (i, (key, _)) in KEY_BINDINGS.iter().enumerate() {
            assert!(
                KEY_BINDINGS[i + 1..].iter().all(|(other, _)| other != key),
                "{key:?} bound twice"
            );
        }
    }

    #[test]
    fn window_close_quits() {
        assert_eq!(action_for_event(&Event::Quit { timestamp: 0 }), Some(Action::Quit));
    }

    fn key_down(keycode: Option<Keycode>) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn key_down_maps_through_bindings() {
        assert_eq!(
            action_for_event(&key_down(Some(Keycode::Kp2))),
            Some(Action::SelectClip(Clip::Second))
        );
        assert_eq!(
            action_for_event(&key_down(Some(Keycode::Escape))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn key_down_without_keycode_is_ignored() {
        assert_eq!(action_for_event(&key_down(None)), None);
    }

    #[test]
    fn key_up_is_ignored() {
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Q),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(action_for_event(&event), None);
    }
}
