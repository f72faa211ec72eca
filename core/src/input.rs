use serde::{Deserialize, Serialize};

use crate::*;

/// Keys the game listens to, parsed from DOM `KeyboardEvent.key` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Whether the browser's own handling (page scrolling) must be suppressed.
    pub const fn suppresses_default(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight | Self::Space
        )
    }

    pub const fn command(self) -> Option<Command> {
        use Key::*;
        match self {
            ArrowUp => Some(Command::Move(Direction::Up)),
            ArrowDown => Some(Command::Move(Direction::Down)),
            ArrowLeft => Some(Command::Move(Direction::Left)),
            ArrowRight => Some(Command::Move(Direction::Right)),
            Enter | Space => Some(Command::Activate),
            Escape => Some(Command::Close),
            Other => None,
        }
    }
}

/// Raw input reaching the game from the page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    StartPressed,
    Key(Key),
    PadMove(Direction),
    PadActivate,
    CloseDetail,
    CellClicked(CellIndex),
}

/// What the page should do with an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Routed {
    pub command: Option<Command>,
    pub prevent_default: bool,
}

impl Routed {
    const IGNORED: Self = Self {
        command: None,
        prevent_default: false,
    };
}

/// Maps input to commands, dropping everything but the start button until
/// the game is started.
pub fn route(state: EngineState, event: InputEvent) -> Routed {
    use InputEvent::*;

    match (state, event) {
        (EngineState::NotStarted, StartPressed) => Routed {
            command: Some(Command::Start),
            prevent_default: false,
        },
        (EngineState::NotStarted, CellClicked(_)) => Routed {
            command: None,
            prevent_default: true,
        },
        (EngineState::NotStarted, _) | (EngineState::Started, StartPressed) => Routed::IGNORED,
        (EngineState::Started, Key(key)) => Routed {
            command: key.command(),
            prevent_default: key.suppresses_default(),
        },
        (EngineState::Started, PadMove(direction)) => Routed {
            command: Some(Command::Move(direction)),
            prevent_default: false,
        },
        (EngineState::Started, PadActivate) => Routed {
            command: Some(Command::Activate),
            prevent_default: false,
        },
        (EngineState::Started, CloseDetail) => Routed {
            command: Some(Command::Close),
            prevent_default: false,
        },
        (EngineState::Started, CellClicked(index)) => Routed {
            command: Some(Command::ClickCell(index)),
            prevent_default: true,
        },
    }
}

impl DiscoveryEngine {
    /// Routes `event` against the current state and applies the resulting command.
    pub fn handle(&mut self, event: InputEvent) -> Result<CommandOutcome> {
        match route(self.state(), event).command {
            Some(command) => self.apply(command),
            None => Ok(CommandOutcome::NoChange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    fn engine(n: u32) -> DiscoveryEngine {
        let items: Vec<_> = (0..n)
            .map(|i| Item::new(ItemId(i), Category::Skills, format!("t{i}"), format!("b{i}")))
            .collect();
        DiscoveryEngine::new(GridModel::new(items).unwrap())
    }

    #[test]
    fn dom_keys_map_to_commands() {
        let cases = [
            ("ArrowUp", Some(Command::Move(Direction::Up))),
            ("ArrowDown", Some(Command::Move(Direction::Down))),
            ("ArrowLeft", Some(Command::Move(Direction::Left))),
            ("ArrowRight", Some(Command::Move(Direction::Right))),
            ("Enter", Some(Command::Activate)),
            (" ", Some(Command::Activate)),
            ("Escape", Some(Command::Close)),
            ("a", None),
            ("Tab", None),
        ];
        for (dom_key, expected) in cases {
            let routed = route(EngineState::Started, InputEvent::Key(Key::from_dom_key(dom_key)));
            assert_eq!(routed.command, expected, "{dom_key:?}");
        }
    }

    #[test]
    fn scroll_keys_are_suppressed_while_started() {
        for key in [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight, Key::Space] {
            assert!(route(EngineState::Started, InputEvent::Key(key)).prevent_default);
        }
        for key in [Key::Enter, Key::Escape, Key::Other] {
            assert!(!route(EngineState::Started, InputEvent::Key(key)).prevent_default);
        }
    }

    #[test]
    fn only_start_gets_through_before_start() {
        let events = [
            InputEvent::Key(Key::ArrowDown),
            InputEvent::Key(Key::Enter),
            InputEvent::PadMove(Direction::Left),
            InputEvent::PadActivate,
            InputEvent::CloseDetail,
            InputEvent::CellClicked(3),
        ];
        for event in events {
            assert_eq!(route(EngineState::NotStarted, event).command, None);
        }
        assert!(route(EngineState::NotStarted, InputEvent::CellClicked(3)).prevent_default);
        assert_eq!(
            route(EngineState::NotStarted, InputEvent::StartPressed).command,
            Some(Command::Start)
        );
        assert_eq!(route(EngineState::Started, InputEvent::StartPressed).command, None);
    }

    #[test]
    fn handle_drives_engine_through_router() {
        let mut engine = engine(9);

        assert_eq!(
            engine.handle(InputEvent::Key(Key::ArrowRight)).unwrap(),
            CommandOutcome::NoChange
        );
        assert_eq!(engine.position(), 0);

        engine.handle(InputEvent::StartPressed).unwrap();
        engine.handle(InputEvent::Key(Key::ArrowRight)).unwrap();
        engine.handle(InputEvent::Key(Key::Space)).unwrap();
        assert_eq!(engine.expanded(), Some(1));

        engine.handle(InputEvent::Key(Key::Escape)).unwrap();
        assert_eq!(engine.expanded(), None);
        assert_eq!(engine.discovered_count(), 1);

        engine.handle(InputEvent::CellClicked(8)).unwrap();
        assert_eq!(engine.position(), 8);
    }
}
