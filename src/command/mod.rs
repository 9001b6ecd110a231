//! Player commands and key bindings

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::colony::Colony;
use crate::core::types::AntKind;
use crate::ui::HudState;

/// Everything the player can ask the simulation to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    SpawnWave,
    ToggleFogDisplay,
    SpawnWorker,
    SpawnFighter,
    SpawnScout,
    Quit,
}

impl Command {
    /// Map a key press to a command, if any
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('e') => Some(Command::SpawnWave),
            KeyCode::Char('f') => Some(Command::ToggleFogDisplay),
            KeyCode::Char('1') => Some(Command::SpawnWorker),
            KeyCode::Char('2') => Some(Command::SpawnFighter),
            KeyCode::Char('3') => Some(Command::SpawnScout),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Apply a command; returns false when the simulation should shut down
pub fn apply(colony: &mut Colony, hud: &mut HudState, command: Command) -> bool {
    debug!(?command, "applying command");
    match command {
        Command::Reset => colony.reset(),
        Command::SpawnWave => colony.spawn_wave(),
        Command::ToggleFogDisplay => hud.show_fog = !hud.show_fog,
        Command::SpawnWorker => {
            colony.try_spawn(AntKind::Worker);
        }
        Command::SpawnFighter => {
            colony.try_spawn(AntKind::Fighter);
        }
        Command::SpawnScout => {
            colony.try_spawn(AntKind::Scout);
        }
        Command::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key(key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(Command::from_key(key(KeyCode::Char('e'))), Some(Command::SpawnWave));
        assert_eq!(
            Command::from_key(key(KeyCode::Char('f'))),
            Some(Command::ToggleFogDisplay)
        );
        assert_eq!(
            Command::from_key(key(KeyCode::Char('1'))),
            Some(Command::SpawnWorker)
        );
        assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_spawn_commands_respect_the_gate() {
        let mut colony = Colony::new(SimConfig::default()).unwrap();
        let mut hud = HudState::default();
        assert!(apply(&mut colony, &mut hud, Command::SpawnWorker));
        assert!(apply(&mut colony, &mut hud, Command::SpawnFighter));
        // The second spawn is silently refused while the gate recharges
        assert_eq!(colony.allies.len(), 1);
    }

    #[test]
    fn test_fog_toggle_and_quit() {
        let mut colony = Colony::new(SimConfig::default()).unwrap();
        let mut hud = HudState::default();
        assert!(hud.show_fog);
        assert!(apply(&mut colony, &mut hud, Command::ToggleFogDisplay));
        assert!(!hud.show_fog);
        assert!(!apply(&mut colony, &mut hud, Command::Quit));
    }
}
