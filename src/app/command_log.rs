//! Protokoll der vom Controller ausgeführten Commands.
//!
//! Jeder Eintrag hält fest, in welchem Editor-Modus der Command ankam. So
//! lässt sich nachvollziehen, wie ein Zeiger-Event durch die Modus-Maschine
//! gelaufen ist, etwa in den Ablauftests oder beim Debuggen eines Klicks.
//! Das Protokoll ist ein Ringpuffer; die ältesten Einträge fallen heraus.

use super::state::EditorMode;
use super::AppCommand;
use std::collections::VecDeque;

/// Ein ausgeführter Command samt Modus zum Ausführungszeitpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    pub command: AppCommand,
    pub mode: EditorMode,
}

/// Begrenztes Command-Protokoll
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
}

impl CommandLog {
    const CAPACITY: usize = 512;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an und verdrängt bei voller Kapazität den ältesten.
    pub fn record(&mut self, command: &AppCommand, mode: EditorMode) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(CommandLogEntry {
            command: command.clone(),
            mode,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|e| &e.command)
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }

    /// Commands, die im Modus `mode` ausgeführt wurden.
    pub fn commands_in(&self, mode: EditorMode) -> impl Iterator<Item = &AppCommand> {
        self.entries
            .iter()
            .filter(move |e| e.mode == mode)
            .map(|e| &e.command)
    }
}
