//! Verlauf der ausgeführten Commands (Diagnose, Ablauf-Tests).

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    capacity: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Log mit Standardkapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Log, das höchstens `capacity` Commands behält.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der behaltenen Commands.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Anzahl aller seit Start ausgeführten Commands.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }
}
