//! Command-Log der Sitzung.
//!
//! Hält die ausgeführten Commands mit laufender Nummer. Scroll-Messungen
//! kommen jeden Frame und werden nur gezählt, nicht gespeichert.

use super::AppCommand;

/// Ein geloggter Command mit Sequenznummer.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Laufende Nummer seit Sitzungsbeginn (auch über verworfene Einträge hinweg)
    pub seq: u64,
    pub command: AppCommand,
}

impl LoggedCommand {
    /// Ob der Command Website-Inhalte verändert (Reviews, Projekte, Artikel, Abonnenten).
    pub fn touches_content(&self) -> bool {
        matches!(
            self.command,
            AppCommand::CommitDraft
                | AppCommand::DeleteRecord { .. }
                | AppCommand::Subscribe { .. }
                | AppCommand::ImportContent { .. }
                | AppCommand::ResetContent
        )
    }
}

/// Begrenztes Log der ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
    next_seq: u64,
    scroll_updates: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Command auf. Bei vollem Log wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(command, AppCommand::UpdateArcScroll { .. }) {
            self.scroll_updates += 1;
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            seq: self.next_seq,
            command: command.clone(),
        });
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }

    /// Anzahl der verarbeiteten Scroll-Messungen.
    pub fn scroll_updates(&self) -> u64 {
        self.scroll_updates
    }

    /// Inhaltsändernde Commands, älteste zuerst.
    pub fn content_changes(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter().filter(|entry| entry.touches_content())
    }
}
