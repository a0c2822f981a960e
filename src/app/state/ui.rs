/// UI-bezogener Anwendungszustand (Dialoge, Statusmeldung)
#[derive(Default)]
pub struct UiState {
    /// Ob der Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Import-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Ob die Rückfrage zum Zurücksetzen der Inhalte angezeigt wird
    pub show_reset_confirm: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Letzte Statusmeldung (Fehler, Bestätigungen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
