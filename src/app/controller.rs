//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Ansicht & Navigation ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::SetViewMode { mode } => handlers::site::set_view_mode(state, mode),
            AppCommand::Navigate { page } => handlers::site::navigate(state, page),
            AppCommand::SetPortfolioPage { page } => handlers::site::set_portfolio_page(state, page),
            AppCommand::SetBlogPage { page } => handlers::site::set_blog_page(state, page),

            // === Bogen-Sektion ===
            AppCommand::MountArcSection => handlers::site::mount_arc(state),
            AppCommand::UnmountArcSection => handlers::site::unmount_arc(state),
            AppCommand::ResizeViewport { size } => handlers::site::resize_viewport(state, size),
            AppCommand::UpdateArcScroll { measurement } => {
                handlers::site::update_arc_scroll(state, measurement)
            }
            AppCommand::SyncArcItemCount => handlers::site::sync_arc_item_count(state),
            AppCommand::SetSliderPercent { percent } => {
                handlers::site::set_slider_percent(state, percent)
            }

            // === Newsletter ===
            AppCommand::Subscribe { email } => handlers::admin::subscribe(state, &email)?,
            AppCommand::ClearNewsletterInput => handlers::site::clear_newsletter_input(state),

            // === Dashboard ===
            AppCommand::SetAdminTab { tab } => handlers::admin::set_tab(state, tab),
            AppCommand::SetAdminPage { page } => handlers::admin::set_page(state, page),
            AppCommand::BeginNewDraft => handlers::admin::begin_new_draft(state),
            AppCommand::BeginEditDraft { id } => handlers::admin::begin_edit_draft(state, id)?,
            AppCommand::DiscardDraft => handlers::admin::discard_draft(state),
            AppCommand::CommitDraft => handlers::admin::commit_draft(state)?,
            AppCommand::DeleteRecord { tab, id } => handlers::admin::delete_record(state, tab, id)?,

            // === Blog-Editor ===
            AppCommand::AddSection { after, level } => {
                handlers::admin::add_section(state, after, level)
            }
            AppCommand::RemoveSection { index } => handlers::admin::remove_section(state, index),
            AppCommand::MoveSection { index, up } => {
                handlers::admin::move_section(state, index, up)
            }
            AppCommand::ShiftSectionLevel { index, delta } => {
                handlers::admin::shift_section_level(state, index, delta)
            }
            AppCommand::SelectSection { index } => handlers::admin::select_section(state, index),

            // === Datei-I/O ===
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ExportContent { path } => handlers::file_io::export(state, path)?,
            AppCommand::ImportContent { path } => handlers::file_io::import(state, path)?,
            AppCommand::ShowResetConfirm => handlers::dialog::show_reset_confirm(state),
            AppCommand::HideResetConfirm => handlers::dialog::hide_reset_confirm(state),
            AppCommand::ResetContent => handlers::file_io::reset_content(state),

            // === Optionen & Status ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::ClearStatus => handlers::dialog::clear_status(state),
        }

        Ok(())
    }
}
