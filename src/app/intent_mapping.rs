//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::{SitePage, ViewMode};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewModeSelected { mode } => match mode {
            // Dashboard verdeckt die Website: Bogen-Sektion lösen
            ViewMode::Admin => vec![
                AppCommand::UnmountArcSection,
                AppCommand::SetViewMode { mode },
            ],
            ViewMode::Site => vec![
                AppCommand::SetViewMode { mode },
                AppCommand::MountArcSection,
            ],
        },
        AppIntent::NavigateRequested { page } => {
            if page == SitePage::Home {
                vec![
                    AppCommand::Navigate { page },
                    AppCommand::MountArcSection,
                ]
            } else {
                vec![
                    AppCommand::UnmountArcSection,
                    AppCommand::Navigate { page },
                ]
            }
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::ResizeViewport { size }],
        AppIntent::ArcContainerMeasured { measurement } => {
            vec![AppCommand::UpdateArcScroll { measurement }]
        }
        AppIntent::SliderDragged { percent } => vec![AppCommand::SetSliderPercent { percent }],
        AppIntent::PortfolioPageRequested { page } => vec![AppCommand::SetPortfolioPage { page }],
        AppIntent::BlogPageRequested { page } => vec![AppCommand::SetBlogPage { page }],
        AppIntent::NewsletterSubscribeRequested { email } => vec![
            AppCommand::Subscribe { email },
            AppCommand::ClearNewsletterInput,
        ],

        AppIntent::AdminTabSelected { tab } => {
            if tab == state.admin.tab {
                vec![]
            } else {
                vec![AppCommand::DiscardDraft, AppCommand::SetAdminTab { tab }]
            }
        }
        AppIntent::AdminPageRequested { page } => vec![AppCommand::SetAdminPage { page }],
        AppIntent::NewRecordRequested => vec![AppCommand::BeginNewDraft],
        AppIntent::EditRecordRequested { id } => vec![AppCommand::BeginEditDraft { id }],
        AppIntent::DraftCancelled => vec![AppCommand::DiscardDraft],
        AppIntent::DraftSaveRequested => {
            vec![AppCommand::CommitDraft, AppCommand::SyncArcItemCount]
        }
        AppIntent::DeleteRecordRequested { tab, id } => vec![
            AppCommand::DeleteRecord { tab, id },
            AppCommand::SyncArcItemCount,
        ],
        AppIntent::SubscriberAddRequested { email } => vec![AppCommand::Subscribe { email }],

        AppIntent::SectionAddRequested { after, level } => {
            vec![AppCommand::AddSection { after, level }]
        }
        AppIntent::SectionRemoveRequested { index } => vec![AppCommand::RemoveSection { index }],
        AppIntent::SectionMoveRequested { index, up } => {
            vec![AppCommand::MoveSection { index, up }]
        }
        AppIntent::SectionIndentRequested { index, delta } => {
            vec![AppCommand::ShiftSectionLevel { index, delta }]
        }
        AppIntent::SectionSelected { index } => vec![AppCommand::SelectSection { index }],

        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportContent { path }],
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportPathSelected { path } => vec![
            AppCommand::DiscardDraft,
            AppCommand::ImportContent { path },
            AppCommand::SyncArcItemCount,
        ],
        AppIntent::ResetContentRequested => vec![AppCommand::ShowResetConfirm],
        AppIntent::ResetContentConfirmed => vec![
            AppCommand::HideResetConfirm,
            AppCommand::DiscardDraft,
            AppCommand::ResetContent,
            AppCommand::SyncArcItemCount,
        ],
        AppIntent::ResetContentCancelled => vec![AppCommand::HideResetConfirm],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusDismissed => vec![AppCommand::ClearStatus],
    }
}
