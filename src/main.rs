//! Studio-Showcase.
//!
//! Portfolio-Website eines Architekturstudios mit scroll-getriebener
//! Testimonial-Bogen-Sektion und Admin-Dashboard für alle Inhalte.

use eframe::egui;
use studio_showcase::{
    ui, AppController, AppIntent, AppState, ContentStore, KeyValueStore, MemoryKeyValueStore,
    ShowcaseOptions,
};
use studio_showcase::app::{SitePage, ViewMode};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Studio-Showcase v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Studio-Showcase"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Studio-Showcase",
            options,
            Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc.storage)))),
        )
    }
}

/// Schreibzugriff auf den eframe-Speicher als `KeyValueStore`.
struct HostStorage<'a>(&'a mut dyn eframe::Storage);

impl KeyValueStore for HostStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

/// Haupt-Anwendungsstruktur
struct ShowcaseApp {
    state: AppState,
    controller: AppController,
}

impl ShowcaseApp {
    fn new(storage: Option<&dyn eframe::Storage>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ShowcaseOptions::config_path();
        let showcase_options = ShowcaseOptions::load_from_file(&config_path);

        // Gespeicherte Sammlungen in einen lokalen Speicher übernehmen
        let mut snapshot = MemoryKeyValueStore::new();
        if let Some(storage) = storage {
            for key in ContentStore::STORAGE_KEYS {
                if let Some(value) = storage.get_string(key) {
                    snapshot.set_string(key, value);
                }
            }
        } else {
            log::warn!("Kein Host-Speicher verfügbar, Inhalte werden nicht persistiert");
        }

        let (content, report) = ContentStore::load(&snapshot);
        let mut state = AppState::with_content(content);
        state.options = showcase_options;
        if report.needs_save() {
            state.mark_content_dirty();
        }

        let mut controller = AppController::new();
        if let Err(e) = controller.handle_intent(
            &mut state,
            AppIntent::NavigateRequested {
                page: SitePage::Home,
            },
        ) {
            log::error!("Startseite konnte nicht geöffnet werden: {:#}", e);
        }

        Self { state, controller }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let progress_before = self.arc_progress();
        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Darstellung folgt der Messung des vorherigen Frames
        if self.arc_progress() != progress_before {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.state.content_dirty {
            return;
        }
        match self.state.content.save(&mut HostStorage(storage)) {
            Ok(()) => {
                self.state.content_dirty = false;
                log::info!("Inhalte im Host-Speicher gesichert");
            }
            Err(e) => log::error!("Inhalte konnten nicht gespeichert werden: {}", e),
        }
    }

    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(5)
    }
}

impl ShowcaseApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_reset_confirm(ctx, self.state.ui.show_reset_confirm));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        match self.state.mode {
            ViewMode::Site => events.extend(ui::render_site(ctx, &mut self.state)),
            ViewMode::Admin => events.extend(ui::render_admin(ctx, &mut self.state)),
        }

        events
    }

    fn arc_progress(&self) -> Option<f32> {
        self.state.site.arc.as_ref().map(|arc| arc.progress())
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }
}
