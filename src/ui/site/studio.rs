//! Studio-Seite: Gründer und Team.

use crate::app::AppState;

pub(super) fn render_studio(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Gründer");
    ui.add_space(6.0);
    for founder in state.content.founders.iter() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(&founder.name);
            ui.weak(&founder.title);
            ui.label(egui::RichText::new(format!("„{}“", founder.quote)).italics());
        });
        ui.add_space(4.0);
    }

    ui.add_space(16.0);
    ui.heading("Team");
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for member in state.content.team.iter() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(200.0);
                ui.strong(&member.name);
                ui.weak(&member.role);
                ui.small(&member.bio);
            });
        }
    });
}
