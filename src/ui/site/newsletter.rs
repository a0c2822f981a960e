//! Newsletter-Anmeldung im Seitenfuß.

use crate::app::AppIntent;

pub(super) fn render_newsletter(ui: &mut egui::Ui, email: &mut String) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.add_space(8.0);
    ui.strong("Newsletter");
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(email)
                .hint_text("name@beispiel.de")
                .desired_width(240.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let can_submit = !email.trim().is_empty();
        if (ui.add_enabled(can_submit, egui::Button::new("Anmelden")).clicked() || submitted)
            && can_submit
        {
            events.push(AppIntent::NewsletterSubscribeRequested {
                email: email.clone(),
            });
        }
    });

    events
}
