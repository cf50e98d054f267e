//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};

/// Render a clickable dashboard card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, icon: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        // Scale factor based on width (200 is the reference size)
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let icon_pos = egui::pos2(rect.center().x, rect.top() + size.y * 0.35);
        ui.painter().text(
            icon_pos,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(36.0 * scale),
            visuals.text_color(),
        );

        let title_pos = egui::pos2(rect.center().x, rect.bottom() - size.y * 0.25);
        ui.painter().text(
            title_pos,
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(16.0 * scale),
            visuals.text_color(),
        );
    }

    response
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);

    /// Submit / save buttons.
    pub const PRIMARY: Color32 = Color32::from_rgb(39, 102, 48);
    /// Log out button.
    pub const DANGER: Color32 = Color32::from_rgb(220, 53, 69);
}

/// Filled green action button.
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).size(16.0).color(Color32::WHITE)).fill(colors::PRIMARY)
}

/// Filled red button for leaving the dashboard.
pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).size(16.0).color(Color32::WHITE)).fill(colors::DANGER)
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0).strong());
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Labeled single-line text input inside a two-column grid.
pub fn form_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(320.0),
    );
    ui.end_row();
    response
}

/// "Last refreshed" footer for fetched lists.
pub fn refreshed_at(ui: &mut Ui, at: Option<chrono::DateTime<chrono::Local>>) {
    if let Some(at) = at {
        ui.label(
            RichText::new(format!("Last refreshed: {}", at.format("%Y-%m-%d %H:%M:%S")))
                .small()
                .color(colors::NEUTRAL),
        );
    }
}
