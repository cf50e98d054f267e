//! Student's attendance list.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::ARROWS_CLOCKWISE;

use super::components::{colors, panel_header, refreshed_at};
use crate::screens::AttendanceListScreen;
use crate::screens::attendance_list::EMPTY_MESSAGE;

/// Show the attendance list.
pub fn show(ui: &mut Ui, screen: &mut AttendanceListScreen) {
    panel_header(ui, "Attendance Management");

    let loading = screen.state().is_loading();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!loading, egui::Button::new(format!("{ARROWS_CLOCKWISE} Refresh")))
            .clicked()
        {
            screen.refresh();
        }
        if loading {
            ui.spinner();
        }
    });

    ui.add_space(15.0);

    if let Some(e) = screen.state().error() {
        ui.colored_label(colors::ERROR, format!("Could not load attendance: {e}"));
        ui.add_space(10.0);
    }

    let lines = screen.lines();
    if lines.is_empty() {
        if !loading {
            ui.label(RichText::new(EMPTY_MESSAGE).weak());
        }
    } else {
        ScrollArea::vertical().max_height((ui.available_height() - 30.0).max(100.0)).show(ui, |ui| {
            for line in &lines {
                ui.label(line);
            }
        });
    }

    ui.add_space(10.0);
    refreshed_at(ui, screen.fetched_at());
}
