//! Instructor's appointment list.

use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::ARROWS_CLOCKWISE;

use super::components::{colors, panel_header, refreshed_at};
use crate::screens::{AppointmentListScreen, ListState};

/// Show the appointment list.
pub fn show(ui: &mut Ui, screen: &mut AppointmentListScreen) {
    panel_header(ui, "Your Appointments");

    ui.horizontal(|ui| {
        ui.label("Instructor email:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut screen.email_input)
                .hint_text("name@example.com")
                .desired_width(260.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || submitted {
            screen.apply_email_input();
        }

        ui.add_space(10.0);

        let can_refresh = screen.email().is_some() && !screen.state().is_loading();
        if ui
            .add_enabled(can_refresh, egui::Button::new(format!("{ARROWS_CLOCKWISE} Refresh")))
            .clicked()
        {
            screen.refresh();
        }
    });

    ui.add_space(15.0);

    match screen.state() {
        ListState::Idle => {
            if screen.email().is_none() {
                ui.label(RichText::new("No instructor email set.").weak());
            }
        }
        ListState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading appointments...");
            });
        }
        ListState::Failed(e) => {
            ui.colored_label(colors::ERROR, format!("Could not load appointments: {e}"));
        }
        ListState::Loaded(rows) if rows.is_empty() => {
            ui.label(RichText::new("No appointments found.").weak());
        }
        ListState::Loaded(rows) => {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("ID");
                    });
                    header.col(|ui| {
                        ui.strong("Details");
                    });
                })
                .body(|mut body| {
                    for record in rows {
                        body.row(24.0, |mut row| {
                            row.col(|ui| {
                                ui.label(record.id.to_string());
                            });
                            row.col(|ui| {
                                ui.label(&record.details);
                            });
                        });
                    }
                });
        }
    }

    ui.add_space(10.0);
    refreshed_at(ui, screen.fetched_at());
}
