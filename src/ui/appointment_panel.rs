//! Student's appointment request form.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::CALENDAR_PLUS;

use super::components::{colors, form_row, panel_header, primary_button};
use crate::screens::AppointmentForm;
use crate::screens::appointment_form::SUCCESS_MESSAGE;

/// Show the appointment form.
pub fn show(ui: &mut Ui, form: &mut AppointmentForm) {
    panel_header(ui, "Appointment Management");

    egui::Grid::new("appointment_form_grid")
        .num_columns(2)
        .spacing([20.0, 10.0])
        .show(ui, |ui| {
            form_row(ui, "Student:", &mut form.student_name, "Student Name");
            form_row(ui, "Instructor:", &mut form.instructor_email, "Instructor Email");
            form_row(ui, "Date:", &mut form.date, "Date (YYYY-MM-DD)");
            form_row(ui, "Time:", &mut form.time, "Time (HH:MM)");
            form_row(ui, "Reason:", &mut form.reason, "Reason");
        });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        let submitting = form.is_submitting();
        if ui
            .add_enabled(!submitting, primary_button(&format!("{CALENDAR_PLUS}  Schedule Appointment")))
            .clicked()
        {
            form.submit();
        }
        if submitting {
            ui.spinner();
        }
    });

    let status = form.status();
    if !status.is_empty() {
        ui.add_space(20.0);
        let color = if status == SUCCESS_MESSAGE {
            colors::SUCCESS
        } else {
            colors::ERROR
        };
        ui.colored_label(color, status);
    }
}
