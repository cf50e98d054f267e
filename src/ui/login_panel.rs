//! Login screen: the logout destination and the entry point without a configured profile.

use eframe::egui::{self, RichText, Ui};

use super::components::{form_row, primary_button};
use crate::models::{Role, UserProfile};

/// Login form fields.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl LoginForm {
    /// Prefill from the last known profile.
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        profile
            .map(|p| Self {
                name: p.name.clone(),
                email: p.email.clone(),
                role: p.role,
            })
            .unwrap_or_default()
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
        }
    }
}

/// Show the login screen.
///
/// Returns the profile to enter the dashboard with.
pub fn show(ui: &mut Ui, form: &mut LoginForm) -> Option<UserProfile> {
    let mut entered = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Scheduling Dashboard").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Choose a dashboard to continue").size(14.0).weak());
        ui.add_space(30.0);
    });

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(20))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            egui::Grid::new("login_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    form_row(ui, "Name:", &mut form.name, "Name");
                    form_row(ui, "Email:", &mut form.email, "Email");

                    ui.label("Role:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut form.role, Role::Student, Role::Student.name());
                        ui.radio_value(&mut form.role, Role::Instructor, Role::Instructor.name());
                    });
                    ui.end_row();
                });

            ui.add_space(20.0);

            if ui.add(primary_button("Continue")).clicked() {
                entered = Some(form.profile());
            }
        });

    entered
}
