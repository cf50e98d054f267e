//! Profile screen.

use eframe::egui::{self, RichText, Ui};

use super::components::{panel_header, primary_button};
use crate::screens::{ProfileEvent, ProfileScreen};

/// Show the profile screen.
///
/// Returns the save event when the user clicks "Save Profile".
pub fn show(ui: &mut Ui, screen: &mut ProfileScreen) -> Option<ProfileEvent> {
    panel_header(ui, "Profile");

    let profile = screen.profile();
    ui.label(RichText::new(format!("Welcome, {}!", profile.name)).size(20.0));
    ui.add_space(10.0);
    ui.label(format!("Email: {}", profile.email));
    ui.label(format!("Role: {}", profile.role.name()));

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(&mut screen.draft_name)
                .hint_text("Name")
                .desired_width(300.0),
        );
    });

    ui.add_space(20.0);

    ui.add(primary_button("Save Profile"))
        .clicked()
        .then(|| screen.save())
}
