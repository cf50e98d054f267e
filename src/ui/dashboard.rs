//! Role home screens: welcome text and shortcut cards to the other drawer entries.

use eframe::egui::{self, RichText, Ui};

use super::components::dashboard_card;
use super::drawer::route_icon;
use crate::models::Role;
use crate::navigation::Route;

/// Welcome line for a role's home screen.
pub fn welcome_text(role: Role) -> &'static str {
    match role {
        Role::Instructor => "Welcome to the Instructor Dashboard!",
        Role::Student => "Welcome to the Student Dashboard!",
    }
}

/// Show the dashboard panel.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(ui: &mut Ui, role: Role) -> Option<Route> {
    let mut next = None;
    let home = Route::home(role);
    let shortcuts: Vec<Route> = Route::drawer(role).iter().copied().filter(|r| *r != home).collect();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(welcome_text(role)).size(24.0));
        ui.add_space(40.0);
    });

    let available = ui.available_width();
    let num_cards = shortcuts.len() as f32;
    let spacing = 30.0;
    let total_spacing = spacing * (num_cards - 1.0).max(0.0);
    let card_width = ((available - total_spacing) / num_cards.max(1.0)).clamp(150.0, 220.0);
    let card_size = egui::vec2(card_width, card_width * 0.7);
    let total_width = card_width * num_cards + total_spacing;
    let start_offset = ((available - total_width) / 2.0).max(0.0);

    ui.horizontal(|ui| {
        ui.add_space(start_offset);
        for (i, route) in shortcuts.iter().enumerate() {
            if i > 0 {
                ui.add_space(spacing);
            }
            if dashboard_card(ui, route.title(), route_icon(*route), card_size).clicked() {
                next = Some(*route);
            }
        }
    });

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_text_per_role() {
        assert_eq!(welcome_text(Role::Instructor), "Welcome to the Instructor Dashboard!");
        assert_eq!(welcome_text(Role::Student), "Welcome to the Student Dashboard!");
    }
}
