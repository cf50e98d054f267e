//! Drawer menu with route entries and the log out button.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_phosphor::regular::{CALENDAR_CHECK, CALENDAR_PLUS, HOUSE, LIST_CHECKS, SIGN_IN, SIGN_OUT, USER};

use super::components::{colors, danger_button};
use crate::models::UserProfile;
use crate::navigation::Route;

/// What the user picked in the drawer.
pub enum DrawerAction {
    Navigate(Route),
    Logout,
}

/// Icon shown next to a route.
pub fn route_icon(route: Route) -> &'static str {
    match route {
        Route::InstructorDashboard | Route::StudentDashboard => HOUSE,
        Route::AppointmentManagement => CALENDAR_CHECK,
        Route::Appointment => CALENDAR_PLUS,
        Route::Attendance => LIST_CHECKS,
        Route::Profile => USER,
        Route::Login => SIGN_IN,
    }
}

/// Show the drawer contents.
pub fn show(ui: &mut Ui, entries: &[Route], current: Route, profile: Option<&UserProfile>) -> Option<DrawerAction> {
    let mut action = None;

    ui.add_space(15.0);
    if let Some(profile) = profile {
        let name = if profile.name.is_empty() { "Guest" } else { profile.name.as_str() };
        ui.label(RichText::new(name).size(18.0).strong());
        ui.label(RichText::new(profile.role.name()).small().color(colors::NEUTRAL));
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    for &route in entries {
        let text = RichText::new(format!("{}  {}", route_icon(route), route.title())).size(15.0);
        if ui.selectable_label(route == current, text).clicked() {
            action = Some(DrawerAction::Navigate(route));
        }
        ui.add_space(4.0);
    }

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.add_space(20.0);
        if ui
            .add_sized([ui.available_width(), 36.0], danger_button(&format!("{SIGN_OUT}  Log Out")))
            .clicked()
        {
            action = Some(DrawerAction::Logout);
        }
    });

    action
}

/// Drawer as a left side panel.
pub fn panel(ctx: &egui::Context, entries: &[Route], current: Route, profile: Option<&UserProfile>) -> Option<DrawerAction> {
    egui::SidePanel::left("drawer")
        .resizable(false)
        .exact_width(230.0)
        .show(ctx, |ui| show(ui, entries, current, profile))
        .inner
}
