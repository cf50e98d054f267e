//! Main application UI.

use eframe::egui;

use crate::models::UserProfile;
use crate::navigation::Route;
use crate::screens::ProfileEvent;
use crate::shell::{Screen, Shell};

use super::components::colors;
use super::drawer::DrawerAction;
use super::login_panel::LoginForm;
use super::{appointment_panel, appointments_panel, attendance_panel, dashboard, drawer, login_panel, profile_panel};

/// Requests raised while rendering the content area.
enum ContentAction {
    Navigate(Route),
    Profile(ProfileEvent),
    Login(UserProfile),
}

/// Main application state.
pub struct DashboardApp {
    shell: Shell,
    login_form: LoginForm,
    startup_error: Option<String>,
    // Dropped after the shell so screen tasks are cancelled first.
    #[allow(dead_code)]
    rt: tokio::runtime::Runtime,
}

impl DashboardApp {
    pub fn new(shell: Shell, rt: tokio::runtime::Runtime, startup_error: Option<String>) -> Self {
        let login_form = LoginForm::from_profile(shell.profile());
        Self {
            shell,
            login_form,
            startup_error,
            rt,
        }
    }

    /// Render the drawer for the logged-in role.
    fn show_drawer(&mut self, ctx: &egui::Context) {
        let entries = self.shell.drawer_entries();
        if entries.is_empty() {
            return;
        }

        match drawer::panel(ctx, entries, self.shell.route(), self.shell.profile()) {
            Some(DrawerAction::Navigate(route)) => self.shell.navigate(route),
            Some(DrawerAction::Logout) => {
                self.login_form = LoginForm::from_profile(self.shell.profile());
                self.shell.logout();
            }
            None => {}
        }
    }

    /// Render the mounted screen.
    fn show_content(&mut self, ui: &mut egui::Ui) {
        let role = self.shell.profile().map(|p| p.role);

        let action = match self.shell.screen_mut() {
            Screen::Home => role.and_then(|role| dashboard::show(ui, role)).map(ContentAction::Navigate),
            Screen::AppointmentList(screen) => {
                appointments_panel::show(ui, screen);
                None
            }
            Screen::AppointmentForm(form) => {
                appointment_panel::show(ui, form);
                None
            }
            Screen::Attendance(screen) => {
                attendance_panel::show(ui, screen);
                None
            }
            Screen::Profile(screen) => profile_panel::show(ui, screen).map(ContentAction::Profile),
            Screen::Login => login_panel::show(ui, &mut self.login_form).map(ContentAction::Login),
        };

        match action {
            Some(ContentAction::Navigate(route)) => self.shell.navigate(route),
            Some(ContentAction::Profile(event)) => self.shell.handle_profile_event(event),
            Some(ContentAction::Login(profile)) => self.shell.login(profile),
            None => {}
        }
    }

    /// Render modal dialogs (startup error, profile notice).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(error) = self.startup_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &error);
                    ui.label("Default settings are in use.");
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.startup_error = None;
                    }
                });
        }

        if let Some(notice) = self.shell.notice() {
            egui::Window::new("Profile Updated")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, notice);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.shell.dismiss_notice();
                    }
                });
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.shell.poll();

        // Request repaint during async operations
        if self.shell.is_busy() {
            ctx.request_repaint();
        }

        self.show_dialogs(ctx);

        self.show_drawer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            self.show_content(ui);
        });
    }
}
