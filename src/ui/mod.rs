//! GUI panels and application state.

pub mod app;
pub mod appointment_panel;
pub mod appointments_panel;
pub mod attendance_panel;
pub mod components;
pub mod dashboard;
pub mod drawer;
pub mod login_panel;
pub mod profile_panel;

pub use app::DashboardApp;
