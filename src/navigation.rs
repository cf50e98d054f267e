//! Drawer routes for each dashboard.

use crate::models::Role;

/// Named drawer destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    InstructorDashboard,
    AppointmentManagement,
    StudentDashboard,
    Appointment,
    Attendance,
    Profile,
    Login,
}

const INSTRUCTOR_DRAWER: &[Route] = &[Route::InstructorDashboard, Route::AppointmentManagement, Route::Profile];

const STUDENT_DRAWER: &[Route] = &[
    Route::StudentDashboard,
    Route::Appointment,
    Route::Attendance,
    Route::Profile,
];

impl Route {
    /// Get the display name for the route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::InstructorDashboard => "Instructor Dashboard",
            Route::AppointmentManagement => "Appointment Management",
            Route::StudentDashboard => "Student Dashboard",
            Route::Appointment => "Appointment",
            Route::Attendance => "Attendance",
            Route::Profile => "Profile",
            Route::Login => "Login",
        }
    }

    /// Drawer entries for a role, initial route first.
    pub fn drawer(role: Role) -> &'static [Route] {
        match role {
            Role::Instructor => INSTRUCTOR_DRAWER,
            Role::Student => STUDENT_DRAWER,
        }
    }

    /// Landing route for a role.
    pub fn home(role: Role) -> Route {
        Self::drawer(role)[0]
    }

    /// Whether a role's drawer offers this route.
    pub fn available_to(&self, role: Role) -> bool {
        Self::drawer(role).contains(self)
    }
}
