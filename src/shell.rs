//! Dashboard shell: owns the profile, the current route and the mounted screen.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::client::SchedulingApi;
use crate::models::UserProfile;
use crate::navigation::Route;
use crate::screens::{AppointmentForm, AppointmentListScreen, AttendanceListScreen, ProfileEvent, ProfileScreen};

/// Notice shown after a profile save.
pub const PROFILE_UPDATED: &str = "Your profile has been updated successfully.";

/// Receives saved profile names. Persistence is up to the caller.
pub type ProfileCallback = Box<dyn FnMut(&str) + Send>;

/// The screen currently mounted in the content area.
pub enum Screen {
    Home,
    AppointmentList(AppointmentListScreen),
    AppointmentForm(AppointmentForm),
    Attendance(AttendanceListScreen),
    Profile(ProfileScreen),
    Login,
}

pub struct Shell {
    screen: Screen,
    route: Route,
    profile: Option<UserProfile>,
    notice: Option<&'static str>,
    on_profile_update: ProfileCallback,
    api: Arc<dyn SchedulingApi>,
    rt: Handle,
}

impl Shell {
    /// Start on the profile's home route, or on login without a profile.
    pub fn new(
        api: Arc<dyn SchedulingApi>,
        rt: Handle,
        profile: Option<UserProfile>,
        on_profile_update: ProfileCallback,
    ) -> Self {
        let mut shell = Self {
            screen: Screen::Login,
            route: Route::Login,
            profile: None,
            notice: None,
            on_profile_update,
            api,
            rt,
        };
        if let Some(profile) = profile {
            shell.login(profile);
        }
        shell
    }

    /// Enter the dashboard for `profile`.
    pub fn login(&mut self, profile: UserProfile) {
        info!("Entering {} dashboard as {:?}", profile.role.name(), profile.name);
        let home = Route::home(profile.role);
        self.profile = Some(profile);
        self.mount(home);
    }

    /// Client-side logout: tears down the current screen and shows login.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.notice = None;
        self.mount(Route::Login);
    }

    /// Switch to a drawer route. Re-selecting the current route does nothing.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if route == Route::Login {
            self.logout();
            return;
        }

        let Some(role) = self.active_role() else {
            warn!("Ignoring navigation to {} while logged out", route.title());
            return;
        };
        if !route.available_to(role) {
            warn!("{} is not available to {}", route.title(), role.name());
            return;
        }

        self.mount(route);
    }

    /// Apply an event from the profile screen.
    pub fn handle_profile_event(&mut self, event: ProfileEvent) {
        match event {
            ProfileEvent::UpdateRequested { name } => {
                (self.on_profile_update)(&name);

                let Some(profile) = self.profile.as_mut() else {
                    return;
                };
                profile.name = name;
                let home = Route::home(profile.role);

                self.notice = Some(PROFILE_UPDATED);
                self.mount(home);
            }
        }
    }

    /// Forward a frame's poll to the mounted screen.
    pub fn poll(&mut self) -> bool {
        match &mut self.screen {
            Screen::AppointmentList(screen) => screen.poll(),
            Screen::AppointmentForm(form) => form.poll(),
            Screen::Attendance(screen) => screen.poll(),
            Screen::Home | Screen::Profile(_) | Screen::Login => false,
        }
    }

    /// Whether the mounted screen is waiting on the network.
    pub fn is_busy(&self) -> bool {
        match &self.screen {
            Screen::AppointmentList(screen) => screen.state().is_loading(),
            Screen::AppointmentForm(form) => form.is_submitting(),
            Screen::Attendance(screen) => screen.state().is_loading(),
            Screen::Home | Screen::Profile(_) | Screen::Login => false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Drawer entries for the logged-in role; empty on the login screen.
    pub fn drawer_entries(&self) -> &'static [Route] {
        match self.active_role() {
            Some(role) => Route::drawer(role),
            None => &[],
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn active_role(&self) -> Option<crate::models::Role> {
        if self.route == Route::Login {
            return None;
        }
        self.profile.as_ref().map(|p| p.role)
    }

    /// Replace the mounted screen; the old one is dropped, cancelling its tasks.
    fn mount(&mut self, route: Route) {
        let screen = match (route, self.profile.as_ref()) {
            (Route::Login, _) | (_, None) => Screen::Login,
            (Route::InstructorDashboard | Route::StudentDashboard, Some(_)) => Screen::Home,
            (Route::AppointmentManagement, Some(profile)) => Screen::AppointmentList(AppointmentListScreen::new(
                self.api.clone(),
                self.rt.clone(),
                profile.filter_email(),
            )),
            (Route::Appointment, Some(_)) => {
                Screen::AppointmentForm(AppointmentForm::new(self.api.clone(), self.rt.clone()))
            }
            (Route::Attendance, Some(_)) => {
                Screen::Attendance(AttendanceListScreen::new(self.api.clone(), self.rt.clone()))
            }
            (Route::Profile, Some(profile)) => Screen::Profile(ProfileScreen::new(profile.clone())),
        };

        let route = if matches!(screen, Screen::Login) { Route::Login } else { route };
        info!("Navigating to {}", route.title());
        self.screen = screen;
        self.route = route;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::models::Role;
    use crate::screens::test_support::{Call, FakeApi, settle};

    fn profile(role: Role, email: &str) -> UserProfile {
        UserProfile {
            name: "Dana".to_string(),
            email: email.to_string(),
            role,
        }
    }

    fn shell_with(api: Arc<FakeApi>, profile: Option<UserProfile>) -> (Shell, Arc<Mutex<Vec<String>>>) {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let shell = Shell::new(
            api,
            Handle::current(),
            profile,
            Box::new(move |name: &str| sink.lock().unwrap().push(name.to_string())),
        );
        (shell, updates)
    }

    #[tokio::test]
    async fn test_starts_on_login_without_profile() {
        let (mut shell, _) = shell_with(FakeApi::new(), None);
        assert_eq!(shell.route(), Route::Login);
        assert!(shell.drawer_entries().is_empty());

        shell.navigate(Route::Profile);
        assert_eq!(shell.route(), Route::Login);
    }

    #[tokio::test]
    async fn test_starts_on_role_home() {
        let (shell, _) = shell_with(FakeApi::new(), Some(profile(Role::Instructor, "")));
        assert_eq!(shell.route(), Route::InstructorDashboard);
        assert_eq!(shell.drawer_entries().len(), 3);
    }

    #[tokio::test]
    async fn test_profile_save_invokes_callback_then_goes_home() {
        let (mut shell, updates) = shell_with(FakeApi::new(), Some(profile(Role::Student, "")));
        shell.navigate(Route::Profile);

        let Screen::Profile(screen) = shell.screen_mut() else {
            panic!("profile screen not mounted");
        };
        screen.draft_name = "Alice".to_string();
        let event = screen.save();
        shell.handle_profile_event(event);

        assert_eq!(*updates.lock().unwrap(), vec!["Alice".to_string()]);
        assert_eq!(shell.route(), Route::StudentDashboard);
        assert_eq!(shell.profile().unwrap().name, "Alice");
        assert_eq!(shell.notice(), Some(PROFILE_UPDATED));
    }

    #[tokio::test]
    async fn test_appointment_management_fetches_for_profile_email() {
        let api = FakeApi::new().with_appointments(&[(1, "10am slot")]);
        let (mut shell, _) = shell_with(api.clone(), Some(profile(Role::Instructor, "prof@example.com")));

        shell.navigate(Route::AppointmentManagement);
        assert!(shell.is_busy());
        settle(|| shell.poll()).await;

        let Screen::AppointmentList(screen) = shell.screen_mut() else {
            panic!("appointment list not mounted");
        };
        assert_eq!(screen.rows(), vec!["10am slot"]);
    }

    #[tokio::test]
    async fn test_reselecting_route_does_not_remount() {
        let api = FakeApi::new();
        let (mut shell, _) = shell_with(api.clone(), Some(profile(Role::Student, "")));

        shell.navigate(Route::Attendance);
        shell.navigate(Route::Attendance);
        settle(|| shell.poll()).await;

        assert_eq!(api.calls(), vec![Call::Attendance]);
    }

    #[tokio::test]
    async fn test_role_cannot_reach_other_drawer() {
        let api = FakeApi::new();
        let (mut shell, _) = shell_with(api.clone(), Some(profile(Role::Student, "s@example.com")));

        shell.navigate(Route::AppointmentManagement);

        assert_eq!(shell.route(), Route::StudentDashboard);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_unmounts_screen() {
        let api = FakeApi::new().slow_lists(Duration::from_millis(50));
        let (mut shell, _) = shell_with(api.clone(), Some(profile(Role::Student, "")));

        shell.navigate(Route::Attendance);
        shell.navigate(Route::Login);

        assert_eq!(shell.route(), Route::Login);
        assert!(!shell.is_busy());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!shell.poll());

        shell.login(profile(Role::Instructor, ""));
        assert_eq!(shell.route(), Route::InstructorDashboard);
    }
}
