//! Scheduling Dashboard - instructor and student desktop client.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use scheduling_dashboard as app;

use app::client::ApiClient;
use app::config::{AppConfig, ConfigLoadResult};
use app::models::{Role, UserProfile};
use app::shell::{ProfileCallback, Shell};
use app::ui::DashboardApp;

/// Instructor and student scheduling dashboards.
#[derive(Parser)]
#[command(name = "scheduling-dashboard")]
struct Cli {
    /// Use config.toml from current directory and log to stderr only (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Open this dashboard directly instead of the login screen
    #[arg(long, value_enum)]
    role: Option<Role>,

    /// Display name for the profile
    #[arg(long)]
    name: Option<String>,

    /// Email for the profile; instructors' appointments are filtered by it
    #[arg(long)]
    email: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_dir = (!cli.dev).then(AppConfig::log_dir);
    let _log_guard = app::logging::init(log_dir.as_deref());

    tracing::info!("Scheduling Dashboard starting...");

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        (None, false) => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, startup_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            (AppConfig::default(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            (AppConfig::default(), Some(e.to_string()))
        }
    };

    let profile = resolve_profile(&cli, &config);
    tracing::info!(
        "API: {} (attendance: {})",
        config.api.base_url,
        config.api.attendance_url
    );

    let api = ApiClient::new(&config.api).context("Failed to build HTTP client")?;

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let shell = Shell::new(
        Arc::new(api),
        rt.handle().clone(),
        profile,
        log_profile_update(),
    );

    run_app(shell, rt, startup_error)
}

/// CLI flags override the config's `[profile]` section.
fn resolve_profile(cli: &Cli, config: &AppConfig) -> Option<UserProfile> {
    let base = config.initial_profile();
    let role = cli.role.or(base.as_ref().map(|p| p.role))?;
    let base = base.unwrap_or_default();

    Some(UserProfile {
        name: cli.name.clone().unwrap_or(base.name),
        email: cli.email.clone().unwrap_or(base.email),
        role,
    })
}

/// Saved names live in the shell's profile for this session only.
fn log_profile_update() -> ProfileCallback {
    Box::new(|name: &str| tracing::info!("Profile name updated to {:?}", name))
}

/// Run the main application.
fn run_app(shell: Shell, rt: tokio::runtime::Runtime, startup_error: Option<String>) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Scheduling Dashboard")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scheduling Dashboard",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DashboardApp::new(shell, rt, startup_error)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("scheduling-dashboard").chain(args.iter().copied()))
    }

    #[test]
    fn test_profile_update_leaves_invalid_config_untouched() {
        let path = std::env::temp_dir().join(format!("scheduling-dashboard-{}-invalid.toml", std::process::id()));
        let original = "[api]\nbase_url = \"http://school.example:9000\"\ntimeout_secs = 0\n";
        std::fs::write(&path, original).unwrap();

        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Invalid(_)));

        let mut on_update = log_profile_update();
        on_update("Alice");

        let after = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(after, original);
    }

    #[test]
    fn test_cli_overrides_config_profile() {
        let config = AppConfig::parse("[profile]\nname = \"Dana\"\nemail = \"dana@example.com\"\nrole = \"instructor\"\n").unwrap();

        let profile = resolve_profile(&cli(&["--email", "prof@example.com"]), &config).unwrap();
        assert_eq!(profile.name, "Dana");
        assert_eq!(profile.email, "prof@example.com");
        assert_eq!(profile.role, Role::Instructor);

        let profile = resolve_profile(&cli(&["--role", "student"]), &AppConfig::default()).unwrap();
        assert_eq!(profile.role, Role::Student);
        assert!(profile.name.is_empty());
    }

    #[test]
    fn test_no_role_opens_login() {
        assert!(resolve_profile(&cli(&["--name", "Sam"]), &AppConfig::default()).is_none());
    }
}
