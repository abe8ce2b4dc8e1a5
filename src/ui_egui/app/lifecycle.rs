use std::time::Duration as StdDuration;

use chrono::{Local, NaiveDate};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::path::PathBuf;

use super::CountdownApp;
use crate::models::settings::Settings;
use crate::services::countdown::{engine, ClockTicker, DayClickOutcome, DayStateService};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CountdownTheme;
use crate::ui_egui::views::{self, DayCellPalette};
use crate::utils::date::local_today;

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::new(resolve_config_path());
        let settings = load_settings_or_default(&settings_service);
        log::info!(
            "Loaded settings: start_date={}, target_date={}, tick_interval_secs={}",
            settings.start_date,
            settings.target_date,
            settings.tick_interval_secs
        );

        if !settings.has_valid_window() {
            log::warn!(
                "Target date {} does not follow start date {}; the wall will be empty",
                settings.target_date,
                settings.start_date
            );
        }

        // Write the config file on first run so the dates are easy to edit.
        if !settings_service.path().exists() {
            if let Err(err) = settings_service.save(&settings) {
                log::warn!("Failed to write default config: {}", err);
            }
        }

        let day_state = DayStateService::load(resolve_storage_dir());

        let now = Local::now();
        let mut ticker = ClockTicker::new(settings.tick_interval_secs);
        ticker.start_at(now);

        let active_theme = resolve_theme(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        let mut app = Self {
            settings,
            day_state,
            ticker,
            active_theme,
            today: local_today(),
        };

        // Catch up: mark the most recently elapsed day even if the app was
        // closed when it ended.
        app.run_auto_mark(app.today);
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now();
        if self.ticker.poll_at(now) {
            self.today = local_today();
            self.run_auto_mark(self.today);
            ctx.request_repaint();
        }

        // Wake up for the next tick even without user input.
        let wait = self
            .ticker
            .next_due_in(now)
            .unwrap_or_else(|| StdDuration::from_secs(60));
        ctx.request_repaint_after(wait.min(StdDuration::from_secs(60)));

        self.render_header(ctx);

        let total = engine::total_days(self.settings.start_date, self.settings.target_date);
        let passed = engine::days_passed(self.settings.start_date, self.today);
        let days =
            engine::build_day_sequence(self.settings.start_date, total, passed, self.day_state.marked_days());
        let palette = DayCellPalette::from_theme(&self.active_theme);

        let clicked_keys = egui::CentralPanel::default()
            .show(ctx, |ui| {
                views::render_day_grid(ui, &days, self.day_state.day_links(), palette)
            })
            .inner;

        for date_key in clicked_keys {
            self.handle_day_click(&date_key, ctx);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Stop the ticker so no tick can act on the store after teardown.
        self.ticker.stop();
        log::info!("Clock ticker stopped on exit");
    }

    fn handle_day_click(&mut self, date_key: &str, ctx: &egui::Context) {
        match self.day_state.click_day(date_key) {
            Ok(DayClickOutcome::OpenLink(url)) => {
                if let Err(err) = webbrowser::open(&url) {
                    log::warn!("Failed to open link for {}: {}", date_key, err);
                }
            }
            Ok(DayClickOutcome::Toggled(marked)) => {
                log::debug!("Toggled {} to marked={}", date_key, marked);
                ctx.request_repaint();
            }
            Err(err) => {
                log::error!("Failed to persist day state for {}: {:?}", date_key, err);
            }
        }
    }

    fn run_auto_mark(&mut self, today: NaiveDate) {
        match self.day_state.auto_mark_elapsed(
            today,
            self.settings.start_date,
            self.settings.target_date,
        ) {
            Ok(true) => log::info!("Auto-marked the day before {}", today),
            Ok(false) => {}
            Err(err) => log::error!("Failed to auto-mark elapsed day: {:?}", err),
        }
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}

fn resolve_theme(settings: &Settings) -> CountdownTheme {
    // If use_system_theme is enabled, detect and use system preference
    let theme_name = if settings.use_system_theme {
        match dark_light::detect() {
            dark_light::Mode::Dark => "dark".to_string(),
            dark_light::Mode::Light => "light".to_string(),
            dark_light::Mode::Default => settings.theme.clone(),
        }
    } else {
        settings.theme.clone()
    };

    if theme_name.to_lowercase().contains("dark") {
        CountdownTheme::dark()
    } else {
        CountdownTheme::light()
    }
}

fn resolve_config_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("countdown.toml")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "RustCountdown") {
            proj_dirs.config_dir().join("countdown.toml")
        } else {
            PathBuf::from("countdown.toml")
        }
    }
}

fn resolve_storage_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("countdown-data")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "RustCountdown") {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("countdown-data")
        }
    }
}
