//! App module - contains the main application state and logic

mod flags;
mod form;
mod loader;
mod plan;
mod search;
mod submission;
mod views;

use crate::backend::{HttpBackend, PlanBackend, SimulatedBackend};
use crate::countries::{CountrySource, RestCountries};
use crate::settings::Settings;
use crate::task::Spawner;
use crate::theme;
use crate::types::View;
use crate::utils::get_cache_dir;
use eframe::egui;
use flags::FlagCache;
use plan::PlanForm;
use search::AdviceSearch;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) spawner: Spawner,
    pub(crate) http: reqwest::Client,
    pub(crate) view: View,
    // Plan view
    pub(crate) plan: PlanForm,
    pub(crate) flags: FlagCache,
    // Search view
    pub(crate) search: AdviceSearch,
    pub(crate) focus_search: bool,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Handle,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let spawner = Spawner::new(runtime, move || repaint_ctx.request_repaint());
        let http = reqwest::Client::new();

        // Environment overrides apply to this session only and are never saved
        let effective = settings.clone().with_env_overrides();

        let source: Arc<dyn CountrySource> =
            Arc::new(RestCountries::new(http.clone(), effective.countries_url.clone()));
        let backend: Arc<dyn PlanBackend> = match &effective.backend_url {
            Some(url) => {
                info!(url = %url, "Using HTTP planning backend");
                Arc::new(HttpBackend::new(http.clone(), url.clone()))
            }
            None => {
                info!(delay_ms = effective.submit_delay_ms, "Using simulated planning backend");
                Arc::new(SimulatedBackend::new(effective.submit_delay()))
            }
        };

        let plan = PlanForm::new(source, backend, &spawner);
        let search = AdviceSearch::new(effective.search_delay());
        let cache_dir = get_cache_dir();

        Self {
            spawner,
            http,
            view: settings.last_view,
            plan,
            flags: FlagCache::new(&cache_dir),
            search,
            focus_search: settings.last_view == View::Search,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Drain finished background work; called once per frame
    pub fn poll_tasks(&mut self, ctx: &egui::Context) {
        self.plan.poll();
        self.search.poll();
        self.flags.poll(ctx);
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_view = self.view;
        self.settings.save(&self.data_dir);
    }

    /// Cancel background work so nothing lands after teardown
    pub fn shutdown(&self) {
        info!("Shutting down background tasks");
        self.spawner.shutdown();
    }
}
