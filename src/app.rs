//! Application state and the per-frame update loop.
//!
//! `HistoryApp` owns the history snapshot and the channel endpoints. All
//! mutation happens here, on the UI thread, by draining backend events at
//! the top of each frame; the history view itself only ever sees
//! `(&records, loading)`.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::backend::run_backend;
use crate::cache::{self, CacheWriter};
use crate::config::{load_settings, save_settings, Settings};
use crate::protocol::{BackendAction, GuiEvent};
use crate::record::ConversationRecord;
use crate::ui;
use crate::ui::theme::FarmTheme;

pub struct HistoryApp {
    // History snapshot rendered by the view
    pub records: Vec<ConversationRecord>,
    pub loading: bool,
    pub last_error: Option<String>,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Persisted settings and the toolbar's URL edit buffer
    pub settings: Settings,
    pub backend_url_input: String,

    // Offline cache writer (None when disabled or unavailable)
    cache: Option<CacheWriter>,
}

impl HistoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread; it fetches immediately on startup
        let backend_url = settings.backend_url.clone();
        let refresh_secs = settings.refresh_secs;
        thread::spawn(move || {
            run_backend(action_rx, event_tx, backend_url, refresh_secs);
        });

        let mut app = Self::with_channels(action_tx, event_rx, settings);

        if app.settings.offline_cache {
            match CacheWriter::new() {
                Ok(writer) => app.cache = Some(writer),
                Err(e) => eprintln!("Offline cache disabled: {}", e),
            }
            // Show the cached snapshot while the first fetch runs
            if let Some(records) = cache::load_cached() {
                if !records.is_empty() {
                    app.records = records;
                    app.loading = false;
                }
            }
        }

        app
    }

    /// Build the app around existing channel endpoints, with no cache and
    /// an empty history awaiting its first fetch.
    pub fn with_channels(
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        settings: Settings,
    ) -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            last_error: None,
            action_tx,
            event_rx,
            backend_url_input: settings.backend_url.clone(),
            settings,
            cache: None,
        }
    }

    /// Drain all pending events from the backend
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                GuiEvent::Conversations(records) => {
                    self.loading = false;
                    self.last_error = None;
                    if let Some(cache) = &self.cache {
                        cache.store(&records);
                    }
                    self.records = records;
                }
                GuiEvent::FetchFailed(message) => {
                    // Keep the last good snapshot; the toolbar carries the
                    // failure, the list never shows an error state
                    self.loading = false;
                    self.last_error = Some(message);
                }
            }
        }
    }

    pub(crate) fn apply_toolbar_action(&mut self, ctx: &egui::Context, action: ui::ToolbarAction) {
        match action {
            ui::ToolbarAction::Refresh => {
                self.loading = true;
                let _ = self.action_tx.send(BackendAction::FetchConversations);
            }
            ui::ToolbarAction::BackendUrlChanged(url) => {
                // The toolbar already pointed the backend at it
                self.loading = true;
                self.settings.backend_url = url;
                self.save_settings();
            }
            ui::ToolbarAction::ToggleTheme => {
                self.settings.theme = if self.settings.theme == "light" {
                    "dark".to_string()
                } else {
                    "light".to_string()
                };
                match self.settings.theme.as_str() {
                    "light" => ctx.set_visuals(egui::Visuals::light()),
                    _ => ctx.set_visuals(egui::Visuals::dark()),
                }
                self.save_settings();
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for HistoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Request repaint to keep draining events
        ctx.request_repaint_after(Duration::from_millis(100));

        let theme = match self.settings.theme.as_str() {
            "light" => FarmTheme::light(),
            _ => FarmTheme::dark(),
        };

        // Top panel: toolbar
        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                toolbar_action = ui::render_toolbar(
                    ui,
                    &mut self.backend_url_input,
                    self.loading,
                    self.records.len(),
                    self.last_error.as_deref(),
                    &self.action_tx,
                );
            });
        if let Some(action) = toolbar_action {
            self.apply_toolbar_action(ctx, action);
        }

        // Central panel: the conversation history
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[0])
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                ui::render_history(ui, &self.records, self.loading, &self.settings.backend_url);
            });
    }
}
