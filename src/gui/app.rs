// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::HttpClient,
    report,
    snapshot::BeachSnapshot,
    widget::{self, Widget},
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Beach Report",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None if the HTTP client could not be built; the widget then stays on sentinels
    http: Option<HttpClient>,

    pub snapshot: BeachSnapshot,
    pub widget: Widget,

    // GuiProgress holds a clone and writes fetch steps into it
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let http = match HttpClient::new(state.options.source.timeout()) {
            Ok(c) => Some(c),
            Err(e) => {
                loge!("Init: HTTP client unavailable: {}", e);
                None
            }
        };

        let snapshot = BeachSnapshot::unavailable();
        let widget = widget::render_widget(&snapshot, &state.options.beach, state.options.size);

        let mut app = Self {
            state,
            http,
            snapshot,
            widget,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        logf!("Init: beach='{}' size={}", app.state.options.beach, app.state.options.size);
        app.refresh();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply GUI inputs, fetch a fresh snapshot, rebuild the widget.
    pub fn refresh(&mut self) {
        self.state.sync_gui_into_options();
        let opts = &self.state.options;
        logf!("UI: Refresh beach='{}'", opts.beach);

        self.snapshot = match &self.http {
            Some(http) => {
                let mut prog = GuiProgress::new(self.status.clone());
                report::fetch_or_placeholder(http, &opts.source, &opts.beach, Some(&mut prog))
            }
            None => {
                self.status("No HTTP client; showing placeholders");
                BeachSnapshot::unavailable()
            }
        };
        self.rebuild();
    }

    /// Re-render from the current snapshot without touching the network.
    pub fn rebuild(&mut self) {
        let opts = &self.state.options;
        self.widget = widget::render_widget(&self.snapshot, &opts.beach, opts.size);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            crate::gui::components::controls::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::paint::draw_widget(ui, &self.widget);
        });
    }
}
