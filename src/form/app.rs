// src/form/app.rs
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

use eframe::egui::{self, IconData, ViewportBuilder};

use crate::config::gui::GuiConfig;
use crate::parser::FormParser;

use super::FormError;
use super::components;
use super::model::FieldState;

/// What the event loop left behind for the caller.
pub(crate) enum Outcome {
    Pending,
    Submitted(Vec<String>),
    Cancelled,
}

/// Render the form and block until the user submits or cancels. Returns
/// the argv token vector built from the widgets.
pub fn show(parser: &FormParser, cfg: &GuiConfig) -> Result<Vec<String>, Box<dyn Error>> {
    let fields: Vec<FieldState> = parser.fields().iter().map(FieldState::new).collect();
    let outcome = Arc::new(Mutex::new(Outcome::Pending));

    let title = cfg
        .program_name
        .clone()
        .unwrap_or_else(|| parser.prog().to_owned());
    let options = native_options(cfg);

    log::info!("Form: opening \"{}\" with {} field(s)", title, fields.len());

    let app = FormApp::new(parser.prog().to_owned(), cfg.clone(), fields, outcome.clone());
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))?;

    let result = std::mem::replace(&mut *outcome.lock().unwrap(), Outcome::Pending);
    match result {
        Outcome::Submitted(argv) => Ok(argv),
        _ => {
            log::info!("Form: cancelled");
            Err(Box::new(FormError::Cancelled))
        }
    }
}

fn native_options(cfg: &GuiConfig) -> eframe::NativeOptions {
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([cfg.window_w as f32, cfg.window_h as f32]);

    if let Some(path) = &cfg.icon_path {
        match load_icon(path) {
            Ok(icon) => viewport = viewport.with_icon(icon),
            Err(e) => log::warn!("Form: could not load icon {}: {}", path.display(), e),
        }
    }

    eframe::NativeOptions { viewport, ..Default::default() }
}

fn load_icon(path: &Path) -> Result<IconData, Box<dyn Error>> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

pub struct FormApp {
    pub(crate) prog: String,
    pub(crate) cfg: GuiConfig,
    pub(crate) fields: Vec<FieldState>,
    pub(crate) status: String,
    pub(crate) outcome: Arc<Mutex<Outcome>>,
}

impl FormApp {
    fn new(
        prog: String,
        cfg: GuiConfig,
        fields: Vec<FieldState>,
        outcome: Arc<Mutex<Outcome>>,
    ) -> Self {
        Self {
            prog,
            cfg,
            fields,
            status: "Ready".to_owned(),
            outcome,
        }
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            components::action_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(desc) = &self.cfg.program_description {
                ui.label(desc.as_str());
                ui.separator();
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let mut last_section: Option<String> = None;
                for state in self.fields.iter_mut() {
                    if state.field.section != last_section {
                        if let Some(name) = &state.field.section {
                            ui.add_space(8.0);
                            ui.heading(name.as_str());
                            ui.separator();
                        }
                        last_section = state.field.section.clone();
                    }
                    components::field_row::draw(ui, state);
                }
            });
        });
    }
}
