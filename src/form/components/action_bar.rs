// src/form/components/action_bar.rs

use eframe::egui;

use crate::config::consts::GEOMETRY_FILE;
use crate::config::gui;
use crate::form::app::{FormApp, Outcome};
use crate::form::model;

pub fn draw(ui: &mut egui::Ui, app: &mut FormApp) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 60);
        let black = egui::Color32::BLACK;

        if ui
            .add(
                egui::Button::new(egui::RichText::new("RUN").color(black).strong())
                    .fill(green),
            )
            .clicked()
        {
            let missing: Vec<&str> = app
                .fields
                .iter()
                .filter(|f| f.is_missing())
                .map(|f| f.field.spec.label())
                .collect();

            if !missing.is_empty() {
                log::debug!("Form: run blocked, missing {:?}", missing);
                app.status = format!("Missing required: {}", missing.join(", "));
            } else {
                let argv = model::build_argv(&app.prog, &app.fields);
                log::info!("Form: RUN clicked, {} token(s)", argv.len().saturating_sub(1));

                if app.cfg.remember {
                    let rect = ui.ctx().screen_rect();
                    let mut snap = app.cfg.clone();
                    snap.window_w = rect.width().round() as u32;
                    snap.window_h = rect.height().round() as u32;
                    gui::save(GEOMETRY_FILE, &snap);
                }

                *app.outcome.lock().unwrap() = Outcome::Submitted(argv);
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        if ui.button("Cancel").clicked() {
            *app.outcome.lock().unwrap() = Outcome::Cancelled;
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ui.label(format!("Status: {}", app.status));
    });
    ui.add_space(4.0);
}
