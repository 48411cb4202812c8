// src/form/components/field_row.rs

use eframe::egui;

use crate::args::WidgetKind;
use crate::form::model::FieldState;

pub fn draw(ui: &mut egui::Ui, state: &mut FieldState) {
    let widget = state.widget();
    let label = state.field.spec.label().to_owned();
    let required = state.field.spec.required && state.field.spec.takes_value;
    let shown = if required { format!("{label} *") } else { label };

    match widget {
        WidgetKind::Checkbox => {
            ui.checkbox(&mut state.flag, shown);
        }

        WidgetKind::IntSpinner => {
            ui.horizontal(|ui| {
                ui.label(shown);
                ui.add(egui::DragValue::new(&mut state.num));
            });
        }

        WidgetKind::Dropdown => {
            ui.horizontal(|ui| {
                ui.label(shown);
                let selected = if state.text.is_empty() {
                    "(choose)".to_owned()
                } else {
                    state.text.clone()
                };
                egui::ComboBox::from_id_salt(state.field.spec.name.clone())
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for choice in state.field.spec.choices.clone() {
                            ui.selectable_value(&mut state.text, choice.clone(), choice);
                        }
                    });
            });
        }

        // text-backed widgets
        WidgetKind::TextField
        | WidgetKind::PasswordField
        | WidgetKind::FileChooser
        | WidgetKind::DirChooser => {
            ui.horizontal(|ui| {
                ui.label(shown);
                let mut edit = egui::TextEdit::singleline(&mut state.text);
                match widget {
                    WidgetKind::PasswordField => edit = edit.password(true),
                    // path fields render monospace
                    WidgetKind::FileChooser | WidgetKind::DirChooser => {
                        edit = edit.font(egui::TextStyle::Monospace);
                    }
                    _ => {}
                }
                if let Some(opts) = &state.field.spec.gui_options {
                    if let Some(hint) = &opts.placeholder {
                        edit = edit.hint_text(hint.as_str());
                    }
                    if opts.full_width {
                        edit = edit.desired_width(f32::INFINITY);
                    }
                }
                ui.add(edit);
            });
        }
    }

    if let Some(help) = &state.field.spec.help {
        ui.label(egui::RichText::new(help.as_str()).weak().small());
    }
    ui.add_space(4.0);
}
