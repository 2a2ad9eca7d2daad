// src/gui/components/controls.rs
//
// Top bar: beach field, widget size, Refresh.
// Size only re-renders; beach changes take effect on Refresh (or Enter).

use eframe::egui;
use crate::{gui::app::App, config::options::WidgetSize};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Beach:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.beach_input).desired_width(160.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let prev_size = app.state.gui.size;
        egui::ComboBox::from_id_salt("widget_size")
            .selected_text(prev_size.label())
            .show_ui(ui, |ui| {
                for size in WidgetSize::ALL {
                    ui.selectable_value(&mut app.state.gui.size, size, size.label());
                }
            });

        if app.state.gui.size != prev_size {
            logf!("UI: Size {} → {}", prev_size, app.state.gui.size);
            app.state.options.size = app.state.gui.size;
            app.rebuild();
        }

        if ui.button("Refresh").clicked() || submitted {
            app.refresh();
        }
    });
}
