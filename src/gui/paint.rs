// src/gui/paint.rs
//
// egui presenter for `widget::tree`. Sizes and colours come from the tree;
// rounded fonts and min-scale have no egui equivalent and are ignored.

use eframe::egui::{self, Color32, RichText};

use crate::widget::tree::{Axis, Node, Palette, Spacer, Stack, Text, Weight, Widget};

const SYMBOL_GLYPH: &str = "⛱";
/// Flexible spacers get a fixed gap; egui layouts don't distribute leftover room.
const FLEX_GAP: f32 = 10.0;

pub fn to_color32(p: Palette) -> Color32 {
    let [r, g, b] = p.rgb();
    Color32::from_rgb(r, g, b)
}

/// Paint the widget as a white rounded card at its family's nominal size.
pub fn draw_widget(ui: &mut egui::Ui, widget: &Widget) {
    let (w, h) = widget.size.canvas();
    egui::Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(egui::CornerRadius::same(20))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(w, h));
            ui.set_max_width(w);
            paint_stack(ui, &widget.root);
        });
}

fn paint_stack(ui: &mut egui::Ui, stack: &Stack) {
    match stack.axis {
        Axis::Vertical => {
            ui.vertical(|ui| paint_children(ui, stack));
        }
        Axis::Horizontal => {
            ui.horizontal(|ui| paint_children(ui, stack));
        }
    }
}

fn paint_children(ui: &mut egui::Ui, stack: &Stack) {
    ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
    for child in &stack.children {
        match child {
            Node::Stack(s) => paint_stack(ui, s),
            Node::Text(t) => {
                ui.label(rich(t));
            }
            Node::Image(img) => {
                ui.label(
                    RichText::new(SYMBOL_GLYPH)
                        .size(img.font.size)
                        .color(to_color32(img.tint)),
                );
            }
            Node::Spacer(Spacer::Fixed(n)) => ui.add_space(*n),
            Node::Spacer(Spacer::Flexible) => ui.add_space(FLEX_GAP),
        }
    }
}

fn rich(t: &Text) -> RichText {
    let r = RichText::new(&t.content)
        .size(t.font.size)
        .color(to_color32(t.color));
    match t.font.weight {
        Weight::Regular => r,
        Weight::Semibold | Weight::Bold => r.strong(),
    }
}
