// src/widget/mod.rs
pub mod build;
pub mod quality;
pub mod text;
pub mod tree;

pub use build::{clean_updated, render_widget, render_widget_for_year};
pub use quality::{quality_color, Quality};
pub use text::render_text;
pub use tree::{Node, Palette, Widget};
