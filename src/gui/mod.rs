// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod paint;
pub mod progress;

pub use app::run;
