// src/report/mod.rs
mod fetch;

pub use fetch::fetch_or_placeholder;
pub use fetch::fetch_snapshot;
pub use fetch::lookup_temperature;
