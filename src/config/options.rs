// src/config/options.rs
use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// The single "widget parameter".
    pub beach: String,
    pub size: WidgetSize,
    pub source: SourceOptions,
    pub log: LogOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            beach: s!(DEFAULT_BEACH),
            size: WidgetSize::default(),
            source: SourceOptions::default(),
            log: LogOptions::default(),
        }
    }
}

/// Home-screen widget families. Only `Small` changes the rendering (smaller quality font).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// Nominal widget canvas in points (w, h).
    pub fn canvas(self) -> (f32, f32) {
        match self {
            Self::Small => (170.0, 170.0),
            Self::Medium => (364.0, 170.0),
            Self::Large => (364.0, 382.0),
            Self::ExtraLarge => (768.0, 382.0),
        }
    }
}

impl fmt::Display for WidgetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WidgetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "extra-large" | "extralarge" | "xl" => Ok(Self::ExtraLarge),
            other => Err(format!("Unknown widget size: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub report_url: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            report_url: s!(REPORT_URL),
            api_base: s!(BEACHSAFE_API_BASE),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl SourceOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `{api_base}/api/v4/beach/{slug}`
    pub fn temperature_url(&self, slug: &str) -> String {
        join!(self.api_base.trim_end_matches('/'), "/api/v4/beach/", slug)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Append log lines here instead of stderr.
    pub file: Option<PathBuf>,
    pub debug: bool,
}
