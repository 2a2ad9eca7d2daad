// src/snapshot.rs
//
// The one value that flows fetch → widget. Built per run, never stored.

use serde::Serialize;

use crate::config::consts::UNAVAILABLE;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReading {
    /// Site vocabulary (Good/Fair/Poor/Illegal/...) or `unavailable`.
    pub quality: String,
    pub description: String,
    /// Link to the beachsafe detail page. Only ever set for today; never displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<String>,
}

impl DayReading {
    pub fn unavailable() -> Self {
        Self {
            quality: s!(UNAVAILABLE),
            description: s!(UNAVAILABLE),
            conditions_url: None,
            water_temperature: None,
        }
    }
}

impl Default for DayReading {
    fn default() -> Self {
        Self::unavailable()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BeachSnapshot {
    pub today: DayReading,
    pub tomorrow: DayReading,
    /// Raw "Updated ..." caption, verbatim from the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl BeachSnapshot {
    /// Every field at the sentinel. What the widget shows when the page never loaded.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
