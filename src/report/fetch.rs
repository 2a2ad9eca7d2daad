// src/report/fetch.rs
use std::error::Error;

use crate::{
    config::options::SourceOptions,
    core::HttpGet,
    progress::Progress,
    snapshot::BeachSnapshot,
    specs::{beachsafe, water_quality},
};

/// Fetch the EPA page, pick out `beach`, then try the beachsafe temperature.
///
/// Only a failed page load is an error. A missing row or cell degrades to the
/// `unavailable` sentinel, and a failed temperature lookup just leaves
/// `water_temperature` empty. The two requests run strictly in order because
/// the second one needs the link found by the first.
pub fn fetch_snapshot(
    http: &dyn HttpGet,
    source: &SourceOptions,
    beach: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BeachSnapshot, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Loading water quality report…");
    }

    logd!("Report: HTTP GET {}", source.report_url);
    let doc = match http.get(&source.report_url) {
        Ok(doc) => doc,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };
    logd!("Report: fetched {} bytes", doc.len());
    if let Some(p) = progress.as_deref_mut() {
        p.step_done();
    }

    let mut snap = water_quality::parse_report(&doc, beach);
    logf!("Report: {} today={} tomorrow={}", beach, snap.today.quality, snap.tomorrow.quality);

    if let Some(url) = snap.today.conditions_url.clone() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Looking up water temperature…");
        }
        match lookup_temperature(http, source, &url) {
            Ok(Some(t)) => {
                logf!("Beachsafe: water temperature {}", t);
                snap.today.water_temperature = Some(t);
            }
            Ok(None) => logd!("Beachsafe: no water temperature in response"),
            Err(e) => loge!("Beachsafe: temperature lookup failed: {}", e),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.step_done();
        }
    } else {
        logd!("Beachsafe: no conditions link, skipping temperature");
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(snap)
}

/// Same as [`fetch_snapshot`], but a failed page load is logged and turned into
/// the all-sentinel snapshot. There is always something to render.
pub fn fetch_or_placeholder(
    http: &dyn HttpGet,
    source: &SourceOptions,
    beach: &str,
    progress: Option<&mut dyn Progress>,
) -> BeachSnapshot {
    match fetch_snapshot(http, source, beach, progress) {
        Ok(snap) => snap,
        Err(e) => {
            loge!("Report: failed finding water quality: {}", e);
            BeachSnapshot::unavailable()
        }
    }
}

/// Temperature for a beachsafe conditions link: slug → API request → field.
pub fn lookup_temperature(
    http: &dyn HttpGet,
    source: &SourceOptions,
    conditions_url: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    let slug = beachsafe::lookup_slug(conditions_url)
        .ok_or_else(|| format!("No beach slug in {}", conditions_url))?;
    let api_url = source.temperature_url(slug);
    logd!("Beachsafe: slug={} GET {}", slug, api_url);

    let body = http.get(&api_url)?;
    beachsafe::parse_water_temperature(&body)
}
