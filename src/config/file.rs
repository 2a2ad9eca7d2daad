// src/config/file.rs
//
// `key = value` config file. `#` starts a comment line.
//
//   beach = St Kilda
//   size = medium
//   timeout_secs = 20
//   log_file = beach.log
//   debug = true

use std::{error::Error, fs, path::{Path, PathBuf}};

use super::options::AppOptions;

/// Load options from `path`, layered over the defaults.
/// A missing file is not an error: you get `AppOptions::default()`.
pub fn load(path: &Path) -> Result<AppOptions, Box<dyn Error>> {
    let mut opts = AppOptions::default();
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(opts);
    }
    let text = fs::read_to_string(path)?;
    apply(&mut opts, &text)?;
    logd!("Config: loaded {}", path.display());
    Ok(opts)
}

/// Apply config text on top of `opts`.
pub fn apply(opts: &mut AppOptions, text: &str) -> Result<(), Box<dyn Error>> {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let (key, val) = line
            .split_once('=')
            .ok_or_else(|| format!("Config line {}: expected key = value", n + 1))?;
        let key = key.trim();
        let val = val.trim();

        match key {
            "beach" => opts.beach = s!(val),
            "size" => opts.size = val.parse()?,
            "report_url" => opts.source.report_url = s!(val),
            "api_base" => opts.source.api_base = s!(val),
            "timeout_secs" => {
                opts.source.timeout_secs = val
                    .parse()
                    .map_err(|e| format!("Config line {}: timeout_secs: {}", n + 1, e))?;
            }
            "log_file" => opts.log.file = (!val.is_empty()).then(|| PathBuf::from(val)),
            "debug" => opts.log.debug = parse_bool(val)
                .ok_or_else(|| format!("Config line {}: debug must be true/false", n + 1))?,
            other => logf!("Config: ignoring unknown key '{}'", other),
        }
    }
    Ok(())
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
