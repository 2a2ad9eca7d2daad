// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::{consts::CONFIG_FILE, file, options::AppOptions},
    core::HttpClient,
    progress::Progress,
    report,
    widget::{render_text, render_widget},
};

#[derive(Debug)]
pub struct CliArgs {
    pub options: AppOptions,
    pub json: bool,
    pub help: bool,
}

/// Logs fetch steps; the terminal already shows the log sink.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let opts = &args.options;
    crate::log::init(&opts.log);

    let http = HttpClient::new(opts.source.timeout())?;
    let snapshot = report::fetch_or_placeholder(&http, &opts.source, &opts.beach, Some(&mut CliProgress));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&render_widget(&snapshot, &opts.beach, opts.size)));
    }
    Ok(())
}

/// Defaults < config file < flags. `--config` is read first so flags win over it.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Box<dyn Error>> {
    let args: Vec<String> = args.into_iter().collect();

    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .map(|i| args.get(i + 1).map(PathBuf::from).ok_or("Missing value for --config"))
        .transpose()?
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let mut out = CliArgs { options: file::load(&config_path)?, json: false, help: false };
    let opts = &mut out.options;

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "-b" | "--beach" => opts.beach = it.next().ok_or("Missing value for --beach")?,
            "-s" | "--size" => {
                let v = it.next().ok_or("Missing value for --size")?;
                opts.size = v.parse()?;
            }
            "--report-url" => opts.source.report_url = it.next().ok_or("Missing value for --report-url")?,
            "--api-base" => opts.source.api_base = it.next().ok_or("Missing value for --api-base")?,
            "--timeout" => {
                let v = it.next().ok_or("Missing value for --timeout")?;
                opts.source.timeout_secs = v.parse()?;
            }
            "--log-file" => opts.log.file = Some(PathBuf::from(it.next().ok_or("Missing value for --log-file")?)),
            "--config" => { it.next(); } // already applied
            "--json" => out.json = true,
            "--debug" => opts.log.debug = true,
            "-h" | "--help" => out.help = true,
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            // Bare word: the widget parameter
            beach => opts.beach = s!(beach),
        }
    }

    if opts.beach.trim().is_empty() {
        return Err("Beach name must not be empty".into());
    }
    Ok(out)
}
