// src/core/net.rs
//
// Blocking HTTPS GET. Both sources are TLS-only, so this sits on reqwest's
// blocking client instead of a raw TcpStream.

use std::{error::Error, time::Duration};

use crate::config::consts::USER_AGENT;

/// Anything that can GET a URL and hand back the body.
/// The fetcher only sees this trait; tests swap in a recording fake.
pub trait HttpGet {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }
}

impl HttpGet for HttpClient {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.inner.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
