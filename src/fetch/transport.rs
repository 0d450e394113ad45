//! The two side effects of a fetch: one HTTP GET and one pause between attempts.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    fn get(&self, url: &str) -> AppResult<HttpResponse>;
}

pub trait Sleeper {
    fn sleep(&self, dur: Duration);
}

/// Blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("alfahub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> AppResult<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text()?;
        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> AppResult<HttpResponse> {
        (**self).get(url)
    }
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, dur: Duration) {
        thread::sleep(dur);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, dur: Duration) {
        (**self).sleep(dur)
    }
}

/// Turn a non-2xx response into the matching error.
pub(crate) fn check_status(resp: &HttpResponse) -> AppResult<()> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(AppError::HttpStatus {
            status: resp.status,
            reason: resp.reason.clone(),
        })
    }
}
