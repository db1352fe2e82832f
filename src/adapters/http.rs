//! HTTP client adapter.
//!
//! Implements [`HttpPort`] — one blocking POST per call, no retries, no
//! connection reuse across scans.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: `esp_idf_svc::http::client::EspHttpConnection`
//!   driven through the `embedded_svc` client traits.
//! - **all other targets**: scripted responses for host-side tests.

use crate::app::ports::{HttpPort, HttpResponse, TransportError};

pub struct HttpClientAdapter {
    #[cfg(not(target_os = "espidf"))]
    sim: SimExchange,
}

#[cfg(not(target_os = "espidf"))]
struct SimExchange {
    responses: std::collections::VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<(String, String)>,
}

impl HttpClientAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            sim: SimExchange {
                responses: std::collections::VecDeque::new(),
                requests: Vec::new(),
            },
        }
    }

    /// Simulation control: enqueue the result of the next exchange.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_push_response(&mut self, response: Result<HttpResponse, TransportError>) {
        self.sim.responses.push_back(response);
    }

    /// Simulation control: every `(url, body)` pair sent so far.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_requests(&self) -> &[(String, String)] {
        &self.sim.requests
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_post(&mut self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        use embedded_svc::http::client::Client;
        use embedded_svc::io::{Read, Write};
        use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

        let connection = EspHttpConnection::new(&Configuration::default())
            .map_err(|e| TransportError::new(&format!("connection setup: {e}")))?;
        let mut client = Client::wrap(connection);

        let headers = [("Content-Type", "application/json")];
        let mut request = client
            .post(url, &headers)
            .map_err(|e| TransportError::new(&format!("request open: {e}")))?;
        request
            .write_all(body.as_bytes())
            .map_err(|e| TransportError::new(&format!("request write: {e}")))?;

        let mut response = request
            .submit()
            .map_err(|e| TransportError::new(&format!("exchange: {e}")))?;
        let status = response.status();

        // Drain the body into the bounded diagnostic buffer; anything past
        // capacity is read and discarded so the connection closes cleanly.
        let mut captured = heapless::String::<256>::new();
        let mut chunk = [0u8; 64];
        loop {
            let n = response
                .read(&mut chunk)
                .map_err(|e| TransportError::new(&format!("response read: {e}")))?;
            if n == 0 {
                break;
            }
            for &b in &chunk[..n] {
                if captured.push(b as char).is_err() {
                    break;
                }
            }
        }

        Ok(HttpResponse {
            status,
            body: captured,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_post(&mut self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        self.sim.requests.push((url.to_owned(), body.to_owned()));
        self.sim
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

impl Default for HttpClientAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPort for HttpClientAdapter {
    fn post_json(&mut self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        self.platform_post(url, body)
    }
}
