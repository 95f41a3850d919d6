//! Response envelope.

use reqwest::header::HeaderMap;

/// A decoded result together with the HTTP status and headers it came with.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code.
    pub status_code: u16,
    /// Raw response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Discard status and headers, keeping the decoded body.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Borrow the decoded body.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Look up a response header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Transform the decoded body, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}
