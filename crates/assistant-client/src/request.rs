//! Request envelope.
//!
//! Every operation describes its request the same way: a method, a path
//! template with `{placeholder}` tokens, path parameter values, optional query
//! parameters, custom headers and (for POST) a JSON body assembled from only
//! the fields the caller set. [`RequestEnvelope`] collects those pieces and
//! [`RequestEnvelope::finish`] validates them before anything touches the
//! network.
//!
//! Builder calls never fail directly. The first problem (an empty required
//! field, a body value that cannot be serialized) is kept and reported by
//! `finish`, so operations can describe their request as one chain.

use std::collections::HashMap;

use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Declarative description of one API request.
#[derive(Debug)]
pub struct RequestEnvelope {
    method: Method,
    template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
    error: Option<Error>,
}

/// A validated request, ready for the transport.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestEnvelope {
    /// Start a request for `template`, e.g. `/v1/workspaces/{workspace_id}`.
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(template: impl Into<String>) -> Self {
        Self::new(Method::GET, template)
    }

    /// Shorthand for a POST request.
    pub fn post(template: impl Into<String>) -> Self {
        Self::new(Method::POST, template)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(template: impl Into<String>) -> Self {
        Self::new(Method::DELETE, template)
    }

    /// HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Supply the value for a `{name}` placeholder.
    pub fn path_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.path_params.push((name.to_string(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present.
    ///
    /// `None` leaves the key out of the URL entirely.
    pub fn query_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Add a query parameter that must be present and non-empty.
    pub fn query_required(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(Error::missing_field(name));
            return self;
        }
        self.query(name, value)
    }

    /// Add a single custom header.
    ///
    /// An invalid name or value is reported by `finish` as a validation error.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            self.fail(Error::Validation(format!("Invalid header name: {}", name)));
            return self;
        }
        if HeaderValue::from_str(&value).is_err() {
            self.fail(Error::Validation(format!("Invalid value for header {}", name)));
            return self;
        }
        self.headers.push((name, value));
        self
    }

    /// Add every caller-supplied custom header.
    pub fn headers(self, headers: &HashMap<String, String>) -> Self {
        headers
            .iter()
            .fold(self, |request, (name, value)| request.header(name.as_str(), value.as_str()))
    }

    /// Add a required string field to the body.
    pub fn body_required(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(Error::missing_field(name));
            return self;
        }
        self.body_field(name, value)
    }

    /// Add a field to the body.
    pub fn body_field<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.body_map().insert(name.to_string(), value);
            }
            Err(e) => self.fail(Error::Encode(e)),
        }
        self
    }

    /// Add a field to the body only when it is set.
    ///
    /// The request still carries a (possibly empty) JSON object body.
    pub fn body_opt<T: Serialize>(mut self, name: &str, value: Option<&T>) -> Self {
        self.body_map();
        match value {
            Some(value) => self.body_field(name, value),
            None => self,
        }
    }

    fn body_map(&mut self) -> &mut Map<String, Value> {
        self.body.get_or_insert_with(Map::new)
    }

    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Substitute path parameters into the template.
    ///
    /// Each value is percent-encoded as a single path segment. A placeholder
    /// with no value, an empty one, or one that is exactly `.` or `..` is a
    /// validation error naming it.
    pub fn resolve_path(&self) -> Result<String> {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            let end = rest[start..].find('}').map(|i| start + i).ok_or_else(|| {
                Error::Validation(format!(
                    "unterminated placeholder in path template `{}`",
                    self.template
                ))
            })?;

            path.push_str(&rest[..start]);
            let name = &rest[start + 1..end];
            let value = self
                .path_params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing_field(name))?;
            // URL joining collapses dot segments, even percent-encoded ones.
            if value == "." || value == ".." {
                return Err(Error::Validation(format!(
                    "`{name}` cannot be `{value}`: it would address a different resource"
                )));
            }
            path.push_str(&urlencoding::encode(value));
            rest = &rest[end + 1..];
        }

        path.push_str(rest);
        Ok(path)
    }

    /// Validate the envelope and produce the resolved request.
    pub(crate) fn finish(self) -> Result<ResolvedRequest> {
        let path = self.resolve_path()?;
        if let Some(error) = self.error {
            return Err(error);
        }

        Ok(ResolvedRequest {
            method: self.method,
            path,
            query: self.query,
            headers: self.headers,
            body: self.body.map(Value::Object),
        })
    }
}
