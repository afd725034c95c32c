use reqwest::Method;
use serde::Serialize;

use super::HttpError;

pub const ACCEPT_JSON: &str = "application/json";

/// A fully-formed request, independent of the transport that executes it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    base_url: String,
    resource: Option<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpRequest {
    /// Render the absolute URL, percent-encoding every query key and value.
    pub fn url(&self) -> String {
        let mut url = self.url_without_query();

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Base URL and resource only. Query values may carry credentials, so
    /// this is the form used in log lines.
    pub fn url_without_query(&self) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();

        if let Some(resource) = &self.resource {
            let resource = resource.trim_start_matches('/');
            if !resource.is_empty() {
                url.push('/');
                url.push_str(resource);
            }
        }

        url
    }

    /// First query parameter with the given name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn header_values<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> + 'n
    where
        'a: 'n,
    {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Append a header, keeping any existing value with the same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Replace every header with the given name by a single value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Serialize `value` as the request body and mark it as JSON.
    pub fn set_json_body<T: Serialize>(&mut self, value: &T) -> Result<(), HttpError> {
        let body = serde_json::to_string(value)
            .map_err(|e| HttpError::Encode(format!("Failed to serialize request body: {}", e)))?;
        self.set_header("Content-Type", ACCEPT_JSON);
        self.body = Some(body);
        Ok(())
    }
}

/// Fluent builder for [`HttpRequest`]. Defaults to `GET` with no headers.
#[derive(Debug, Clone)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                method: Method::GET,
                base_url: base_url.into(),
                resource: None,
                query: Vec::new(),
                headers: Vec::new(),
                body: None,
            },
        }
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.request.resource = Some(resource.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.request.method = method;
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.add_header(name, value);
        self
    }

    pub fn accept_json(mut self) -> Self {
        self.request.set_header("Accept", ACCEPT_JSON);
        self
    }

    pub fn build(self) -> HttpRequest {
        self.request
    }
}
