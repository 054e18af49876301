//! HTTP requests and responses as plain data.
//!
//! The client builds `HttpRequest` values and parses `HttpResponse` values;
//! whoever holds the network connection executes the round-trip in between.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(path: String) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub(crate) fn delete(path: String) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// A request carrying a JSON body with the matching content type.
    pub(crate) fn json(method: HttpMethod, path: String, body: String) -> Self {
        Self {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..Self::new(method, path)
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
