//! HTTP status categorization for response interpretation and error types.

/// HTTP status code carried through error variants and response handling.
///
/// Stored as the raw code so error types don't need an HTTP client dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

pub const NOT_FOUND: HttpStatusCode = HttpStatusCode(404);

impl HttpStatusCode {
    /// 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 404, the one non-2xx status with a dedicated outcome.
    pub fn is_not_found(&self) -> bool {
        self.0 == NOT_FOUND.0
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
