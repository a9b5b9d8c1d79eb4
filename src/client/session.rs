//! Authentication state management.

/// Cookie set captured from a successful login.
///
/// A session is created once and never mutated; building a new client is
/// the only way to log in again.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    cookies: Vec<(String, String)>,
}

impl Session {
    /// Create a session from cookie name/value pairs.
    pub fn new(cookies: Vec<(String, String)>) -> Self {
        Self { cookies }
    }

    /// Check if no cookies were captured.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// The captured cookie pairs.
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// Look up a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Render the set as a `Cookie` request header value.
    pub(crate) fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(n, v)| format!("{}={}", n, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Cookie values are credentials; log names only.
        f.debug_struct("Session")
            .field(
                "cookies",
                &self.cookies.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .finish()
    }
}
