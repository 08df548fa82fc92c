//! Session passed explicitly into every backend call

pub mod context;
pub mod storage;

pub use context::{use_session, SessionProvider};

/// Credentials of the signed-in user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
        }
    }

    /// Session restored from the browser (cookie first, then localStorage)
    pub fn restore() -> Self {
        Self {
            access_token: storage::get_access_token(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> Option<String> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer() {
        assert_eq!(Session::new("abc").bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(Session::default().bearer(), None);
        assert_eq!(Session::new("  ").bearer(), None);
    }
}
