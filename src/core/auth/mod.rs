use serde::{Deserialize, Serialize};

const OFFLINE_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Credentials handed to the game. Produced elsewhere; the launcher only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthContext {
    pub username: String,
    pub uuid: String,
    pub access_token: String,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::offline("Player")
    }
}

impl AuthContext {
    pub fn new(
        username: impl Into<String>,
        uuid: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            uuid: uuid.into(),
            access_token: access_token.into(),
        }
    }

    pub fn offline(username: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            uuid: OFFLINE_UUID.into(),
            access_token: "offline_access_token".into(),
        }
    }

    /// Fill blank fields so no argument ends up as an empty string.
    pub fn sanitized(mut self) -> Self {
        if self.username.trim().is_empty() {
            self.username = "Player".into();
        }
        if self.uuid.trim().is_empty() {
            self.uuid = OFFLINE_UUID.into();
        }
        if self.access_token.trim().is_empty() {
            self.access_token = "offline_access_token".into();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_fills_blank_fields() {
        let auth = AuthContext::new("  ", "", "").sanitized();
        assert_eq!(auth.username, "Player");
        assert_eq!(auth.uuid, OFFLINE_UUID);
        assert_eq!(auth.access_token, "offline_access_token");
    }

    #[test]
    fn sanitized_keeps_real_values() {
        let auth = AuthContext::new("Alex", "abcd", "token").sanitized();
        assert_eq!(auth, AuthContext::new("Alex", "abcd", "token"));
    }
}
