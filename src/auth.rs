//! Credential gate consumed by the presentation layer. The bookkeeping
//! core never calls this; callers are expected to have authenticated
//! before invoking any recorder or resolver operation.

use sha2::{Digest, Sha256};

/// A username paired with the SHA-256 hex digest of its password.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password_hash: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
        }
    }

    /// The stock administrator account shipped with the original system.
    pub fn admin_default() -> Self {
        Self::new("admin", "dapur123")
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && hash_password(password) == self.password_hash
    }
}

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_admin_credentials_authenticate() {
        let gate = Credentials::admin_default();
        assert!(gate.authenticate("admin", "dapur123"));
    }

    #[test]
    fn wrong_user_or_password_is_rejected() {
        let gate = Credentials::new("owner", "rahasia");
        assert!(!gate.authenticate("owner", "salah"));
        assert!(!gate.authenticate("admin", "rahasia"));
    }
}
