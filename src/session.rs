//! In-memory session store for web login sessions.
//!
//! Sessions live for the lifetime of the process: created on login, removed
//! on logout, gone on restart. The client cookie carries a max-age hint but
//! nothing expires server-side.

use dashmap::DashMap;

use crate::models::User;

pub struct SessionStore {
    sessions: DashMap<String, User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a session for an authenticated user and return its token.
    pub fn create(&self, user: User) -> String {
        let token = Self::generate_session_token();
        self.sessions.insert(token.clone(), user);
        token
    }

    pub fn lookup(&self, token: &str) -> Option<User> {
        self.sessions.get(token).map(|entry| entry.clone())
    }

    /// Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    fn generate_session_token() -> String {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        (0..32)
            .map(|_| format!("{:x}", rng.r#gen::<u8>() % 16))
            .collect()
    }
}
