//! Fixed-account credential checks.
//!
//! Two plaintext accounts known at process start; no hashing, no external
//! identity provider.

use crate::models::{Role, User};

struct Account {
    username: &'static str,
    password: &'static str,
    role: Role,
}

const DEFAULT_ADMIN: Account = Account {
    username: "admin",
    password: "autolearn2024",
    role: Role::Admin,
};

const GUEST_USER: Account = Account {
    username: "guest",
    password: "guest",
    role: Role::Guest,
};

/// Check credentials against the fixed accounts. The returned user carries
/// no password, only identity and role.
pub fn authenticate(username: &str, password: &str) -> Option<User> {
    [DEFAULT_ADMIN, GUEST_USER]
        .iter()
        .find(|account| account.username == username && account.password == password)
        .map(|account| User {
            username: account.username.to_string(),
            role: account.role,
        })
}
