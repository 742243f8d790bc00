//! Shared pieces of the login demos: an in-memory user table and logging setup

use std::collections::HashMap;

use saltpass::SaltPass;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber filtered by `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[derive(Debug, Clone)]
struct StoredPassword {
    hashed: String,
    salt: String,
}

/// Users keyed by email, holding encoded digests and salts
#[derive(Debug)]
pub struct UserStore<'a> {
    passwords: &'a SaltPass,
    algorithm: String,
    users: HashMap<String, StoredPassword>,
}

impl<'a> UserStore<'a> {
    /// Empty store hashing with `algorithm`
    pub fn new(passwords: &'a SaltPass, algorithm: impl Into<String>) -> Self {
        Self {
            passwords,
            algorithm: algorithm.into(),
            users: HashMap::new(),
        }
    }

    /// Store a fresh salt and the salted digest of `password` for `email`
    pub fn register(&mut self, email: &str, password: &str) {
        let salt = self.passwords.just_salt_string(24);
        let encoded = self.passwords.encoding().encode(password.as_bytes());
        let hashed = self
            .passwords
            .just_hash_string(&self.algorithm, &encoded, &salt);
        tracing::info!(email, "registered user");
        self.users
            .insert(email.to_string(), StoredPassword { hashed, salt });
    }

    /// Whether `password` matches what was registered for `email`
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        let Some(user) = self.users.get(email) else {
            return false;
        };
        let encoded = self.passwords.encoding().encode(password.as_bytes());
        self.passwords
            .just_check_string(&self.algorithm, &user.hashed, &encoded, &user.salt)
    }
}

/// Login attempts replayed by the demos, as `(email, password)`
pub const ATTEMPTS: [(&str, &str); 5] = [
    ("ya@zoo.com", "password"),
    ("ya@zoo.com", "god"),
    ("ya@zoo.com", "letmein"),
    ("bingo@bango.com", "brute force!@#$!@"),
    ("bingo@bango.com", "password"),
];

/// Store holding the three demo users
pub fn demo_users<'a>(passwords: &'a SaltPass, algorithm: &str) -> UserStore<'a> {
    let mut users = UserStore::new(passwords, algorithm);
    users.register("bingo@bango.com", "password");
    users.register("boo@g-g-ghostmail.com", "ahh!");
    users.register("ya@zoo.com", "letmein");
    users
}

/// Outcome of each of [`ATTEMPTS`] against `users`
#[must_use]
pub fn attempt_logins(users: &UserStore<'_>) -> Vec<bool> {
    ATTEMPTS
        .iter()
        .map(|(email, password)| users.authenticate(email, password))
        .collect()
}

/// Register the demo users and print five login attempts
pub fn run(passwords: &SaltPass, algorithm: &str) {
    let users = demo_users(passwords, algorithm);
    for ((email, _), accepted) in ATTEMPTS.iter().zip(attempt_logins(&users)) {
        println!("{email}: {accepted}");
    }
}
