use std::fmt;

/// An account as seen by the service layer.
///
/// Empty strings mean "not set". `password` is write-only input: the service
/// hashes it into `hash` and never returns or persists it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub hash: String,
    pub password: String,
}

impl Account {
    /// Merges the non-empty fields of `patch` over `self`.
    pub fn merge(self, patch: Account) -> Account {
        Account {
            id: self.id,
            name: pick(patch.name, self.name),
            email: pick(patch.email, self.email),
            hash: pick(patch.hash, self.hash),
            password: String::new(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("hash", &redacted(&self.hash))
            .field("password", &redacted(&self.password))
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

fn pick(candidate: String, current: String) -> String {
    if candidate.is_empty() {
        current
    } else {
        candidate
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
