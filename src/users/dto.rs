use serde::Deserialize;

/// Input for creating a user. `is_admin` defaults to false.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            is_admin: false,
        }
    }

    pub fn admin(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self::new(name, email, age).with_admin(true)
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
