use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account status. Moves from `Active` to `Inactive` only, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,                       // assigned at creation
    name: String,
    email: String,                  // format not checked
    age: u32,                       // >= 18 when created
    status: UserStatus,
    is_admin: bool,                 // admins cannot be deactivated
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl User {
    pub(crate) fn new(name: String, email: String, age: u32, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            status: UserStatus::Active,
            is_admin,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub(crate) fn mark_inactive(&mut self) {
        self.status = UserStatus::Inactive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_active() {
        let user = User::new("Ana".into(), "ana@example.com".into(), 30, false);
        assert_eq!(user.status(), UserStatus::Active);
        assert!(user.is_active());
        assert!(!user.is_admin());
    }

    #[test]
    fn each_user_gets_its_own_id() {
        let a = User::new("A".into(), "a@example.com".into(), 20, false);
        let b = User::new("B".into(), "b@example.com".into(), 20, false);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn status_serializes_lowercase() {
        let mut user = User::new("Ana".into(), "ana@example.com".into(), 30, true);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""status":"active""#));
        assert!(json.contains(r#""is_admin":true"#));

        user.mark_inactive();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""status":"inactive""#));
    }

    #[test]
    fn user_json_roundtrip_keeps_fields() {
        let user = User::new("Ana".into(), "ana@example.com".into(), 30, false);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), user.id());
        assert_eq!(back.email(), "ana@example.com");
        assert_eq!(back.created_at().unix_timestamp(), user.created_at().unix_timestamp());
    }

    #[test]
    fn status_display() {
        assert_eq!(UserStatus::Active.to_string(), "active");
        assert_eq!(UserStatus::Inactive.to_string(), "inactive");
    }
}
