use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::users::{
    dto::NewUser,
    repo::UserStore,
    repo_types::User,
    validation::{validate_new_user, UserValidationError},
};

pub const REPORT_HEADER: &str = "--- User Report ---";
pub const REPORT_EMPTY: &str = "No users registered.";

/// In-memory user registry.
///
/// Owns its records exclusively; every mutation goes through `&mut self`.
#[derive(Debug, Default)]
pub struct UserRegistry {
    store: UserStore,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` and store a new active user.
    ///
    /// Nothing is stored when validation fails.
    #[instrument(skip(self, input), fields(is_admin = input.is_admin))]
    pub fn create_user(&mut self, input: NewUser) -> Result<User, UserValidationError> {
        if let Err(e) = validate_new_user(&input) {
            warn!(error = %e, age = input.age, "user rejected");
            return Err(e);
        }

        let user = User::new(input.name, input.email, input.age, input.is_admin);
        let stored = self.store.insert(user).clone();

        info!(user_id = %stored.id(), email = %stored.email(), "user created");
        Ok(stored)
    }

    /// Look up a user. Unknown ids yield `None`, never an error.
    #[instrument(skip(self))]
    pub fn get_user_by_id(&self, id: &Uuid) -> Option<&User> {
        let user = self.store.find_by_id(id);
        if user.is_none() {
            debug!(user_id = %id, "user not found");
        }
        user
    }

    /// Mark a non-admin user inactive.
    ///
    /// Returns false for unknown ids and for admins, leaving state untouched.
    /// Deactivating an already inactive user returns true again.
    #[instrument(skip(self))]
    pub fn deactivate_user(&mut self, id: &Uuid) -> bool {
        let Some(user) = self.store.find_by_id_mut(id) else {
            warn!(user_id = %id, "deactivate unknown user");
            return false;
        };

        if user.is_admin() {
            warn!(user_id = %id, "refusing to deactivate admin");
            return false;
        }

        user.mark_inactive();
        info!(user_id = %id, "user deactivated");
        true
    }

    /// Render the header followed by one line per user in insertion order.
    pub fn generate_user_report(&self) -> String {
        let mut lines = vec![REPORT_HEADER.to_string()];

        if self.store.is_empty() {
            lines.push(REPORT_EMPTY.to_string());
        } else {
            lines.extend(self.store.iter().map(|user| {
                format!(
                    "ID: {}, Name: {}, Status: {}",
                    user.id(),
                    user.name(),
                    user.status()
                )
            }));
        }

        let mut report = lines.join("\n");
        report.push('\n');

        debug!(users = self.store.len(), "user report generated");
        report
    }

    /// Drop every record. Used to reset state between tests.
    pub fn clear(&mut self) {
        debug!(users = self.store.len(), "clearing registry");
        self.store.clear();
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
