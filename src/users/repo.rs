use uuid::Uuid;

use crate::users::repo_types::User;

/// In-memory user storage, kept in insertion order.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user and return a reference to the stored record.
    pub fn insert(&mut self, user: User) -> &User {
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    /// Find a user by id.
    pub fn find_by_id(&self, id: &Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id() == *id)
    }

    pub fn find_by_id_mut(&mut self, id: &Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id() == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn clear(&mut self) {
        self.users.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name.into(), format!("{}@example.com", name), 30, false)
    }

    #[test]
    fn keeps_insertion_order() {
        let mut store = UserStore::new();
        for name in ["c", "a", "b"] {
            store.insert(user(name));
        }
        let names: Vec<_> = store.iter().map(|u| u.name()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let mut store = UserStore::new();
        let id = store.insert(user("a")).id();
        assert_eq!(store.find_by_id(&id).map(|u| u.name()), Some("a"));
        assert!(store.find_by_id(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn clear_empties_store() {
        let mut store = UserStore::new();
        store.insert(user("a"));
        store.insert(user("b"));
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
    }
}
