//! The in-memory user collection and its pure rules.
//!
//! Uniqueness and identifier allocation are plain scans over the collection;
//! the dataset is small enough to live in memory, so no index is kept.

use crate::domain::{User, UserId};

/// Ordered sequence of users in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    /// Wrap users loaded from storage.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Users in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    /// Number of users held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Find the user with exactly this identifier.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// True when no stored user has exactly this name (case-sensitive).
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::{User, UserCollection, UserId};
    ///
    /// let users = UserCollection::new(vec![User::new(UserId::FIRST, "Alice", "30")]);
    /// assert!(!users.is_name_unique("Alice"));
    /// assert!(users.is_name_unique("alice"));
    /// ```
    #[must_use]
    pub fn is_name_unique(&self, name: &str) -> bool {
        !self.users.iter().any(|user| user.name() == name)
    }

    /// Identifier for the next user: one past the current maximum, or
    /// [`UserId::FIRST`] when empty.
    ///
    /// Removing the highest identifier makes it available again. Returns
    /// `None` only when the maximum is already `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<UserId> {
        match self.users.iter().map(User::id).max() {
            Some(max) => max.successor(),
            None => Some(UserId::FIRST),
        }
    }

    /// Append a user at the end.
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove and return the user with this identifier, if present.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|user| user.id() == id)?;
        Some(self.users.remove(index))
    }
}

impl From<UserCollection> for Vec<User> {
    fn from(value: UserCollection) -> Self {
        value.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn id(raw: u64) -> UserId {
        UserId::new(raw).expect("non-zero id")
    }

    #[fixture]
    fn populated() -> UserCollection {
        UserCollection::new(vec![
            User::new(id(1), "Alice", "30"),
            User::new(id(5), "Bob", "41"),
            User::new(id(3), "Carol", "22"),
        ])
    }

    #[rstest]
    fn next_id_starts_at_one_when_empty() {
        assert_eq!(UserCollection::default().next_id(), Some(UserId::FIRST));
    }

    #[rstest]
    fn next_id_is_one_past_the_maximum(populated: UserCollection) {
        assert_eq!(populated.next_id(), Some(id(6)));
    }

    #[rstest]
    fn next_id_reuses_a_removed_maximum(mut populated: UserCollection) {
        populated.remove(id(5)).expect("bob present");
        assert_eq!(populated.next_id(), Some(id(4)));
    }

    #[rstest]
    fn next_id_is_none_at_the_ceiling() {
        let users = UserCollection::new(vec![User::new(id(u64::MAX), "Max", "1")]);
        assert!(users.next_id().is_none());
    }

    #[rstest]
    #[case("Alice", false)]
    #[case("alice", true)]
    #[case("Alice ", true)]
    #[case("Dave", true)]
    fn name_uniqueness_is_exact(
        populated: UserCollection,
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(populated.is_name_unique(name), expected);
    }

    #[rstest]
    fn find_matches_exact_id(populated: UserCollection) {
        assert_eq!(populated.find(id(3)).map(User::name), Some("Carol"));
        assert!(populated.find(id(2)).is_none());
    }

    #[rstest]
    fn remove_keeps_remaining_order(mut populated: UserCollection) {
        let removed = populated.remove(id(1)).expect("alice present");
        assert_eq!(removed.name(), "Alice");
        let names: Vec<&str> = populated.as_slice().iter().map(User::name).collect();
        assert_eq!(names, ["Bob", "Carol"]);
        assert!(populated.remove(id(1)).is_none());
    }
}
