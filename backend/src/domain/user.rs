//! User data model.
//!
//! A [`User`] is the only entity the registry manages. Identifiers are
//! assigned by the registry and are always positive; names and ages are
//! stored exactly as they were accepted at creation time.

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors raised when constructing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    /// Identifiers start at one.
    Zero,
    /// The text is not a base-10 unsigned integer.
    NotANumber,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "user id must be positive"),
            Self::NotANumber => write!(f, "user id must be a positive integer"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Positive integer identifier, unique across the collection.
///
/// # Examples
/// ```
/// use user_registry::domain::UserId;
///
/// let id: UserId = "42".parse().expect("positive integer");
/// assert_eq!(id.get(), 42);
/// assert!("0".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(NonZeroU64);

impl UserId {
    /// Identifier handed out for the first user of an empty collection.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Validate and construct an identifier.
    pub fn new(value: u64) -> Result<Self, UserIdError> {
        NonZeroU64::new(value).map(Self).ok_or(UserIdError::Zero)
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier immediately after this one, or `None` on overflow.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.parse().map_err(|_| UserIdError::NotANumber)?;
        Self::new(value)
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.get()
    }
}

/// Age exactly as supplied by the client.
///
/// Clients may send either a digit string (`"30"`) or a JSON number (`30`);
/// the value is persisted untouched so a read returns what was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(Value);

impl Age {
    /// Wrap a raw JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Text checked by the age validation rule.
    ///
    /// Strings are checked verbatim and numbers through their decimal form.
    /// Any other JSON type has no textual form and never validates.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match &self.0 {
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Number(number) => Some(Cow::Owned(number.to_string())),
            _ => None,
        }
    }

    /// Whether the value counts as "not provided".
    ///
    /// See [`is_blank_value`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        is_blank_value(&self.0)
    }
}

/// Whether a request field counts as "not provided".
///
/// Blank values are `null`, `false`, numeric zero and the empty string.
/// The string `"0"` is present.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use user_registry::domain::is_blank_value;
///
/// assert!(is_blank_value(&json!(0)));
/// assert!(!is_blank_value(&json!("0")));
/// ```
#[must_use]
pub fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl From<&str> for Age {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_owned()))
    }
}

impl From<u64> for Age {
    fn from(value: u64) -> Self {
        Self(Value::from(value))
    }
}

/// Candidate user data awaiting validation and an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    age: Age,
}

impl NewUser {
    /// Bundle a candidate name and age.
    pub fn new(name: impl Into<String>, age: impl Into<Age>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Candidate name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidate age.
    #[must_use]
    pub fn age(&self) -> &Age {
        &self.age
    }

    /// Attach an identifier, producing a stored record.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// Stored user record.
///
/// Serialises as `{"id": 1, "name": "Alice", "age": "30"}`, which is both the
/// on-disk representation and the payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    age: Age,
}

impl User {
    /// Build a record from its parts.
    pub fn new(id: UserId, name: impl Into<String>, age: impl Into<Age>) -> Self {
        Self {
            id,
            name: name.into(),
            age: age.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age as supplied at creation.
    #[must_use]
    pub fn age(&self) -> &Age {
        &self.age
    }
}

#[cfg(test)]
mod tests;
