//! Field validation for candidate users.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::NewUser;

/// A single rule a candidate user broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The name contains something other than ASCII letters and whitespace.
    NameFormat,
    /// The age is not a non-empty run of decimal digits.
    AgeFormat,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameFormat => write!(f, "name must contain only letters and spaces"),
            Self::AgeFormat => write!(f, "age must be a positive integer"),
        }
    }
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static AGE_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z\s]+$")
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

fn age_regex() -> &'static Regex {
    AGE_RE.get_or_init(|| {
        Regex::new(r"^[0-9]+$").unwrap_or_else(|error| panic!("age regex failed to compile: {error}"))
    })
}

/// Check a candidate against the name and age rules.
///
/// Returns every violation found, name first. An empty vector means the
/// candidate is valid.
///
/// # Examples
/// ```
/// use user_registry::domain::{NewUser, Violation, validate_user_data};
///
/// assert!(validate_user_data(&NewUser::new("Alice", "30")).is_empty());
/// assert_eq!(
///     validate_user_data(&NewUser::new("R2D2", "old")),
///     vec![Violation::NameFormat, Violation::AgeFormat],
/// );
/// ```
#[must_use]
pub fn validate_user_data(candidate: &NewUser) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !name_regex().is_match(candidate.name()) {
        violations.push(Violation::NameFormat);
    }
    let age_ok = candidate
        .age()
        .as_text()
        .is_some_and(|text| age_regex().is_match(&text));
    if !age_ok {
        violations.push(Violation::AgeFormat);
    }
    violations
}
