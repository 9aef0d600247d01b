//! The passenger value type.
//!
//! A [`Passenger`] identifies a reservation holder by first and last name.
//! Equality, ordering and hashing all ignore letter case and compare the
//! last name first, so `("john", "doe")` and `("JOHN", "DOE")` are the same
//! passenger and sort next to every other Doe.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A reservation holder.
///
/// Names are kept exactly as entered and are never validated; empty strings
/// are legal. The value is immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    first_name: String,
    last_name: String,
}

impl Passenger {
    /// Create a passenger from a first and last name.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The first name, as entered.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The last name, as entered.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// Compare two strings ignoring case, without allocating.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl Ord for Passenger {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.last_name, &other.last_name)
            .then_with(|| cmp_ignore_case(&self.first_name, &other.first_name))
    }
}

impl PartialOrd for Passenger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Passenger {}

impl Hash for Passenger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Lower-cased composite, consistent with `Eq`.
        for name in [&self.last_name, &self.first_name] {
            for c in name.chars().flat_map(char::to_lowercase) {
                c.hash(state);
            }
            // Field separator so ("ab", "c") and ("a", "bc") hash apart.
            0xFFu8.hash(state);
        }
    }
}

impl std::fmt::Display for Passenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.last_name, self.first_name)
    }
}
