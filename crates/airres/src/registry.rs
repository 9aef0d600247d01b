//! Per-flight passenger registry.
//!
//! A [`FlightRegistry`] keeps the passengers of one flight sorted by
//! [`Passenger`] order and never holds more than its capacity. Both
//! properties are maintained at every mutation; there is no separate
//! validation pass.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::passenger::Passenger;

/// Seats per flight when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 370;

/// A normalized flight identifier.
///
/// Normalization trims surrounding whitespace and upper-cases the rest, so
/// `" aa100 "` and `"AA100"` name the same flight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Normalize a raw flight identifier.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// The normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlightNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// How a registry treats a passenger who already holds a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Repeated reservations each take another seat.
    #[default]
    Allow,
    /// A passenger already on the flight cannot reserve again.
    Reject,
}

/// The ordered, capacity-bounded passenger list of one flight.
#[derive(Debug, Clone)]
pub struct FlightRegistry {
    flight_number: FlightNumber,
    passengers: Vec<Passenger>,
    capacity: usize,
    duplicates: DuplicatePolicy,
}

impl FlightRegistry {
    /// Create an empty registry for `flight_number` holding at most
    /// `capacity` passengers.
    #[must_use]
    pub fn new(flight_number: FlightNumber, capacity: usize) -> Self {
        Self {
            flight_number,
            passengers: Vec::new(),
            capacity,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Set how repeated reservations are handled.
    #[must_use]
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// The flight this registry belongs to.
    #[must_use]
    pub fn flight_number(&self) -> &FlightNumber {
        &self.flight_number
    }

    /// Maximum number of passengers.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The active duplicate policy.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Number of seats taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Whether no seat is taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Whether every seat is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    /// Seats still free.
    #[must_use]
    pub fn available_seats(&self) -> usize {
        self.capacity.saturating_sub(self.passengers.len())
    }

    /// Add a passenger, keeping the list sorted.
    ///
    /// Returns `false` and leaves the registry untouched when the flight is
    /// full, or when the passenger is already listed under
    /// [`DuplicatePolicy::Reject`]. The new entry goes before the first
    /// existing entry that is not strictly less than it.
    pub fn insert(&mut self, passenger: Passenger) -> bool {
        if self.is_full() {
            warn!(
                flight = %self.flight_number,
                capacity = self.capacity,
                "flight is full, rejecting {passenger}"
            );
            return false;
        }

        let index = self.passengers.partition_point(|p| *p < passenger);

        if self.duplicates == DuplicatePolicy::Reject
            && self.passengers.get(index).is_some_and(|p| *p == passenger)
        {
            debug!(flight = %self.flight_number, "duplicate reservation for {passenger}");
            return false;
        }

        debug!(flight = %self.flight_number, index, "reserved seat for {passenger}");
        self.passengers.insert(index, passenger);
        true
    }

    /// Remove the first entry equal to `passenger`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, passenger: &Passenger) -> bool {
        match self.position(passenger) {
            Some(index) => {
                let removed = self.passengers.remove(index);
                debug!(flight = %self.flight_number, index, "cancelled reservation for {removed}");
                true
            }
            None => {
                trace!(flight = %self.flight_number, "no reservation for {passenger}");
                false
            }
        }
    }

    /// Whether some entry equals `passenger`.
    #[must_use]
    pub fn contains(&self, passenger: &Passenger) -> bool {
        self.position(passenger).is_some()
    }

    /// The passengers in order.
    #[must_use]
    pub fn list(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Iterate over the passengers in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.passengers.iter()
    }

    /// Reserve a seat by name. See [`FlightRegistry::insert`].
    pub fn reserve(&mut self, first_name: &str, last_name: &str) -> bool {
        self.insert(Passenger::new(first_name, last_name))
    }

    /// Cancel a reservation by name. See [`FlightRegistry::remove`].
    pub fn cancel(&mut self, first_name: &str, last_name: &str) -> bool {
        self.remove(&Passenger::new(first_name, last_name))
    }

    /// Check for a reservation by name. See [`FlightRegistry::contains`].
    #[must_use]
    pub fn is_reserved(&self, first_name: &str, last_name: &str) -> bool {
        self.contains(&Passenger::new(first_name, last_name))
    }

    // Sorted, so the first equal entry sits at the partition point.
    fn position(&self, passenger: &Passenger) -> Option<usize> {
        let index = self.passengers.partition_point(|p| p < passenger);
        self.passengers
            .get(index)
            .filter(|p| *p == passenger)
            .map(|_| index)
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(capacity: usize) -> FlightRegistry {
        FlightRegistry::new(FlightNumber::new("AA100"), capacity)
    }

    fn names(registry: &FlightRegistry) -> Vec<String> {
        registry.iter().map(ToString::to_string).collect()
    }

    fn assert_sorted(registry: &FlightRegistry) {
        assert!(registry.list().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_flight_number_normalizes() {
        assert_eq!(FlightNumber::new(" aa100 ").as_str(), "AA100");
        assert_eq!(FlightNumber::new("aa100"), FlightNumber::from("AA100"));
        assert_eq!(FlightNumber::new("ba7").to_string(), "BA7");
    }

    #[test]
    fn test_new_registry_is_empty() {
        let r = registry(DEFAULT_CAPACITY);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.capacity(), 370);
        assert_eq!(r.available_seats(), 370);
        assert!(r.list().is_empty());
        assert_eq!(r.flight_number().as_str(), "AA100");
        assert_eq!(r.duplicate_policy(), DuplicatePolicy::Allow);
    }

    #[test]
    fn test_insert_sorts_by_last_name() {
        let mut r = registry(3);
        assert!(r.reserve("Alice", "Smith"));
        assert!(r.reserve("Bob", "Jones"));
        assert!(r.reserve("Carl", "Adams"));

        assert_eq!(names(&r), vec!["Adams, Carl", "Jones, Bob", "Smith, Alice"]);
    }

    #[test]
    fn test_insert_on_full_registry_fails() {
        let mut r = registry(3);
        r.reserve("Alice", "Smith");
        r.reserve("Bob", "Jones");
        r.reserve("Carl", "Adams");
        assert!(r.is_full());

        assert!(!r.reserve("Dana", "Lee"));
        assert_eq!(r.len(), 3);
        assert_eq!(names(&r), vec!["Adams, Carl", "Jones, Bob", "Smith, Alice"]);
        assert!(!r.is_reserved("Dana", "Lee"));
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut r = registry(0);
        assert!(r.is_full());
        assert!(!r.reserve("a", "b"));
        assert!(r.is_empty());
    }

    #[test]
    fn test_remove_then_contains() {
        let mut r = registry(3);
        r.reserve("Alice", "Smith");
        r.reserve("Bob", "Jones");
        r.reserve("Carl", "Adams");

        assert!(r.remove(&Passenger::new("Bob", "Jones")));
        assert!(!r.contains(&Passenger::new("bob", "jones")));
        assert_eq!(r.len(), 2);
        assert_eq!(names(&r), vec!["Adams, Carl", "Smith, Alice"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut r = registry(3);
        r.reserve("Alice", "Smith");

        assert!(!r.cancel("Nobody", "Here"));
        assert_eq!(r.len(), 1);
        assert!(!registry(3).cancel("a", "b"));
    }

    #[test]
    fn test_insert_then_contains_any_case() {
        let mut r = registry(5);
        assert!(r.reserve("john", "doe"));
        assert!(r.is_reserved("JOHN", "DOE"));
        assert!(r.contains(&Passenger::new("John", "Doe")));
        assert!(!r.is_reserved("Jane", "Doe"));
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        let mut r = registry(3);
        assert!(r.reserve("John", "Doe"));
        assert!(r.reserve("JOHN", "DOE"));
        assert_eq!(r.len(), 2);

        // Each cancel frees one seat.
        assert!(r.cancel("john", "doe"));
        assert!(r.is_reserved("john", "doe"));
        assert!(r.cancel("john", "doe"));
        assert!(!r.is_reserved("john", "doe"));
    }

    #[test]
    fn test_equal_entry_inserted_before_existing() {
        let mut r = registry(3);
        r.reserve("John", "Doe");
        r.reserve("JOHN", "DOE");
        assert_eq!(names(&r), vec!["DOE, JOHN", "Doe, John"]);
    }

    #[test]
    fn test_duplicates_rejected_when_configured() {
        let mut r = registry(3).with_duplicate_policy(DuplicatePolicy::Reject);
        assert!(r.reserve("John", "Doe"));
        assert!(!r.reserve("john", "DOE"));
        assert_eq!(r.len(), 1);
        assert!(r.reserve("Jane", "Doe"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_full_check_precedes_duplicate_check() {
        let mut r = registry(1).with_duplicate_policy(DuplicatePolicy::Reject);
        assert!(r.reserve("a", "b"));
        assert!(!r.reserve("a", "b"));
        assert!(r.is_full());
    }

    #[test]
    fn test_sorted_after_mixed_operations() {
        let mut r = registry(10);
        for (first, last) in [
            ("Zoe", "young"),
            ("amy", "Brown"),
            ("Max", "brown"),
            ("Ned", "Adams"),
            ("Eve", "Young"),
            ("", ""),
        ] {
            assert!(r.reserve(first, last));
            assert_sorted(&r);
        }

        assert!(r.cancel("max", "BROWN"));
        assert_sorted(&r);
        assert!(r.reserve("Max", "Carter"));
        assert_sorted(&r);

        assert_eq!(
            names(&r),
            vec![
                ", ",
                "Adams, Ned",
                "Brown, amy",
                "Carter, Max",
                "Young, Eve",
                "young, Zoe"
            ]
        );
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut r = registry(4);
        for i in 0..10 {
            let accepted = r.reserve(&format!("p{i}"), "Same");
            assert_eq!(accepted, i < 4);
            assert!(r.len() <= r.capacity());
        }
        assert_eq!(r.available_seats(), 0);
    }

    #[test]
    fn test_freed_seat_can_be_reused() {
        let mut r = registry(1);
        assert!(r.reserve("a", "b"));
        assert!(!r.reserve("c", "d"));
        assert!(r.cancel("A", "B"));
        assert!(r.reserve("c", "d"));
    }

    #[test]
    fn test_into_iterator() {
        let mut r = registry(3);
        r.reserve("b", "B");
        r.reserve("a", "A");
        let lasts: Vec<&str> = (&r).into_iter().map(Passenger::last_name).collect();
        assert_eq!(lasts, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_policy_serde() {
        let json = serde_json::to_string(&DuplicatePolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
    }
}
