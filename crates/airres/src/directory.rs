//! Flight directory.
//!
//! Maps normalized flight numbers to their [`FlightRegistry`]. Registries are
//! created lazily by [`FlightDirectory::find_or_create`] and then live as long
//! as the directory does.

use std::collections::BTreeMap;

use tracing::debug;

use crate::registry::{DuplicatePolicy, FlightNumber, FlightRegistry, DEFAULT_CAPACITY};

/// All flights known to one session.
///
/// Holds at most one registry per normalized flight number. New registries
/// inherit the directory's capacity and duplicate policy.
#[derive(Debug, Clone)]
pub struct FlightDirectory {
    registries: BTreeMap<FlightNumber, FlightRegistry>,
    capacity: usize,
    duplicates: DuplicatePolicy,
}

impl Default for FlightDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl FlightDirectory {
    /// Create an empty directory whose flights seat `capacity` passengers.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            registries: BTreeMap::new(),
            capacity,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Set the duplicate policy applied to flights created from now on.
    #[must_use]
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Capacity given to new flights.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the registry for `flight`, creating an empty one if needed.
    pub fn find_or_create(&mut self, flight: &str) -> &mut FlightRegistry {
        let key = FlightNumber::new(flight);
        let (capacity, duplicates) = (self.capacity, self.duplicates);
        self.registries.entry(key).or_insert_with_key(|key| {
            debug!(flight = %key, capacity, "opening flight");
            FlightRegistry::new(key.clone(), capacity).with_duplicate_policy(duplicates)
        })
    }

    /// Look up the registry for `flight` without creating one.
    #[must_use]
    pub fn find(&self, flight: &str) -> Option<&FlightRegistry> {
        self.registries.get(&FlightNumber::new(flight))
    }

    /// Mutable lookup without creating.
    pub fn find_mut(&mut self, flight: &str) -> Option<&mut FlightRegistry> {
        self.registries.get_mut(&FlightNumber::new(flight))
    }

    /// Number of flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    /// Whether no flight has been opened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    /// Known flight numbers in ascending order.
    pub fn flight_numbers(&self) -> impl Iterator<Item = &FlightNumber> {
        self.registries.keys()
    }
}
