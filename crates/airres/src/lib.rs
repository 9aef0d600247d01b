//! `airres` - Per-flight passenger reservation registry
//!
//! The core is a [`FlightDirectory`] of [`FlightRegistry`] values, each an
//! alphabetically ordered, capacity-bounded list of [`Passenger`]s. The
//! [`Session`] menu and the `airres` binary are a thin layer on top.
//!
//! ```
//! use airres::FlightDirectory;
//!
//! let mut flights = FlightDirectory::new(3);
//! let aa100 = flights.find_or_create("aa100");
//! assert!(aa100.reserve("Alice", "Smith"));
//! assert!(aa100.reserve("Carl", "Adams"));
//!
//! let aa100 = flights.find("AA100").unwrap();
//! assert!(aa100.is_reserved("ALICE", "SMITH"));
//! assert_eq!(aa100.list()[0].last_name(), "Adams");
//! assert!(flights.find("ZZ999").is_none());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod passenger;
pub mod registry;
pub mod session;

pub use config::Config;
pub use directory::FlightDirectory;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use passenger::Passenger;
pub use registry::{DuplicatePolicy, FlightNumber, FlightRegistry, DEFAULT_CAPACITY};
pub use session::{MenuChoice, Session};
