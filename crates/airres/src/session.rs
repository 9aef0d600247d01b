//! Interactive reservation menu.
//!
//! A [`Session`] owns one [`FlightDirectory`] for its whole lifetime and
//! drives it from line-oriented input. It is generic over its reader and
//! writer so the same loop serves the terminal and scripted tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use regex::Regex;
use tracing::{debug, info};

use crate::config::Config;
use crate::directory::FlightDirectory;
use crate::error::{Error, Result};
use crate::passenger::Passenger;
use crate::registry::FlightNumber;

const MENU: &str = "\
Menu:
1. Reserve a ticket
2. Cancel a reservation
3. Check reservation
4. Display passengers
5. Exit";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Reserve a seat, opening the flight if needed.
    Reserve,
    /// Cancel an existing reservation.
    Cancel,
    /// Check whether a reservation exists.
    Check,
    /// List a flight's passengers.
    Display,
    /// Leave the menu.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Reserve),
            "2" => Ok(Self::Cancel),
            "3" => Ok(Self::Check),
            "4" => Ok(Self::Display),
            "5" => Ok(Self::Exit),
            other => Err(Error::invalid_choice(other)),
        }
    }
}

/// A menu-driven reservation session.
#[derive(Debug)]
pub struct Session<R, W> {
    directory: FlightDirectory,
    flight_pattern: Option<Regex>,
    show_banner: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty directory built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured flight number pattern is invalid.
    pub fn new(config: &Config, input: R, output: W) -> Result<Self> {
        Ok(Self {
            directory: config.directory(),
            flight_pattern: config.flight_number_regex()?,
            show_banner: config.session.show_banner,
            input,
            output,
        })
    }

    /// The flights opened so far.
    #[must_use]
    pub fn directory(&self) -> &FlightDirectory {
        &self.directory
    }

    /// Consume the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.say("Welcome to the Airline Reservation System\n")?;
        }

        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_input_closed() => {
                    debug!("input closed, leaving menu");
                    self.say("")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!(flights = self.directory.len(), "session finished");
        Ok(())
    }

    /// Show the menu and handle one selection. Returns `false` on exit.
    fn step(&mut self) -> Result<bool> {
        self.say(MENU)?;
        let raw = self.prompt("Choose an option: ")?;

        let choice = match raw.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!("{e}");
                self.say("Invalid option. Try again.\n")?;
                return Ok(true);
            }
        };
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::Reserve => self.reserve()?,
            MenuChoice::Cancel => self.cancel()?,
            MenuChoice::Check => self.check()?,
            MenuChoice::Display => self.display()?,
            MenuChoice::Exit => {
                self.say("Exiting program.")?;
                return Ok(false);
            }
        }
        self.say("")?;
        Ok(true)
    }

    fn reserve(&mut self) -> Result<()> {
        let Some(flight) = self.read_flight("Enter flight number: ")? else {
            return Ok(());
        };
        let passenger = self.read_passenger()?;

        // The flight is opened even when the reservation is refused.
        let registry = self.directory.find_or_create(flight.as_str());
        let message = if registry.insert(passenger.clone()) {
            format!("Reservation successful for {passenger}")
        } else if registry.is_full() {
            "Sorry, this flight is full".to_string()
        } else {
            format!("{passenger} already holds a reservation on flight {flight}")
        };
        self.say(message)
    }

    fn cancel(&mut self) -> Result<()> {
        let Some(flight) = self.read_flight("Enter flight number: ")? else {
            return Ok(());
        };
        let passenger = self.read_passenger()?;

        let message = match self.directory.find_mut(flight.as_str()) {
            None => "Flight not found".to_string(),
            Some(registry) => {
                if registry.remove(&passenger) {
                    format!("Reservation cancelled for {passenger}")
                } else {
                    "No reservation found under that name".to_string()
                }
            }
        };
        self.say(message)
    }

    fn check(&mut self) -> Result<()> {
        let Some(flight) = self.read_flight("Enter flight number: ")? else {
            return Ok(());
        };
        let passenger = self.read_passenger()?;

        let reserved = self
            .directory
            .find(flight.as_str())
            .is_some_and(|registry| registry.contains(&passenger));
        if reserved {
            self.say(format!("Reservation exists for {passenger}"))
        } else {
            self.say("No reservation found")
        }
    }

    fn display(&mut self) -> Result<()> {
        let Some(flight) = self.read_flight("Enter flight number to display passengers: ")?
        else {
            return Ok(());
        };

        let Some(registry) = self.directory.find(flight.as_str()) else {
            return self.say("Flight not found");
        };

        if registry.is_empty() {
            writeln!(self.output, "No passengers on flight {flight}")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Passengers on flight {} ({}/{}):",
            flight,
            registry.len(),
            registry.capacity()
        )?;
        for passenger in registry {
            writeln!(self.output, "- {passenger}")?;
        }
        Ok(())
    }

    /// Read a flight number, rejecting it if it fails the configured pattern.
    fn read_flight(&mut self, label: &str) -> Result<Option<FlightNumber>> {
        let flight = FlightNumber::new(&self.prompt(label)?);

        if let Some(pattern) = &self.flight_pattern {
            if !pattern.is_match(flight.as_str()) {
                let err = Error::InvalidFlightNumber {
                    flight: flight.to_string(),
                    pattern: pattern.as_str().to_string(),
                };
                debug!("{err}");
                self.say(err)?;
                return Ok(None);
            }
        }
        Ok(Some(flight))
    }

    fn read_passenger(&mut self) -> Result<Passenger> {
        let first_name = self.prompt("Enter first name: ")?;
        let last_name = self.prompt("Enter last name: ")?;
        Ok(Passenger::new(first_name, last_name))
    }

    /// Print `label`, then read one trimmed line.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
