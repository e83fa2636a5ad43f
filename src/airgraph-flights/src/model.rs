//! Vertex and edge payloads for the flight network.

use std::fmt;

/// An airport, identified for display purposes by its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    code: String,
}

impl Airport {
    /// Create an airport with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The airport code, e.g. `LAX`.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// A scheduled flight between two airports.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    code: String,
    distance: f64,
}

impl Flight {
    /// Create a flight with a code and a distance.
    pub fn new(code: impl Into<String>, distance: f64) -> Self {
        Self {
            code: code.into(),
            distance,
        }
    }

    /// The flight code, e.g. `F1 UN3563`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Distance between the two airports.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.distance)
    }
}
