use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TopologyError;

/// The six supported lattice families.
///
/// A family tag fully determines the unit-cell generation rule; it carries
/// no state of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LatticeFamily {
    SimpleCubic,
    Bcc,
    Fcc,
    Octet,
    Kelvin,
    Diamond,
}

impl LatticeFamily {
    /// All families, in canonical order.
    pub const ALL: [LatticeFamily; 6] = [
        LatticeFamily::SimpleCubic,
        LatticeFamily::Bcc,
        LatticeFamily::Fcc,
        LatticeFamily::Octet,
        LatticeFamily::Kelvin,
        LatticeFamily::Diamond,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            LatticeFamily::SimpleCubic => "simple-cubic",
            LatticeFamily::Bcc => "bcc",
            LatticeFamily::Fcc => "fcc",
            LatticeFamily::Octet => "octet",
            LatticeFamily::Kelvin => "kelvin",
            LatticeFamily::Diamond => "diamond",
        }
    }
}

impl fmt::Display for LatticeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatticeFamily {
    type Err = TopologyError;

    /// Parse a family tag, case-insensitively. This is the one place an
    /// unknown family can be requested; everything downstream takes the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple-cubic" | "simple_cubic" | "simplecubic" | "sc" => {
                Ok(LatticeFamily::SimpleCubic)
            }
            "bcc" | "body-centered-cubic" => Ok(LatticeFamily::Bcc),
            "fcc" | "face-centered-cubic" => Ok(LatticeFamily::Fcc),
            "octet" => Ok(LatticeFamily::Octet),
            "kelvin" => Ok(LatticeFamily::Kelvin),
            "diamond" => Ok(LatticeFamily::Diamond),
            _ => Err(TopologyError::UnknownFamily(s.to_string())),
        }
    }
}
