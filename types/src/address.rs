//! Caller address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BallotError;

/// An opaque caller identity, as supplied by the hosting environment.
///
/// The voting core never authenticates an address; it only compares them.
/// Any non-blank string is accepted, surrounding whitespace is trimmed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string is blank. Use [`Address::parse`] for untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match Self::parse(&raw) {
            Ok(address) => address,
            Err(_) => panic!("address must not be blank"),
        }
    }

    /// Parse an address, rejecting blank input.
    pub fn parse(raw: &str) -> Result<Self, BallotError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BallotError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = BallotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = BallotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}
