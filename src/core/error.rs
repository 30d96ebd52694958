//! Error taxonomy for the card load flow
//!
//! Nothing here is retried: every variant is terminal for the current run
//! and surfaces through the loader's result so callers can render it.

use std::fmt;

/// Errors that can occur while loading a profile card
#[derive(Debug)]
pub enum CardError {
    /// The date captured for the card was empty when the minimum-delay
    /// timer resolved. Carries the original fixed message.
    EmptyDate,
    /// The request could not be sent or the connection failed
    Http(reqwest::Error),
    /// The endpoint answered with a non-success status
    Status(u16),
    /// The response body was not a valid profile document
    Parse(reqwest::Error),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::EmptyDate => {
                write!(f, "Error, please enter correct address")
            }
            CardError::Http(err) => {
                write!(f, "Request failed: {}", err)
            }
            CardError::Status(code) => {
                write!(f, "Profile endpoint returned status {}", code)
            }
            CardError::Parse(err) => {
                write!(f, "Invalid profile response: {}", err)
            }
        }
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CardError::Http(err) | CardError::Parse(err) => Some(err),
            _ => None,
        }
    }
}
