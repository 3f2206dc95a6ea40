// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Errors raised by the AHB stimulus models.
//!
//! Every variant is fatal to the current sequence run: the failing
//! generator stops before emitting anything further and the error is
//! surfaced from [`Engine::run`](omnibus_engine::engine::Engine::run).

use std::error::Error;
use std::fmt;

use omnibus_engine::types::SimError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// A randomized field draw has no legal value under the requested
    /// predicate. Carries the name of the field being drawn.
    ConstraintUnsatisfiable(String),

    /// A burst code outside the 3-bit HBURST domain.
    InvalidBurstCode(u8),

    /// A degenerate beat count for a variable-length incrementing burst.
    InvalidBurstLength(u8),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProtocolError::ConstraintUnsatisfiable(field) => {
                write!(f, "no legal value for {field}")
            }
            ProtocolError::InvalidBurstCode(bits) => {
                write!(f, "burst code {bits:#05b} is outside the 3-bit domain")
            }
            ProtocolError::InvalidBurstLength(beats) => {
                write!(f, "incrementing burst of {beats} beats is degenerate")
            }
        }
    }
}

impl Error for ProtocolError {}

impl From<ProtocolError> for SimError {
    fn from(error: ProtocolError) -> Self {
        SimError(error.to_string())
    }
}
