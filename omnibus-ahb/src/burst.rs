// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! The burst-type table.
//!
//! Maps a [`BurstCode`] to the shape of the burst it selects. The plain
//! `Incr` code has no table-fixed length; its beat count is supplied by
//! the caller and validated here.

use std::fmt;

use crate::error::ProtocolError;
use crate::transfer::BurstCode;

/// The shape of a burst: how many beats and whether the address wraps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BurstDescriptor {
    pub beats: u8,
    pub wraps: bool,
}

impl fmt::Display for BurstDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} beats {}",
            self.beats,
            if self.wraps { "wrapping" } else { "incrementing" }
        )
    }
}

impl BurstCode {
    /// The table-fixed burst shape, or `None` for the variable-length
    /// `Incr` code.
    #[must_use]
    pub fn descriptor(self) -> Option<BurstDescriptor> {
        let (beats, wraps) = match self {
            BurstCode::Single => (1, false),
            BurstCode::Incr => return None,
            BurstCode::Wrap4 => (4, true),
            BurstCode::Incr4 => (4, false),
            BurstCode::Wrap8 => (8, true),
            BurstCode::Incr8 => (8, false),
            BurstCode::Wrap16 => (16, true),
            BurstCode::Incr16 => (16, false),
        };
        Some(BurstDescriptor { beats, wraps })
    }
}

/// Resolve a burst code to its descriptor.
///
/// `incr_beats` is only consulted for the plain `Incr` code; every other
/// code takes its beat count from the table. An incrementing burst of 0
/// or 1 beats is degenerate and rejected.
pub fn resolve_burst(code: BurstCode, incr_beats: u8) -> Result<BurstDescriptor, ProtocolError> {
    match code.descriptor() {
        Some(descriptor) => Ok(descriptor),
        None => {
            if incr_beats < 2 {
                Err(ProtocolError::InvalidBurstLength(incr_beats))
            } else {
                Ok(BurstDescriptor {
                    beats: incr_beats,
                    wraps: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_and_deterministic() {
        let expected = [
            (BurstCode::Single, Some((1, false))),
            (BurstCode::Incr, None),
            (BurstCode::Wrap4, Some((4, true))),
            (BurstCode::Incr4, Some((4, false))),
            (BurstCode::Wrap8, Some((8, true))),
            (BurstCode::Incr8, Some((8, false))),
            (BurstCode::Wrap16, Some((16, true))),
            (BurstCode::Incr16, Some((16, false))),
        ];
        for (code, shape) in expected {
            let descriptor = shape.map(|(beats, wraps)| BurstDescriptor { beats, wraps });
            assert_eq!(code.descriptor(), descriptor);
            // A second lookup always agrees with the first
            assert_eq!(code.descriptor(), descriptor);
        }
    }

    #[test]
    fn incr_length_comes_from_caller() {
        let descriptor = resolve_burst(BurstCode::Incr, 6).unwrap();
        assert_eq!(
            descriptor,
            BurstDescriptor {
                beats: 6,
                wraps: false
            }
        );

        // Fixed-length codes ignore the caller's length
        let descriptor = resolve_burst(BurstCode::Wrap8, 6).unwrap();
        assert_eq!(descriptor.beats, 8);
        assert!(descriptor.wraps);
    }

    #[test]
    fn degenerate_incr_length_rejected() {
        for beats in [0, 1] {
            assert_eq!(
                resolve_burst(BurstCode::Incr, beats),
                Err(ProtocolError::InvalidBurstLength(beats))
            );
        }
    }
}
