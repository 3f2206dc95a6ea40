// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Beat-to-beat address arithmetic.
//!
//! Non-wrapping bursts simply step by the transfer size. Wrapping bursts
//! cycle within an aligned window of `beats * size.bytes()` bytes: the
//! low bits that index within the window increment modulo the window
//! size while the window base is left untouched.

use crate::burst::BurstDescriptor;
use crate::transfer::TransferSize;

/// Compute the next beat's address.
///
/// All arithmetic is unsigned modulo the 32-bit address width. The wrap
/// mask is derived from the descriptor's beat count, so the wrapping
/// field is always exactly `log2(beats) + size` bits wide.
#[must_use]
pub fn next_address(current: u32, size: TransferSize, burst: &BurstDescriptor) -> u32 {
    let step = size.bytes() as u32;
    if burst.wraps {
        let mask = (burst.beats as u32 * step) - 1;
        (current & !mask) | (current.wrapping_add(step) & mask)
    } else {
        current.wrapping_add(step)
    }
}

/// Per-burst address cursor.
///
/// Owns the progression state for one burst so that a generator never
/// shares cursor state between bursts.
pub struct AddressCursor {
    addr: u32,
    size: TransferSize,
    burst: BurstDescriptor,
}

impl AddressCursor {
    #[must_use]
    pub fn new(lead_addr: u32, size: TransferSize, burst: BurstDescriptor) -> Self {
        Self {
            addr: lead_addr,
            size,
            burst,
        }
    }

    /// Step to the next beat and return its address.
    pub fn advance(&mut self) -> u32 {
        self.addr = next_address(self.addr, self.size, &self.burst);
        self.addr
    }

    #[must_use]
    pub fn addr(&self) -> u32 {
        self.addr
    }
}
