// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! The AHB transfer descriptor and its field encodings.
//!
//! A [`Transfer`] describes one beat on the bus. The field encodings
//! follow the AHB signal values so that a descriptor can be driven onto
//! HADDR/HWRITE/HSIZE/HTRANS/HBURST without translation.

use std::fmt;
use std::rc::Rc;

use omnibus_engine::traits::{Routable, SimObject, TotalBytes};
use omnibus_engine::types::{AccessType, SimError};
use omnibus_track::entity::Entity;
use omnibus_track::id::Unique;
use omnibus_track::{Id, create, create_id};

use crate::error::ProtocolError;

/// HTRANS transfer type encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransferType {
    #[default]
    Idle = 0b00,
    Busy = 0b01,
    NonSeq = 0b10,
    Seq = 0b11,
}

impl TransferType {
    /// All defined HTRANS values.
    pub const ALL: [TransferType; 4] = [
        TransferType::Idle,
        TransferType::Busy,
        TransferType::NonSeq,
        TransferType::Seq,
    ];

    #[must_use]
    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransferType::Idle => write!(f, "Idle"),
            TransferType::Busy => write!(f, "Busy"),
            TransferType::NonSeq => write!(f, "NonSeq"),
            TransferType::Seq => write!(f, "Seq"),
        }
    }
}

/// HSIZE transfer size encoding, bounded by a 64-bit data bus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransferSize {
    #[default]
    Byte = 0,
    HalfWord = 1,
    Word = 2,
    DoubleWord = 3,
}

impl TransferSize {
    /// All sizes legal on the bus.
    pub const ALL: [TransferSize; 4] = [
        TransferSize::Byte,
        TransferSize::HalfWord,
        TransferSize::Word,
        TransferSize::DoubleWord,
    ];

    #[must_use]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// The number of bytes moved by one beat of this size.
    #[must_use]
    pub fn bytes(self) -> usize {
        1 << (self as u8)
    }
}

impl fmt::Display for TransferSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}B", self.bytes())
    }
}

/// HBURST burst code encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BurstCode {
    #[default]
    Single = 0b000,
    Incr = 0b001,
    Wrap4 = 0b010,
    Incr4 = 0b011,
    Wrap8 = 0b100,
    Incr8 = 0b101,
    Wrap16 = 0b110,
    Incr16 = 0b111,
}

impl BurstCode {
    /// All defined HBURST values.
    pub const ALL: [BurstCode; 8] = [
        BurstCode::Single,
        BurstCode::Incr,
        BurstCode::Wrap4,
        BurstCode::Incr4,
        BurstCode::Wrap8,
        BurstCode::Incr8,
        BurstCode::Wrap16,
        BurstCode::Incr16,
    ];

    #[must_use]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a 3-bit HBURST value.
    pub fn from_bits(bits: u8) -> Result<Self, ProtocolError> {
        match bits {
            0b000 => Ok(BurstCode::Single),
            0b001 => Ok(BurstCode::Incr),
            0b010 => Ok(BurstCode::Wrap4),
            0b011 => Ok(BurstCode::Incr4),
            0b100 => Ok(BurstCode::Wrap8),
            0b101 => Ok(BurstCode::Incr8),
            0b110 => Ok(BurstCode::Wrap16),
            0b111 => Ok(BurstCode::Incr16),
            _ => Err(ProtocolError::InvalidBurstCode(bits)),
        }
    }
}

impl fmt::Display for BurstCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BurstCode::Single => write!(f, "Single"),
            BurstCode::Incr => write!(f, "Incr"),
            BurstCode::Wrap4 => write!(f, "Wrap4"),
            BurstCode::Incr4 => write!(f, "Incr4"),
            BurstCode::Wrap8 => write!(f, "Wrap8"),
            BurstCode::Incr8 => write!(f, "Incr8"),
            BurstCode::Wrap16 => write!(f, "Wrap16"),
            BurstCode::Incr16 => write!(f, "Incr16"),
        }
    }
}

/// One bus beat.
#[derive(Clone, Debug)]
pub struct Transfer {
    created_by: Rc<Entity>,
    id: Id,

    pub addr: u32,
    pub write: bool,
    pub size: TransferSize,
    pub trans: TransferType,
    pub burst: BurstCode,

    /// 0-based ordinal within the current burst.
    pub beat: u8,
}

impl Transfer {
    /// Allocate a fresh idle descriptor.
    ///
    /// The creating entity is recorded so that the transfer can be
    /// followed through the simulation by its [`Id`].
    #[must_use]
    pub fn new(created_by: &Rc<Entity>) -> Self {
        let transfer = Self {
            created_by: created_by.clone(),
            id: create_id!(created_by),
            addr: 0,
            write: false,
            size: TransferSize::Byte,
            trans: TransferType::Idle,
            burst: BurstCode::Single,
            beat: 0,
        };
        create!(created_by ; transfer, transfer.total_bytes(), transfer.trans.bits() as i8);
        transfer
    }

    pub fn addr(mut self, addr: u32) -> Self {
        self.addr = addr;
        self
    }

    pub fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    pub fn size(mut self, size: TransferSize) -> Self {
        self.size = size;
        self
    }

    pub fn trans(mut self, trans: TransferType) -> Self {
        self.trans = trans;
        self
    }

    pub fn burst(mut self, burst: BurstCode) -> Self {
        self.burst = burst;
        self
    }

    pub fn beat(mut self, beat: u8) -> Self {
        self.beat = beat;
        self
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} beat {} {}@{:#010x}",
            self.trans,
            self.burst,
            if self.write { "write" } else { "read" },
            self.beat,
            self.size,
            self.addr
        )
    }
}

impl TotalBytes for Transfer {
    fn total_bytes(&self) -> usize {
        match self.trans {
            // No data moves on idle or busy cycles
            TransferType::Idle | TransferType::Busy => 0,
            TransferType::NonSeq | TransferType::Seq => self.size.bytes(),
        }
    }
}

impl Unique for Transfer {
    fn id(&self) -> Id {
        self.id
    }
}

impl Routable for Transfer {
    fn dest(&self) -> Result<u64, SimError> {
        Ok(self.addr as u64)
    }

    fn req_type(&self) -> Result<AccessType, SimError> {
        match self.trans {
            TransferType::Idle | TransferType::Busy => Ok(AccessType::Control),
            TransferType::NonSeq | TransferType::Seq => {
                if self.write {
                    Ok(AccessType::Write)
                } else {
                    Ok(AccessType::Read)
                }
            }
        }
    }
}

impl SimObject for Transfer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_code_round_trip() {
        for code in BurstCode::ALL {
            assert_eq!(BurstCode::from_bits(code.bits()).unwrap(), code);
        }
    }

    #[test]
    fn burst_code_out_of_domain() {
        for bits in 8..=u8::MAX {
            assert_eq!(
                BurstCode::from_bits(bits),
                Err(ProtocolError::InvalidBurstCode(bits))
            );
        }
    }

    #[test]
    fn size_bytes() {
        assert_eq!(TransferSize::Byte.bytes(), 1);
        assert_eq!(TransferSize::HalfWord.bytes(), 2);
        assert_eq!(TransferSize::Word.bytes(), 4);
        assert_eq!(TransferSize::DoubleWord.bytes(), 8);
    }
}
