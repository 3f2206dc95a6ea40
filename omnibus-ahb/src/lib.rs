// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

#![doc(test(attr(warn(unused))))]

//! AMBA-AHB bus stimulus models.
//!
//! This library generates protocol-compliant AHB transfer streams for the
//! OMNIBUS [engine](omnibus_engine::engine). The building blocks are:
//!
//!  - [`transfer`]: the [`Transfer`](transfer::Transfer) descriptor and
//!    the HTRANS/HSIZE/HBURST field encodings.
//!  - [`burst`]: the burst-type table mapping a code to its
//!    [`BurstDescriptor`](burst::BurstDescriptor).
//!  - [`address`]: incrementing and wrapping beat address arithmetic.
//!  - [`constraint`]: the seeded [`FieldDraw`](constraint::FieldDraw)
//!    constraint source for randomized fields.
//!  - [`sequence`]: the [`SingleSequence`](sequence::SingleSequence) and
//!    [`BurstSequence`](sequence::BurstSequence) generator components.
//!  - [`driver`]: the [`BusDriver`](driver::BusDriver) consumer that
//!    accepts one transfer per HCLK tick.
//!
//! Generators hand transfers to the driver over the engine's one-deep
//! rendezvous ports, so exactly one transfer is in flight at a time and
//! burst ordering is a structural guarantee. A generator never emits an
//! illegal transaction: failures ([`ProtocolError`](error::ProtocolError))
//! abort the run before anything further is emitted.

pub mod address;
pub mod burst;
pub mod connect;
pub mod constraint;
pub mod driver;
pub mod error;
pub mod sequence;
pub mod transfer;
