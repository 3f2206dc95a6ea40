// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Stimulus sequence generators.
//!
//! Each generator is a registered [`Runnable`](omnibus_engine::traits::Runnable)
//! component with one `tx` output port. A generator produces exactly one
//! [`Transfer`](crate::transfer::Transfer) at a time and suspends until
//! the consumer has accepted it, then closes its run with a single idle
//! transfer.

pub mod burst;
pub mod single;

pub use burst::BurstSequence;
pub use single::SingleSequence;
