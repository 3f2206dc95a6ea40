// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! A set of common traits used across the OMNIBUS engine.

use core::mem::size_of;
use std::fmt::{Debug, Display};

use async_trait::async_trait;
use omnibus_track::id::Unique;

use crate::sim_error;
use crate::types::{AccessType, SimError, SimResult};

/// The `TotalBytes` trait is used to determine how many bytes an object
/// represents
///
/// This trait is used to determine how much time an object will take to be
/// sent.
pub trait TotalBytes {
    fn total_bytes(&self) -> usize;
}

/// The `Routable` trait provides an interface to an object to enable it to be
/// routed
pub trait Routable {
    fn dest(&self) -> Result<u64, SimError>;
    fn req_type(&self) -> Result<AccessType, SimError>;
}

/// A super-trait that objects that are passed around the simulation have to
/// implement
///
///  - Clone:       It would be nice to use `Copy` instead, but given that
///    things like `Vec` are not `Copy` we have to use `Clone` instead to allow
///    the application to keep copies of objects sent around.
///  - Debug:       In order to print "{:?}" objects have to at least implement
///    Debug.
///  - Display:     Objects are named in trace output.
///  - Unique:      Every object has an [`Id`](omnibus_track::id::Id) so that it
///    can be followed through the simulation.
///  - Routable:    Allows routing.
///  - TotalBytes:  Allows rate limiting.
///  - 'static:     Due to the way that futures are implemented, the lifetimes
///    need to be `static. This means that objects may have to be placed in
///    `Box` to make them static.
pub trait SimObject: Clone + Debug + Display + Unique + Routable + TotalBytes + 'static {}

/// The `Runnable` trait is implemented by all components so that the engine
/// can spawn their `run()` functions when the simulation starts.
#[async_trait(?Send)]
pub trait Runnable {
    async fn run(&self) -> SimResult;
}

// Implementations for basic types that can be sent around the simulation for
// testing

// i32
impl TotalBytes for i32 {
    fn total_bytes(&self) -> usize {
        size_of::<i32>()
    }
}

impl Routable for i32 {
    fn dest(&self) -> Result<u64, SimError> {
        Ok(*self as u64)
    }
    fn req_type(&self) -> Result<AccessType, SimError> {
        match self {
            0 => Ok(AccessType::Read),
            1 => Ok(AccessType::Write),
            2 => Ok(AccessType::Control),
            _ => sim_error!(format!("no access type for {self}")),
        }
    }
}

impl SimObject for i32 {}

// usize
impl TotalBytes for usize {
    fn total_bytes(&self) -> usize {
        size_of::<usize>()
    }
}

impl Routable for usize {
    fn dest(&self) -> Result<u64, SimError> {
        Ok(*self as u64)
    }
    fn req_type(&self) -> Result<AccessType, SimError> {
        match self {
            0 => Ok(AccessType::Read),
            1 => Ok(AccessType::Write),
            2 => Ok(AccessType::Control),
            _ => sim_error!(format!("no access type for {self}")),
        }
    }
}

impl SimObject for usize {}
