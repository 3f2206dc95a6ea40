// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

#![doc(test(attr(warn(unused))))]

//! `OMNIBUS` engine
//!
//! This library provides the core of the OMNIBUS [engine](crate::engine) which
//! executes event driven asynchronous simulation components, such as the bus
//! stimulus models in `omnibus-ahb`.
//!
//! Components implement [`Runnable`](crate::traits::Runnable) and are
//! registered with the [`Engine`](crate::engine::Engine) which spawns their
//! `run()` functions when the simulation starts. Objects move between
//! components through one-deep rendezvous [ports](crate::port) and time is
//! modelled with [clocks](crate::time::clock) requested from the engine.
//!
//! # Simple Application
//!
//! A very simple application would look like:
//!
//! ```rust
//! use omnibus_engine::engine::Engine;
//! use omnibus_engine::port::{InPort, OutPort};
//! use omnibus_engine::run_simulation;
//!
//! let mut engine = Engine::default();
//! let top = engine.top().clone();
//!
//! let in_port: InPort<i32> = InPort::new(&top, "rx");
//! let mut out_port: OutPort<i32> = OutPort::new(&top, "tx");
//! out_port.connect(in_port.state()).unwrap();
//!
//! engine.spawn(async move {
//!     out_port.put(7)?.await;
//!     Ok(())
//! });
//! engine.spawn(async move {
//!     let value = in_port.get()?.await;
//!     assert_eq!(value, 7);
//!     Ok(())
//! });
//! run_simulation!(engine);
//! ```
//!
//! Simulations can be run as purely event driven (where one event triggers one
//! or more others) or the use of clocks can be introduced to model time. The
//! combination of both is the most common.

pub mod engine;
pub mod executor;
pub mod port;
pub mod test_helpers;
pub mod time;
pub mod traits;
pub mod types;

#[macro_export]
/// Spawn all component run() functions and then run the simulation.
macro_rules! run_simulation {
    ($engine:ident) => {
        $engine.run().unwrap();
    };
    ($engine:ident, $expect:expr) => {
        match $engine.run() {
            Ok(()) => panic!("Expected an error!"),
            Err(e) => assert_eq!(format!("{e}").as_str(), $expect),
        }
    };
}
