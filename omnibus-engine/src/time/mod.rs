// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Simulation time.
//!
//! Time is owned by the [`SimTime`](simtime::SimTime) held inside the
//! executor and is advanced through the [clocks](clock) that components
//! request from the engine.

pub mod clock;
pub mod simtime;
