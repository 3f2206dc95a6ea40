// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use omnibus_engine::run_simulation;
use omnibus_engine::test_helpers::start_test;
use omnibus_engine::time::clock::Clock;
use omnibus_engine::traits::Runnable;
use omnibus_engine::types::{Component, SimResult};

struct Counter {
    ticks: u64,
    clock: Clock,
    count: RefCell<u64>,
}

#[async_trait(?Send)]
impl Runnable for Counter {
    async fn run(&self) -> SimResult {
        for _ in 0..self.ticks {
            self.clock.wait_ticks(1).await;
            *self.count.borrow_mut() += 1;
        }
        Ok(())
    }
}

/// Components handed to the engine must all be spawned when the simulation
/// starts.
#[test]
fn registered_components_spawned() {
    let mut engine = start_test(file!());

    let fast = Rc::new(Counter {
        ticks: 4,
        clock: engine.default_clock(),
        count: RefCell::new(0),
    });
    let slow = Rc::new(Counter {
        ticks: 2,
        clock: engine.clock_mhz(500.0),
        count: RefCell::new(0),
    });
    engine.register(fast.clone() as Component);
    engine.register(slow.clone() as Component);

    run_simulation!(engine);

    assert_eq!(*fast.count.borrow(), 4);
    assert_eq!(*slow.count.borrow(), 2);

    // The 500MHz counter finishes last, after 2 ticks of 2ns
    assert_eq!(engine.time_now_ns(), 4.0);
}

/// A simulation with nothing registered or spawned finishes at time zero.
#[test]
fn empty_simulation_finishes() {
    let mut engine = start_test(file!());
    run_simulation!(engine);
    assert_eq!(engine.time_now_ns(), 0.0);
}
