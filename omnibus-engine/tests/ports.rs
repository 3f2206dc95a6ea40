// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

use futures::select;
use omnibus_engine::port::{InPort, OutPort};
use omnibus_engine::run_simulation;
use omnibus_engine::test_helpers::start_test;

#[test]
fn put_get_synced() {
    let mut engine = start_test(file!());

    let mut tx_port = OutPort::new(engine.top(), "tx");
    let rx_port = InPort::new(engine.top(), "rx");

    tx_port.connect(rx_port.state()).unwrap();

    {
        let clock = engine.default_clock();
        engine.spawn(async move {
            // Do put before any gets happen
            tx_port.put(1)?.await;

            // The `put()` should not have completed until the matching `get()` happens
            assert!(clock.time_now_ns() == 1.0);

            tx_port.put(2)?.await;
            Ok(())
        });
    }

    {
        let clock = engine.default_clock();
        engine.spawn(async move {
            clock.wait_ticks(1).await;
            let i = rx_port.get()?.await;
            assert_eq!(i, 1);
            let i = rx_port.get()?.await;
            assert_eq!(i, 2);

            // Time should not change for any other reason than the `wait_ticks()`
            assert!(clock.time_now_ns() == 1.0);

            Ok(())
        });
    }

    run_simulation!(engine);

    assert_eq!(engine.time_now_ns(), 1.0);
}

/// A `put()` must be held until the matching `finish_get()`, not just until the
/// `start_get()` that accepted the value.
#[test]
fn start_get_holds_producer() {
    let mut engine = start_test(file!());

    let mut tx_port = OutPort::new(engine.top(), "tx");
    let rx_port = InPort::new(engine.top(), "rx");

    tx_port.connect(rx_port.state()).unwrap();

    {
        let clock = engine.default_clock();
        engine.spawn(async move {
            tx_port.put(1)?.await;
            assert_eq!(clock.time_now_ns(), 2.0);

            tx_port.put(2)?.await;
            assert_eq!(clock.time_now_ns(), 4.0);
            Ok(())
        });
    }

    {
        let clock = engine.default_clock();
        engine.spawn(async move {
            for expected in 1..=2 {
                let i = rx_port.start_get()?.await;
                assert_eq!(i, expected);

                // Model two ticks of processing before releasing the producer
                clock.wait_ticks(2).await;
                rx_port.finish_get();
            }
            Ok(())
        });
    }

    run_simulation!(engine);

    assert_eq!(engine.time_now_ns(), 4.0);
}

#[test]
fn select_on_ports() {
    let mut engine = start_test(file!());

    let mut tx_port1 = OutPort::new(engine.top(), "tx1");
    let rx_port1 = InPort::new(engine.top(), "rx1");
    tx_port1.connect(rx_port1.state()).unwrap();

    let mut tx_port2 = OutPort::new(engine.top(), "tx2");
    let rx_port2 = InPort::new(engine.top(), "rx2");
    tx_port2.connect(rx_port2.state()).unwrap();

    engine.spawn(async move {
        tx_port1.put(1)?.await;
        Ok(())
    });
    engine.spawn(async move {
        tx_port2.put(2)?.await;
        Ok(())
    });

    engine.spawn(async move {
        let mut rx1 = rx_port1.get()?;
        let mut rx2 = rx_port2.get()?;

        let mut received = Vec::new();
        while received.len() < 2 {
            let i = select! {
                a = rx1 => {
                    rx1 = rx_port1.get()?;
                    a
                }
                b = rx2 => {
                    rx2 = rx_port2.get()?;
                    b
                }
            };
            received.push(i);
        }

        received.sort();
        // Both values should be received, in either order
        assert_eq!(received, [1, 2]);
        Ok(())
    });

    run_simulation!(engine);
}
