// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

use omnibus_engine::port::{InPort, OutPort};
use omnibus_engine::run_simulation;
use omnibus_engine::test_helpers::start_test;

#[test]
#[should_panic(expected = "top::tx not connected")]
fn disconnected_outport() {
    let mut engine = start_test(file!());

    let tx_port = OutPort::new(engine.top(), "tx");
    engine.spawn(async move {
        tx_port.put(1)?.await;
        Ok(())
    });
    run_simulation!(engine);
}

#[test]
#[should_panic(expected = "top::rx not connected")]
fn disconnected_input() {
    let mut engine = start_test(file!());

    let rx_port = InPort::new(engine.top(), "rx");
    engine.spawn(async move {
        let _: i32 = rx_port.get()?.await;
        Ok(())
    });
    run_simulation!(engine);
}

#[test]
#[should_panic(expected = "top::rx not connected")]
fn disconnected_input_start() {
    let mut engine = start_test(file!());

    let rx_port = InPort::new(engine.top(), "rx");
    engine.spawn(async move {
        let _: i32 = rx_port.start_get()?.await;
        rx_port.finish_get();
        Ok(())
    });
    run_simulation!(engine);
}

/// An `InPort` only hands out its state once.
#[test]
fn connect_twice_rejected() {
    let engine = start_test(file!());

    let mut tx_port1 = OutPort::new(engine.top(), "tx1");
    let mut tx_port2 = OutPort::new(engine.top(), "tx2");
    let rx_port: InPort<i32> = InPort::new(engine.top(), "rx");

    tx_port1.connect(rx_port.state()).unwrap();
    assert!(tx_port2.connect(rx_port.state()).is_err());
}

/// The error from a failing task is reported out of the simulation.
#[test]
fn simulation_error_reported() {
    let mut engine = start_test(file!());

    let tx_port = OutPort::new(engine.top(), "tx");
    engine.spawn(async move {
        tx_port.put(1)?.await;
        Ok(())
    });
    run_simulation!(engine, "Error: top::tx not connected");
}
