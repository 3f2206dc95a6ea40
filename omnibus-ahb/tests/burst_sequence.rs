// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

use std::collections::HashSet;

use omnibus_ahb::burst::resolve_burst;
use omnibus_ahb::connect_port;
use omnibus_ahb::driver::BusDriver;
use omnibus_ahb::sequence::BurstSequence;
use omnibus_ahb::transfer::{Transfer, TransferSize, TransferType};
use omnibus_engine::run_simulation;
use omnibus_engine::test_helpers::start_test;

const INCR_BEATS: u8 = 4;

/// Run a burst sequence and return the driven transfers grouped into
/// bursts, checking the lead/follow-on transfer types on the way.
fn run_and_group(seed: u64, count: usize) -> Vec<Vec<Transfer>> {
    let mut engine = start_test(file!());
    let clock = engine.default_clock();
    let top = engine.top().clone();

    let generator = BurstSequence::new_and_register(
        &engine,
        &top,
        "gen",
        seed,
        count,
        &TransferSize::ALL,
        INCR_BEATS,
    )
    .unwrap();
    let driver = BusDriver::new_and_register(&engine, &clock, &top, "driver").unwrap();
    connect_port!(generator, tx => driver, rx).unwrap();

    run_simulation!(engine);

    let driven = driver.driven();
    let driven = driven.borrow();

    let (idle, beats) = driven.split_last().unwrap();
    assert_eq!(idle.trans, TransferType::Idle);

    let mut bursts: Vec<Vec<Transfer>> = Vec::new();
    for transfer in beats {
        match transfer.trans {
            TransferType::NonSeq => bursts.push(vec![transfer.clone()]),
            TransferType::Seq => bursts
                .last_mut()
                .expect("a burst must open with a NonSeq beat")
                .push(transfer.clone()),
            other => panic!("unexpected transfer type {other}"),
        }
    }
    assert_eq!(bursts.len(), count);
    bursts
}

#[test]
fn burst_shape_matches_descriptor() {
    for burst in run_and_group(0xb005, BurstSequence::DEFAULT_COUNT) {
        let lead = &burst[0];
        let descriptor = resolve_burst(lead.burst, INCR_BEATS).unwrap();

        assert_eq!(burst.len(), descriptor.beats as usize);
        for (index, transfer) in burst.iter().enumerate() {
            // beat runs 0..beats exactly once, strictly increasing
            assert_eq!(transfer.beat as usize, index);

            // Follow-on beats inherit the lead's fields
            assert_eq!(transfer.burst, lead.burst);
            assert_eq!(transfer.size, lead.size);
            assert_eq!(transfer.write, lead.write);
        }
    }
}

#[test]
fn non_wrapping_addresses_step_by_size() {
    for burst in run_and_group(0x5eed, BurstSequence::DEFAULT_COUNT) {
        let descriptor = resolve_burst(burst[0].burst, INCR_BEATS).unwrap();
        if descriptor.wraps {
            continue;
        }
        let step = burst[0].size.bytes() as u32;
        for pair in burst.windows(2) {
            assert_eq!(pair[1].addr, pair[0].addr.wrapping_add(step));
        }
    }
}

#[test]
fn wrapping_bursts_cover_their_window_once() {
    let mut wrapping_seen = false;
    for burst in run_and_group(0x11ab, 20) {
        let lead = &burst[0];
        let descriptor = resolve_burst(lead.burst, INCR_BEATS).unwrap();
        if !descriptor.wraps {
            continue;
        }
        wrapping_seen = true;

        let step = lead.size.bytes() as u32;
        let window = descriptor.beats as u32 * step;
        let base = lead.addr & !(window - 1);

        // The visited set is exactly the window containing the lead address
        let visited: HashSet<u32> = burst.iter().map(|t| t.addr).collect();
        assert_eq!(visited.len(), burst.len());
        let expected: HashSet<u32> = (0..descriptor.beats as u32).map(|i| base + i * step).collect();
        assert_eq!(visited, expected);

        // Consecutive addresses wrap from the window top back to the base
        for pair in burst.windows(2) {
            let offset = (pair[0].addr - base + step) % window;
            assert_eq!(pair[1].addr, base + offset);
        }
    }
    assert!(wrapping_seen, "seed produced no wrapping bursts");
}

#[test]
fn degenerate_incr_beats_rejected_at_registration() {
    let engine = start_test(file!());
    let top = engine.top().clone();

    for beats in [0, 1] {
        let result = BurstSequence::new_and_register(
            &engine,
            &top,
            "gen",
            1,
            BurstSequence::DEFAULT_COUNT,
            &TransferSize::ALL,
            beats,
        );
        assert!(result.is_err());
    }
}
