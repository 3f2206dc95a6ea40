// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! This module represents the time during a simulation.
//!
//! Time is counted in ticks of each clock.

use core::cmp::Ordering;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// ClockTick structure for representing a number of Clock ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTick {
    tick: u64,
}

impl ClockTick {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// Get the current clock tick.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl std::fmt::Display for ClockTick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tick)
    }
}

#[derive(Clone)]
/// State representing a clock.
pub struct Clock {
    /// Frequency of the clock in MHz.
    /// *Note*: Should never be changed as it is registered at this frequency.
    freq_mhz: f64,

    pub shared_state: Rc<ClockState>,
}

/// Shared state between futures using a Clock and the Clock itself.
pub struct ClockState {
    now: RefCell<ClockTick>,

    /// Queue of futures waiting for the right time.
    pub waiting: RefCell<Vec<Vec<Waker>>>,

    /// Queue of times at which those futures are to be woken. This is kept
    /// sorted in descending order so that the next entry to be woken can be
    /// popped from the end.
    pub waiting_times: RefCell<Vec<ClockTick>>,
}

impl ClockState {
    fn schedule(&self, schedule_time: ClockTick, cx: &mut Context<'_>) {
        let mut waiting_times = self.waiting_times.borrow_mut();
        let mut waiting = self.waiting.borrow_mut();
        if let Some(index) = waiting_times.iter().position(|&x| x == schedule_time) {
            // Time already exists, add this task
            waiting[index].push(cx.waker().clone());
        } else {
            // Time not found, insert at the correct location
            match waiting_times.iter().position(|x| *x < schedule_time) {
                Some(index) => {
                    // Insert at an arbitrary index
                    waiting_times.insert(index, schedule_time);
                    waiting.insert(index, vec![cx.waker().clone()]);
                }
                None => {
                    // Earliest time seen so far, add to the end
                    waiting_times.push(schedule_time);
                    waiting.push(vec![cx.waker().clone()]);
                }
            };
        }
    }

    fn advance_time(&self, to_time: ClockTick) {
        if to_time != *self.now.borrow() {
            assert!(to_time >= *self.now.borrow(), "Time moving backwards");
            *self.now.borrow_mut() = to_time;
        }
    }
}

impl Clock {
    /// Create a new [Clock] at the specified frequency.
    pub fn new(freq_mhz: f64) -> Self {
        let shared_state = Rc::new(ClockState {
            now: RefCell::new(ClockTick::new()),
            waiting: RefCell::new(Vec::new()),
            waiting_times: RefCell::new(Vec::new()),
        });

        Self {
            freq_mhz,
            shared_state,
        }
    }

    /// Returns the clocks frequency in MHz.
    pub fn freq_mhz(&self) -> f64 {
        self.freq_mhz
    }

    /// Returns the current [ClockTick].
    pub fn tick_now(&self) -> ClockTick {
        *self.shared_state.now.borrow()
    }

    /// Returns the current time in `ns`.
    pub fn time_now_ns(&self) -> f64 {
        let now = *self.shared_state.now.borrow();
        self.to_ns(&now)
    }

    /// Returns the time in `ns` of the next event registered with this clock.
    pub fn time_of_next(&self) -> f64 {
        match self.shared_state.waiting_times.borrow().last() {
            Some(clock_time) => self.to_ns(clock_time),
            None => f64::MAX,
        }
    }

    /// Convert the given [ClockTick] to a time in `ns` for this clock.
    pub fn to_ns(&self, clock_time: &ClockTick) -> f64 {
        clock_time.tick as f64 / self.freq_mhz * 1000.0
    }

    /// Returns a [ClockDelay] future which must be `await`ed to delay the
    /// specified number of ticks.
    #[must_use = "Futures do nothing unless you `.await` or otherwise use them"]
    pub fn wait_ticks(&self, ticks: u64) -> ClockDelay {
        let mut until = self.tick_now();
        until.tick += ticks;
        ClockDelay {
            shared_state: self.shared_state.clone(),
            until,
            state: ClockDelayState::Pending,
        }
    }
}

/// The default clock is simply to use a 1GHz clock so ticks are 1ns.
impl Default for Clock {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

/// The comparison operators for Clocks - use the next pending Waker time.
impl PartialEq for Clock {
    fn eq(&self, other: &Self) -> bool {
        self.time_of_next() == other.time_of_next()
    }
}
impl Eq for Clock {}

impl Ord for Clock {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.time_of_next() < other.time_of_next() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for Clock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Possible states of a ClockDelay.
enum ClockDelayState {
    Pending,
    Running,
}

/// Future returned by the clock to manage advancing time using async functions.
pub struct ClockDelay {
    shared_state: Rc<ClockState>,
    until: ClockTick,
    state: ClockDelayState,
}

impl Future for ClockDelay {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.state {
            ClockDelayState::Pending => {
                self.shared_state.schedule(self.until, cx);
                self.state = ClockDelayState::Running;
                Poll::Pending
            }
            ClockDelayState::Running => {
                self.shared_state.advance_time(self.until);
                Poll::Ready(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_to_ns() {
        let clk_ghz = Clock::new(1000.0);
        assert_eq!(1.0, clk_ghz.to_ns(&ClockTick { tick: 1 }));

        let slow_clk = Clock::new(0.5);
        assert_eq!(2000.0, slow_clk.to_ns(&ClockTick { tick: 1 }));
    }

    #[test]
    fn next_event_is_earliest() {
        let clk = Clock::new(1000.0);
        clk.shared_state
            .waiting_times
            .borrow_mut()
            .extend([ClockTick { tick: 5 }, ClockTick { tick: 2 }]);
        assert_eq!(2.0, clk.time_of_next());
    }
}
