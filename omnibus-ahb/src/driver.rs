// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! The bus driver.
//!
//! The driver is the consumer end of the generator handshake. It accepts
//! one transfer, holds it for one HCLK tick to model the address phase,
//! records it and only then releases the producer, so at most one
//! transfer is ever in flight.
//!
//! # Ports
//!
//! This component has:
//!  - One [input port](omnibus_engine::port::InPort): `rx`

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use omnibus_engine::engine::Engine;
use omnibus_engine::port::{InPort, PortStateResult};
use omnibus_engine::time::clock::Clock;
use omnibus_engine::traits::Runnable;
use omnibus_engine::types::{SimError, SimResult};
use omnibus_model_builder::EntityDisplay;
use omnibus_track::entity::Entity;
use omnibus_track::enter;
use omnibus_track::id::Unique;

use crate::transfer::Transfer;
use crate::{port_rx, take_option};

#[derive(EntityDisplay)]
pub struct BusDriver {
    entity: Rc<Entity>,
    clock: Clock,
    rx: RefCell<Option<InPort<Transfer>>>,
    driven: Rc<RefCell<Vec<Transfer>>>,
}

impl BusDriver {
    pub fn new_and_register(
        engine: &Engine,
        clock: &Clock,
        parent: &Rc<Entity>,
        name: &str,
    ) -> Result<Rc<Self>, SimError> {
        let entity = Rc::new(Entity::new(parent, name));
        let rx = InPort::new(&entity, "rx");
        let rc_self = Rc::new(Self {
            entity,
            clock: clock.clone(),
            rx: RefCell::new(Some(rx)),
            driven: Rc::new(RefCell::new(Vec::new())),
        });
        engine.register(rc_self.clone());
        Ok(rc_self)
    }

    #[must_use]
    pub fn entity(&self) -> &Rc<Entity> {
        &self.entity
    }

    pub fn port_rx(&self) -> PortStateResult<Transfer> {
        port_rx!(self.rx, state)
    }

    /// The transfers accepted so far, in acceptance order.
    #[must_use]
    pub fn driven(&self) -> Rc<RefCell<Vec<Transfer>>> {
        self.driven.clone()
    }

    #[must_use]
    pub fn num_driven(&self) -> usize {
        self.driven.borrow().len()
    }
}

#[async_trait(?Send)]
impl Runnable for BusDriver {
    async fn run(&self) -> SimResult {
        let rx = take_option!(self.rx);
        loop {
            let transfer = rx.start_get()?.await;

            // One bus cycle per accepted transfer
            self.clock.wait_ticks(1).await;

            enter!(self.entity ; transfer.id());
            self.driven.borrow_mut().push(transfer);
            rx.finish_get();
        }
    }
}
