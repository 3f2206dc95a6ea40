// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! A generator of single-beat transfers.
//!
//! Emits a fixed count of randomized single-beat transfers, each
//! `NonSeq`/`Single`, followed by one terminating idle transfer.
//!
//! # Ports
//!
//! This component has:
//!  - One [output port](omnibus_engine::port::OutPort): `tx`

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use omnibus_engine::engine::Engine;
use omnibus_engine::port::{OutPort, PortStateResult};
use omnibus_engine::traits::Runnable;
use omnibus_engine::types::{SimError, SimResult};
use omnibus_model_builder::EntityDisplay;
use omnibus_track::entity::Entity;
use omnibus_track::exit;
use omnibus_track::id::Unique;

use crate::constraint::FieldDraw;
use crate::transfer::{BurstCode, Transfer, TransferSize, TransferType};
use crate::{connect_tx, take_option};

#[derive(EntityDisplay)]
pub struct SingleSequence {
    entity: Rc<Entity>,
    count: usize,
    sizes: Vec<TransferSize>,
    draw: RefCell<Option<FieldDraw>>,
    tx: RefCell<Option<OutPort<Transfer>>>,
}

impl SingleSequence {
    /// Transfer count used by the reference stimulus.
    pub const DEFAULT_COUNT: usize = 15;

    pub fn new_and_register(
        engine: &Engine,
        parent: &Rc<Entity>,
        name: &str,
        seed: u64,
        count: usize,
        sizes: &[TransferSize],
    ) -> Result<Rc<Self>, SimError> {
        let entity = Rc::new(Entity::new(parent, name));
        let tx = OutPort::new(&entity, "tx");
        let rc_self = Rc::new(Self {
            entity,
            count,
            sizes: sizes.to_vec(),
            draw: RefCell::new(Some(FieldDraw::new(seed))),
            tx: RefCell::new(Some(tx)),
        });
        engine.register(rc_self.clone());
        Ok(rc_self)
    }

    #[must_use]
    pub fn entity(&self) -> &Rc<Entity> {
        &self.entity
    }

    pub fn connect_port_tx(&self, port_state: PortStateResult<Transfer>) -> SimResult {
        connect_tx!(self.tx, connect ; port_state)
    }
}

#[async_trait(?Send)]
impl Runnable for SingleSequence {
    async fn run(&self) -> SimResult {
        let mut draw = take_option!(self.draw);
        let tx = take_option!(self.tx);

        for _ in 0..self.count {
            // Mirror the randomized-field style: trans and burst are drawn
            // from their full domains under predicates that pin them down.
            let trans = draw.draw("trans", &TransferType::ALL, |t| {
                *t == TransferType::NonSeq
            })?;
            let burst = draw.draw("burst", &BurstCode::ALL, |b| *b == BurstCode::Single)?;
            let size = draw.draw("size", &self.sizes, |_| true)?;

            let transfer = Transfer::new(&self.entity)
                .addr(draw.draw_addr(size))
                .write(draw.draw_bool())
                .size(size)
                .trans(trans)
                .burst(burst);

            exit!(self.entity ; transfer.id());
            tx.put(transfer)?.await;
        }

        let idle = Transfer::new(&self.entity);
        exit!(self.entity ; idle.id());
        tx.put(idle)?.await;

        Ok(())
    }
}
