// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! A generator of burst transactions.
//!
//! Emits a fixed count of bursts. Each burst is one `NonSeq` lead beat
//! followed by `beats - 1` `Seq` beats whose addresses come from the
//! per-burst [`AddressCursor`]. The run closes with one idle transfer.
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

use crate::address::AddressCursor;
use crate::burst::resolve_burst;
use crate::constraint::FieldDraw;
use crate::transfer::{BurstCode, Transfer, TransferSize, TransferType};
use crate::{connect_tx, take_option};

#[derive(EntityDisplay)]
pub struct BurstSequence {
    entity: Rc<Entity>,
    count: usize,
    sizes: Vec<TransferSize>,

    /// Beat count used when the plain `Incr` code is drawn.
    incr_beats: u8,

    draw: RefCell<Option<FieldDraw>>,
    tx: RefCell<Option<OutPort<Transfer>>>,
}

impl BurstSequence {
    /// Burst count used by the reference stimulus.
    pub const DEFAULT_COUNT: usize = 10;

    /// Create and register the generator.
    ///
    /// `incr_beats` is validated here so that a degenerate incrementing
    /// burst length surfaces before any beat is emitted.
    pub fn new_and_register(
        engine: &Engine,
        parent: &Rc<Entity>,
        name: &str,
        seed: u64,
        count: usize,
        sizes: &[TransferSize],
        incr_beats: u8,
    ) -> Result<Rc<Self>, SimError> {
        resolve_burst(BurstCode::Incr, incr_beats)?;

        let entity = Rc::new(Entity::new(parent, name));
        let tx = OutPort::new(&entity, "tx");
        let rc_self = Rc::new(Self {
            entity,
            count,
            sizes: sizes.to_vec(),
            incr_beats,
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
impl Runnable for BurstSequence {
    async fn run(&self) -> SimResult {
        let mut draw = take_option!(self.draw);
        let tx = take_option!(self.tx);

        for _ in 0..self.count {
            let code = draw.draw("burst", &BurstCode::ALL, |b| *b != BurstCode::Single)?;
            let burst = resolve_burst(code, self.incr_beats)?;
            let size = draw.draw("size", &self.sizes, |_| true)?;
            let write = draw.draw_bool();
            let lead_addr = draw.draw_addr(size);

            let lead = Transfer::new(&self.entity)
                .addr(lead_addr)
                .write(write)
                .size(size)
                .trans(TransferType::NonSeq)
                .burst(code);
            exit!(self.entity ; lead.id());
            tx.put(lead)?.await;

            let mut cursor = AddressCursor::new(lead_addr, size, burst);
            for beat in 1..burst.beats {
                let follow_on = Transfer::new(&self.entity)
                    .addr(cursor.advance())
                    .write(write)
                    .size(size)
                    .trans(TransferType::Seq)
                    .burst(code)
                    .beat(beat);
                exit!(self.entity ; follow_on.id());
                tx.put(follow_on)?.await;
            }
        }

        let idle = Transfer::new(&self.entity);
        exit!(self.entity ; idle.id());
        tx.put(idle)?.await;

        Ok(())
    }
}
