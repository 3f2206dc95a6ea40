// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Ensure that all versions of each macro can be used

use std::fmt;
use std::rc::Rc;

use omnibus_track::entity::{Entity, toplevel};
use omnibus_track::{
    Id, create, create_id, debug, enter, error, exit, info, set_time, test_helpers, test_init,
    trace, warn,
};

macro_rules! build_with_entity {
    ($name:ident, $macro:ident, $slvl:expr) => (
        #[test]
        fn $name() {
            let (test_tracker, tracker) = test_init!(100);

            let top = toplevel(&tracker, "top");
            test_helpers::check_and_clear(&test_tracker, &["0: created 100, top, 0, 0 bytes"]);
            assert_eq!(top.id, Id(100));

            $macro!(top ; "Loc with no args");
            test_helpers::check_and_clear(&test_tracker, &[concat!("100:", $slvl, ": Loc with no args")]);

            $macro!(top ; "Loc with {} argument", 1);
            test_helpers::check_and_clear(&test_tracker, &[concat!("100:", $slvl, ": Loc with 1 argument")]);

            $macro!(top ; "Loc with {}, {} arguments", 1, 1 + 1);
            test_helpers::check_and_clear(&test_tracker, &[concat!("100:", $slvl,": Loc with 1, 2 arguments")]);

            drop(top);
            test_helpers::check_and_clear(&test_tracker, &["100: destroyed 0"]);
        }
    );
}

build_with_entity!(trace_with_entity, trace, "TRACE");
build_with_entity!(info_with_entity, info, "INFO");
build_with_entity!(debug_with_entity, debug, "DEBUG");
build_with_entity!(warn_with_entity, warn, "WARN");
build_with_entity!(error_with_entity, error, "ERROR");

#[test]
fn child_entity_create_destroy() {
    let (test_tracker, tracker) = test_init!(10);

    let top = toplevel(&tracker, "top");
    test_helpers::check_and_clear(&test_tracker, &["0: created 10, top, 0, 0 bytes"]);
    assert_eq!(top.id, Id(10));

    let child = Entity::new(&top, "child");
    test_helpers::check_and_clear(&test_tracker, &["10: created 11, top::child, 0, 0 bytes"]);
    assert_eq!(child.full_name(), "top::child");

    drop(child);
    test_helpers::check_and_clear(&test_tracker, &["11: destroyed 10"]);

    drop(top);
    test_helpers::check_and_clear(&test_tracker, &["10: destroyed 0"]);
}

#[test]
fn enter_exit_basics() {
    let (test_tracker, tracker) = test_init!(40);

    let top = toplevel(&tracker, "top");
    let obj = create_id!(top);
    enter!(top ; obj);
    test_helpers::check_and_clear(
        &test_tracker,
        &["0: created 40, top, 0, 0 bytes", "40: 41 entered"],
    );

    exit!(top ; obj);
    test_helpers::check_and_clear(&test_tracker, &["40: 41 exited"]);

    drop(top);
    test_helpers::check_and_clear(&test_tracker, &["40: destroyed 0"]);
}

#[derive(Debug)]
struct Packet {
    pub id: Id,
}

impl Packet {
    fn new(entity: &Rc<Entity>) -> Self {
        Self {
            id: create_id!(entity),
        }
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "packet {}", self.id)
    }
}

#[test]
fn num_bytes() {
    let (test_tracker, tracker) = test_init!(121);

    let top = toplevel(&tracker, "top");
    test_helpers::check_and_clear(&test_tracker, &["0: created 121, top, 0, 0 bytes"]);

    let pkt = Packet::new(&top);
    create!(top ; pkt, 10, 0);
    test_helpers::check_and_clear(&test_tracker, &["121: created 122, packet 122, 0, 10 bytes"]);
}

#[test]
fn set_time() {
    let (test_tracker, tracker) = test_init!(321);

    let top = toplevel(&tracker, "top");
    test_helpers::check_and_clear(&test_tracker, &["0: created 321, top, 0, 0 bytes"]);

    set_time!(top ; 10.0);
    test_helpers::check_and_clear(&test_tracker, &["321: set time 10.0ns"]);
}
