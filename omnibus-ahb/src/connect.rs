// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Helper connection macros

pub use paste::paste;

#[macro_export]
/// Connect an [OutPort](omnibus_engine::port::OutPort) of one component to
/// an [InPort](omnibus_engine::port::InPort) of another.
///
/// Expands to `from.connect_port_<name>(to.port_<name>())` and evaluates
/// to the [SimResult](omnibus_engine::types::SimResult) of the connection.
macro_rules! connect_port {
    ($from:expr, $from_port_name:ident => $to:expr, $to_port_name:ident) => {{
        omnibus_track::debug!($from.entity() ; "Connect {}.{} => {}.{}", $from, stringify!($from_port_name), $to, stringify!($to_port_name));
        $crate::connect::paste! {
            $from.[< connect_port_ $from_port_name >]($to.[< port_ $to_port_name >]())
        }
    }};
}

#[macro_export]
/// Connect a tx port stored in a `RefCell<Option<>>`.
macro_rules! connect_tx {
    ($component:expr, $fn:ident ; $port_state:ident) => {
        $component.borrow_mut().as_mut().unwrap().$fn($port_state)
    };
}

#[macro_export]
/// Access an rx port stored in a `RefCell<Option<>>`.
macro_rules! port_rx {
    ($component:expr, $fn:ident) => {
        $component.borrow().as_ref().unwrap().$fn()
    };
}

#[macro_export]
/// Take a variable out of a `RefCell<Option<>>`.
macro_rules! take_option {
    ($var:expr) => {
        $var.borrow_mut().take().unwrap()
    };
}
