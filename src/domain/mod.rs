//! Domain model: accounts, their operations and the accounting rules.

pub mod account;
pub mod accounting;
pub mod operation;
pub mod ports;
