//! Application layer orchestrating the account use cases.
//!
//! `AccountService` resolves accounts through the repository port and hands
//! derived views off to the pure accounting functions. `Command` is the batch
//! form of the mutating use cases.

pub mod command;
pub mod service;
