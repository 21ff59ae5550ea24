//! CSV boundary: batch commands in, account and statement reports out.

pub mod account_writer;
pub mod command_reader;
pub mod statement_writer;
