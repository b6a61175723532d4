//! Core domain types
//!
//! These types describe a transfer job as seen from the outside: the
//! identifier handed back at submission, the state names reported by the
//! status command, and the file transfers the job is made of.

pub mod job;
pub mod transfer;
