//! Data Transfer Objects
//!
//! Documents exchanged with the external transfer tools.

pub mod submission;
