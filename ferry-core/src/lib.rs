//! Ferry Core
//!
//! Core types shared by the ferry crates.
//!
//! This crate contains:
//! - Domain types: job identifiers, job states and transfer descriptions
//! - DTOs: the bulk submission document handed to the submit command

pub mod domain;
pub mod dto;
