//! Domain models for Aegis.
//!
//! These are the core types shared across all crates.

pub mod assignment;
pub mod department;
pub mod membership;
pub mod menu;
pub mod organization;
pub mod profile;
pub mod role;
pub mod user;
