//! Wire records exchanged with the RPC transport.
//!
//! Mirrors the IDL-generated structures: almost every field is nullable,
//! identifiers travel as canonical UUID text, enums as integer codes and
//! timestamps as unix seconds.

pub mod auth;
pub mod common;
pub mod department;
pub mod membership;
pub mod menu;
pub mod organization;
pub mod profile;
pub mod role;
pub mod user;
pub mod user_role;

pub use common::{PageRequest, PageResponse};
