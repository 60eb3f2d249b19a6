//! Aegis service: per-domain logic facades, password handling,
//! configuration and wiring.

pub mod auth;
pub mod config;
pub mod department;
pub mod error;
pub mod membership;
pub mod menu;
pub mod organization;
pub mod password;
pub mod profile;
pub mod role;
pub mod telemetry;
pub mod user;
pub mod user_role;
pub mod wiring;

mod validate;

pub use auth::UserAuthService;
pub use config::ServiceConfig;
pub use error::AuthError;
pub use wiring::{Backend, Services};
