//! Aegis RPC: wire records, domain/wire projectors, paged-query
//! normalization and outbound middleware.

pub mod convert;
pub mod middleware;
pub mod wire;

pub use convert::{EnumConverter, normalize, to_page_response};
pub use middleware::{OutboundCall, TracePassthrough, TracePassthroughLayer};
