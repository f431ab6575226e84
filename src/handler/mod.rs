//! Request handler module
//!
//! Request routing dispatch and the static resource handler.

pub mod resources;
pub mod router;

pub use router::handle_request;
