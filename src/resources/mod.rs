//! Static resource mapping
//!
//! Lets several library directories be served under one mount point, each
//! reachable through its own URL prefix.

mod error;
mod map;

pub use error::ResourceError;
pub use map::{ResolvedFile, ResourceMap};
