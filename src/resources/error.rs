//! Resource mapping errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while registering a prefix mapping.
///
/// Lookups never produce these: a request that cannot be resolved is simply
/// `None`, so blocked and missing paths look the same to callers.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("invalid resource directory '{}': {source}", path.display())]
    InvalidDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resource directory '{}' is not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },
}
