//! adze: serve files from several library directories under one mount point
//!
//! The [`resources::ResourceMap`] maps URL prefixes to trusted directories;
//! the HTTP layer exposes it under `resources.mount`. [`text`] holds the
//! template text filters.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resources;
pub mod server;
pub mod text;
