//! HTTP protocol layer module
//!
//! Response builders, content types, caching headers and byte ranges, kept
//! independent of how requests are routed.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

pub use range::parse_range_header;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_416_response, build_options_response, Body,
};
