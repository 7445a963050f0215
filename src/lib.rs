//!One-shot zlib compression into caller-owned buffers
//!
//!Library is intended to be loaded by host that lacks compression of its own.
//!Host passes source and destination buffers across C ABI (see [ffi]) and receives
//!raw status of compression together with number of bytes written.
//!
//!Rust users can access the same functionality through [Interface].
//!
//!## Features
//!
//!- `zlib` - Enables `zlib` engine. Default.
//!- `zlib-static` - Enables `zlib` engine with `static` feature.
//!- `zlib-ng` - Enables `zlib-ng` engine.
//!
//!C ABI is available as long as at least one engine is enabled.

#![warn(missing_docs)]

#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
pub(crate) mod utils;
pub mod status;
pub use status::{Status, StatusKind};
pub mod encoder;
pub use encoder::{Compress, Interface};
#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
pub mod ffi;
#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
pub use ffi::{CompressionResult, zlib_compress_stream, zlib_compress_bound};
