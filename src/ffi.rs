//! C ABI
//!
//!Functions are exported unmangled, to be loaded by host from the `cdylib` artifact:
//!
//!```c
//!struct CompressionResult {
//!  int32_t result;
//!  uint32_t written;
//!};
//!
//!struct CompressionResult zlib_compress_stream(uint8_t* destination, unsigned long destination_length, const uint8_t* source, uint32_t source_length, int32_t compression_level);
//!uint32_t zlib_compress_bound(uint32_t source_length);
//!```
//!
//!Compression is performed by [Interface::system].

use core::convert::TryFrom;
use core::ffi::c_ulong;
use core::{cmp, mem, slice};

use crate::encoder::{Compress, Interface};
use crate::status::Status;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
///Result of [zlib_compress_stream]
pub struct CompressionResult {
    ///Raw status code, `0` on success.
    pub result: i32,
    ///Number of bytes written into destination.
    ///
    ///Always `0` unless `result` is `0`.
    pub written: u32,
}

impl CompressionResult {
    #[inline(always)]
    const fn failed(status: Status) -> Self {
        Self {
            result: status.as_raw(),
            written: 0,
        }
    }
}

impl From<Compress> for CompressionResult {
    #[inline]
    fn from(compress: Compress) -> Self {
        match compress.result() {
            Ok(written) => match u32::try_from(written) {
                Ok(written) => Self {
                    result: Status::OK.as_raw(),
                    written,
                },
                //Unreachable as capacity is limited to u32::MAX
                Err(_) => Self::failed(Status::INSUFFICIENT_CAPACITY),
            },
            Err(status) => Self::failed(status),
        }
    }
}

#[no_mangle]
///Compresses `source` into `destination` as single zlib stream.
///
///Arguments
///
///- `destination` - Buffer for compressed output. Can be null only if `destination_length` is 0.
///- `destination_length` - Capacity of `destination`. Values above `u32::MAX` are treated as `u32::MAX`.
///- `source` - Data to compress. Can be null only if `source_length` is 0.
///- `source_length` - Size of `source`.
///- `compression_level` - From 0 to 9, or -1 for engine default. Validated by engine.
///
///Null buffer with non-zero length results in [Status::INVALID_ARGUMENT].
///
///# Safety
///
///`destination` must be valid for writes of `destination_length` bytes,
///`source` must be valid for reads of `source_length` bytes and both must not overlap.
pub unsafe extern "C" fn zlib_compress_stream(destination: *mut u8, destination_length: c_ulong, source: *const u8, source_length: u32, compression_level: i32) -> CompressionResult {
    if source.is_null() && source_length > 0 {
        return CompressionResult::failed(Status::INVALID_ARGUMENT);
    }
    if destination.is_null() && destination_length > 0 {
        return CompressionResult::failed(Status::INVALID_ARGUMENT);
    }

    let input: &[u8] = match source.is_null() {
        true => &[],
        false => slice::from_raw_parts(source, source_length as usize),
    };

    let capacity = cmp::min(destination_length, u32::MAX as c_ulong) as usize;
    let output: &mut [mem::MaybeUninit<u8>] = match destination.is_null() {
        true => &mut [],
        false => slice::from_raw_parts_mut(destination as *mut mem::MaybeUninit<u8>, capacity),
    };

    Interface::system().compress_uninit(input, output, compression_level).into()
}

#[no_mangle]
///Returns capacity of destination sufficient to compress `source_length` bytes with any level.
///
///Saturates at `u32::MAX`.
pub extern "C" fn zlib_compress_bound(source_length: u32) -> u32 {
    let bound = Interface::system().compress_bound(source_length as usize);
    u32::try_from(bound).unwrap_or(u32::MAX)
}
