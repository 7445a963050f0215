//! `zlib` engine

use libz_sys as sys;

use core::convert::TryFrom;
use core::ffi::{c_char, c_int};

use super::{Interface, Compress};

type Size = sys::uLong;

extern "C" {
    fn zError(code: c_int) -> *const c_char;
}

///`zlib` interface
static ZLIB: Interface = Interface::new(compress_fn, bound_fn, describe_fn);

impl Interface {
    #[inline(always)]
    ///Returns engine backed by `zlib`
    ///
    ///Output is zlib stream, as produced by `compress2`.
    pub fn zlib() -> &'static Self {
        &ZLIB
    }
}

unsafe fn compress_fn(output: *mut u8, output_len: usize, input: *const u8, input_len: usize, level: i32) -> Compress {
    internal_zlib_impl_compress!(output, output_len, input, input_len, level)
}

#[inline]
fn bound_fn(input_len: usize) -> usize {
    internal_zlib_impl_bound!(input_len)
}

#[inline]
fn describe_fn(code: i32) -> Option<&'static str> {
    internal_zlib_impl_describe!(code)
}
