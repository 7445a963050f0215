//! `zlib-ng` engine

use libz_ng_sys as sys;

use core::convert::TryFrom;
use core::ffi::{c_char, c_int};

use super::{Interface, Compress};

//zng_ API takes size_t lengths
type Size = usize;

extern "C" {
    #[link_name = "zng_zError"]
    fn zError(code: c_int) -> *const c_char;
}

static ZLIB_NG: Interface = Interface::new(compress_fn, bound_fn, describe_fn);

impl Interface {
    #[inline(always)]
    ///Returns engine backed by `zlib-ng`
    pub fn zlib_ng() -> &'static Self {
        &ZLIB_NG
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

#[cfg(test)]
mod tests {
    use super::{bound_fn, compress_fn, describe_fn};
    use crate::status::Status;

    #[test]
    fn should_compress_through_bindings() {
        const INPUT: &[u8] = b"hello world";
        let mut output = [0u8; 64];
        let result = unsafe {
            compress_fn(output.as_mut_ptr(), output.len(), INPUT.as_ptr(), INPUT.len(), 6)
        };
        assert_eq!(result.status, Status::OK);
        assert!(result.written > 0 && result.written <= output.len());

        let result = unsafe {
            compress_fn(output.as_mut_ptr(), 2, INPUT.as_ptr(), INPUT.len(), 6)
        };
        assert_eq!(result, crate::Compress::failed(Status::INSUFFICIENT_CAPACITY));
    }

    #[test]
    fn should_saturate_bound() {
        assert!(bound_fn(0) > 0);
        assert_eq!(bound_fn(usize::MAX), usize::MAX);
    }

    #[test]
    fn should_describe_only_engine_codes() {
        assert!(describe_fn(Status::INSUFFICIENT_CAPACITY.as_raw()).is_some());
        assert_eq!(describe_fn(Status::INVALID_ARGUMENT.as_raw()), None);
    }
}
