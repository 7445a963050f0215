//! Encoder

extern crate alloc;

use core::mem;

use alloc::vec::Vec;
use alloc::collections::TryReserveError;

use crate::status::Status;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
///Compress output
pub struct Compress {
    ///Status reported by engine
    pub status: Status,
    ///Number of bytes written into `output`.
    ///
    ///Always `0` unless `status` indicates success.
    pub written: usize,
}

impl Compress {
    #[inline(always)]
    ///Creates output of failed compression.
    pub const fn failed(status: Status) -> Self {
        Self {
            status,
            written: 0,
        }
    }

    #[inline]
    ///Converts into `Result` with number of bytes written on success.
    pub const fn result(self) -> Result<usize, Status> {
        if self.status.is_ok() {
            Ok(self.written)
        } else {
            Err(self.status)
        }
    }
}

///Compression engine interface
///
///Engine is stateless, hence interface consists only of functions:
///
///- `compress_fn` - one-shot compression of whole input into output of given capacity.
///  Must never write past capacity and must report outcome using zlib status codes.
///- `bound_fn` - worst case output size for input of given length.
///- `describe_fn` - textual description of engine's status code.
pub struct Interface {
    compress_fn: unsafe fn(*mut u8, usize, *const u8, usize, i32) -> Compress,
    bound_fn: fn(usize) -> usize,
    describe_fn: fn(i32) -> Option<&'static str>,
}

impl Interface {
    ///Creates new `Interface` with provided functions to build vtable.
    ///
    ///It is user responsibility to pass correct function pointers
    pub const fn new(
        compress_fn: unsafe fn(*mut u8, usize, *const u8, usize, i32) -> Compress,
        bound_fn: fn(usize) -> usize,
        describe_fn: fn(i32) -> Option<&'static str>,
    ) -> Self {
        Self {
            compress_fn,
            bound_fn,
            describe_fn,
        }
    }

    #[cfg(any(feature = "zlib", feature = "zlib-static"))]
    #[inline(always)]
    ///Returns engine compiled into library.
    ///
    ///`zlib` is preferred when both `zlib` and `zlib-ng` are enabled.
    pub fn system() -> &'static Self {
        Self::zlib()
    }

    #[cfg(all(feature = "zlib-ng", not(any(feature = "zlib", feature = "zlib-static"))))]
    #[inline(always)]
    ///Returns engine compiled into library.
    pub fn system() -> &'static Self {
        Self::zlib_ng()
    }

    #[inline(always)]
    ///Raw compression function, with no checks.
    ///
    ///Intended to be used as building block of higher level interfaces
    ///
    ///Arguments
    ///
    ///- `output` - Pointer to start of buffer where to write result. MUST NOT be null.
    ///- `output_len` - Capacity of buffer pointed by `output`
    ///- `input` - Pointer to start of input to process. MUST NOT be null.
    ///- `input_len` - Size of data to process in `input`
    ///- `level` - Compression level, validated by engine.
    ///
    ///`input` and `output` MUST NOT overlap.
    pub unsafe fn raw_compress(&self, output: *mut u8, output_len: usize, input: *const u8, input_len: usize, level: i32) -> Compress {
        let result = (self.compress_fn)(output, output_len, input, input_len, level);
        debug_assert!(result.written <= output_len);
        result
    }

    #[inline(always)]
    ///Compresses `input` into uninit `output`.
    ///
    ///On success `Compress::written` bytes at the start of `output` are initialized.
    pub fn compress_uninit(&self, input: &[u8], output: &mut [mem::MaybeUninit<u8>], level: i32) -> Compress {
        let input_len = input.len();
        let output_len = output.len();
        unsafe {
            self.raw_compress(output.as_mut_ptr() as _, output_len, input.as_ptr(), input_len, level)
        }
    }

    #[inline(always)]
    ///Compresses `input` into `output`.
    pub fn compress(&self, input: &[u8], output: &mut [u8], level: i32) -> Compress {
        let input_len = input.len();
        let output_len = output.len();
        unsafe {
            self.raw_compress(output.as_mut_ptr(), output_len, input.as_ptr(), input_len, level)
        }
    }

    #[inline]
    ///Compresses `input` into spare space in `output`.
    ///
    ///Function require user to alloc spare capacity himself.
    ///
    ///Length of `output` is extended only on success.
    pub fn compress_vec(&self, input: &[u8], output: &mut Vec<u8>, level: i32) -> Compress {
        let result = self.compress_uninit(input, output.spare_capacity_mut(), level);

        if result.status.is_ok() {
            let new_len = output.len() + result.written;
            unsafe {
                output.set_len(new_len);
            }
        }
        result
    }

    #[inline]
    ///Compresses `input` into `output` Vec, reserving worst case size beforehand.
    ///
    ///Only level and engine failures can be reported.
    pub fn compress_vec_full(&self, input: &[u8], output: &mut Vec<u8>, level: i32) -> Result<Compress, TryReserveError> {
        output.try_reserve_exact(self.compress_bound(input.len()))?;
        Ok(self.compress_vec(input, output, level))
    }

    #[inline(always)]
    ///Returns worst case size of compressed output for `input_len` bytes.
    ///
    ///Saturates at `usize::MAX` when engine cannot describe such input.
    pub fn compress_bound(&self, input_len: usize) -> usize {
        (self.bound_fn)(input_len)
    }

    #[inline]
    ///Returns descriptive text for status.
    pub fn describe(&self, status: Status) -> Option<&'static str> {
        if status == Status::INVALID_ARGUMENT {
            Some("invalid argument")
        } else {
            (self.describe_fn)(status.as_raw())
        }
    }
}

//ZLIB macro has to be defined before declaring modules
//
//Engine module must define `Size` as length type of its `compress2` and `compressBound`
#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
macro_rules! internal_zlib_impl_compress {
    ($output:ident, $output_len:ident, $input:ident, $input_len:ident, $level:ident) => {{
        let input_len = match Size::try_from($input_len) {
            Ok(input_len) => input_len,
            Err(_) => return $crate::encoder::Compress::failed($crate::Status::INVALID_ARGUMENT),
        };
        //Writing less than allowed is always safe
        let mut written = Size::try_from($output_len).unwrap_or(Size::MAX);

        let result = unsafe {
            sys::compress2($output, &mut written, $input, input_len, $level as _)
        };

        match result {
            sys::Z_OK => $crate::encoder::Compress {
                status: $crate::Status::OK,
                written: written as usize,
            },
            error => $crate::encoder::Compress::failed($crate::Status::new(error as i32)),
        }
    }}
}

#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
macro_rules! internal_zlib_impl_bound {
    ($input_len:ident) => {{
        match Size::try_from($input_len) {
            Ok(input_len) => {
                let bound = unsafe {
                    sys::compressBound(input_len)
                };
                //Wraps for inputs close to Size::MAX
                if bound < input_len {
                    usize::MAX
                } else {
                    usize::try_from(bound).unwrap_or(usize::MAX)
                }
            },
            Err(_) => usize::MAX,
        }
    }}
}

#[cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]
macro_rules! internal_zlib_impl_describe {
    ($code:ident) => {{
        match $code {
            //zError indexes static table, anything outside of it is not zlib's code
            sys::Z_VERSION_ERROR..=sys::Z_NEED_DICT => {
                let result = unsafe {
                    zError($code as _)
                };
                $crate::utils::convert_c_str(result)
            },
            _ => None,
        }
    }}
}

#[cfg(any(feature = "zlib", feature = "zlib-static"))]
mod zlib;
#[cfg(feature = "zlib-ng")]
mod zlib_ng;
