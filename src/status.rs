//! Status codes
//!
//!Codes follow zlib numbering, which every engine is required to report in.
//!The adapter adds a single code of its own, [Status::INVALID_ARGUMENT], placed outside of zlib's range.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
///Raw outcome of compression.
///
///Holds engine code as it was reported, so no information is lost on the way to the caller.
pub struct Status(i32);

const OK_RAW: i32 = 0;
const INVALID_LEVEL_RAW: i32 = -2;
const INSUFFICIENT_CAPACITY_RAW: i32 = -5;
const INVALID_ARGUMENT_RAW: i32 = -10_000;

impl Status {
    ///Compression finished, output is complete.
    pub const OK: Self = Self(OK_RAW);
    ///Engine's parameters are inconsistent.
    ///
    ///For one-shot compression this means compression level outside of accepted range.
    pub const INVALID_LEVEL: Self = Self(INVALID_LEVEL_RAW);
    ///Engine ran out of memory.
    pub const MEMORY: Self = Self(-4);
    ///Output buffer is too small to hold complete stream.
    pub const INSUFFICIENT_CAPACITY: Self = Self(INSUFFICIENT_CAPACITY_RAW);
    ///Linked engine is incompatible with headers it was built against.
    pub const VERSION: Self = Self(-6);
    ///Arguments rejected before reaching engine (e.g. null buffer with non-zero length).
    pub const INVALID_ARGUMENT: Self = Self(INVALID_ARGUMENT_RAW);

    #[inline(always)]
    ///Wraps raw code
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[inline(always)]
    ///Returns raw integer
    pub const fn as_raw(&self) -> i32 {
        self.0
    }

    #[inline(always)]
    ///Returns whether status indicates success.
    pub const fn is_ok(&self) -> bool {
        self.0 == OK_RAW
    }

    ///Classifies raw code.
    pub const fn kind(&self) -> StatusKind {
        match self.0 {
            OK_RAW => StatusKind::Success,
            INSUFFICIENT_CAPACITY_RAW => StatusKind::InsufficientCapacity,
            INVALID_LEVEL_RAW => StatusKind::InvalidLevel,
            INVALID_ARGUMENT_RAW => StatusKind::InvalidArgument,
            _ => StatusKind::Engine,
        }
    }
}

impl From<Status> for i32 {
    #[inline(always)]
    fn from(status: Status) -> Self {
        status.0
    }
}

///Prints kind of status together with raw code.
///
///Engine specific text is available through [Interface::describe](crate::Interface::describe).
impl fmt::Display for Status {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.kind() {
            StatusKind::Success => "success",
            StatusKind::InsufficientCapacity => "insufficient destination capacity",
            StatusKind::InvalidLevel => "invalid compression level",
            StatusKind::InvalidArgument => "invalid argument",
            StatusKind::Engine => "engine failure",
        };
        write!(fmt, "{} (code {})", text, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
///Caller-facing classification of [Status]
pub enum StatusKind {
    ///Compression completed, written count is valid.
    Success,
    ///Destination cannot hold compressed output.
    ///
    ///Nothing written into destination should be interpreted as usable.
    InsufficientCapacity,
    ///Compression level outside of engine's accepted range.
    InvalidLevel,
    ///Arguments rejected by adapter.
    InvalidArgument,
    ///Any other failure reported by engine.
    ///
    ///Use [Status::as_raw] to distinguish between them.
    Engine,
}
