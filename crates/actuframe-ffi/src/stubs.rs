//! Avoidance and moving exports: wire formats not yet designed, so reads
//! always fail and writes always report zero bytes, exactly like the codec
//! stubs underneath.

use actuframe_codec::{avoidance, moving};

use crate::ffi_boundary;
use crate::types::{RawAvoidance, RawMoving};

/// Always reports a parse failure.
///
/// # Safety
///
/// `message` may be anything; it is never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn avoidance_read_frame(_message: *const u8, _size: u8) -> RawAvoidance {
    ffi_boundary(
        RawAvoidance {
            parsing_failed: 1,
            ..RawAvoidance::default()
        },
        || avoidance::decode_frame(&[]).into(),
    )
}

/// Always writes nothing.
///
/// # Safety
///
/// Pointers may be anything; they are never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn avoidance_write_frame(
    _buf: *mut u8,
    _buf_size: u8,
    _obj: *const RawAvoidance,
) -> u8 {
    0
}

/// Always reports a parse failure.
///
/// # Safety
///
/// `message` may be anything; it is never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn moving_read_frame(_message: *const u8, _size: u8) -> RawMoving {
    ffi_boundary(
        RawMoving {
            parsing_failed: 1,
            ..RawMoving::default()
        },
        || moving::decode_frame(&[]).into(),
    )
}

/// Always writes nothing.
///
/// # Safety
///
/// Pointers may be anything; they are never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn moving_write_frame(
    _buf: *mut u8,
    _buf_size: u8,
    _obj: *const RawMoving,
) -> u8 {
    0
}
