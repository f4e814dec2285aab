use actuframe_codec::io;

use crate::ffi_boundary;
use crate::types::RawIo;

/// Decode an IO frame.
///
/// # Safety
///
/// `message` must be null or point to `size` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn io_read_frame(message: *const u8, size: u8) -> RawIo {
    ffi_boundary(
        RawIo {
            tirette: 0,
            parsing_failed: 1,
        },
        || {
            if message.is_null() {
                return RawIo {
                    tirette: 0,
                    parsing_failed: 1,
                };
            }
            // SAFETY: caller guarantees `size` readable bytes behind `message`.
            let bytes = unsafe { std::slice::from_raw_parts(message, size as usize) };
            io::decode_frame(bytes).into()
        },
    )
}

/// Encode an IO frame: writes the single state byte. Returns 1, or 0 on any
/// failure.
///
/// # Safety
///
/// `buf` must be null or point to `buf_size` writable bytes; `obj` must be
/// null or point to a valid [`RawIo`].
#[no_mangle]
pub unsafe extern "C" fn io_write_frame(buf: *mut u8, buf_size: u8, obj: *const RawIo) -> u8 {
    ffi_boundary(0, || {
        if buf.is_null() || obj.is_null() || buf_size == 0 {
            return 0;
        }
        // SAFETY: null checks above; caller guarantees the sizes.
        let frame = unsafe { *obj }.into();
        let dst = unsafe { std::slice::from_raw_parts_mut(buf, buf_size as usize) };
        io::encode_frame(&frame, dst) as u8
    })
}
