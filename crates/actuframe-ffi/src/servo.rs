use actuframe_codec::servo;

use crate::ffi_boundary;
use crate::types::RawServos;

/// Decode a servo frame.
///
/// # Safety
///
/// `message` must be null or point to `size` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn servo_read_frame(message: *const u8, size: u8) -> RawServos {
    ffi_boundary(RawServos::failed(), || {
        if message.is_null() {
            return RawServos::failed();
        }
        // SAFETY: caller guarantees `size` readable bytes behind `message`.
        let bytes = unsafe { std::slice::from_raw_parts(message, size as usize) };
        servo::decode_frame(bytes).into()
    })
}

/// Encode a servo frame into `buf`, returning the bytes written (0 on any
/// failure, nothing written).
///
/// # Safety
///
/// `buf` must be null or point to `buf_size` writable bytes; `obj` must be
/// null or point to a valid [`RawServos`].
#[no_mangle]
pub unsafe extern "C" fn servo_write_frame(
    buf: *mut u8,
    buf_size: u8,
    obj: *const RawServos,
) -> u8 {
    ffi_boundary(0, || {
        if buf.is_null() || obj.is_null() || buf_size == 0 {
            return 0;
        }
        // SAFETY: null checks above; caller guarantees the sizes.
        let frame = unsafe { *obj }.into();
        let dst = unsafe { std::slice::from_raw_parts_mut(buf, buf_size as usize) };
        servo::encode_frame(&frame, dst) as u8
    })
}

/// Exact servo frame length for `nb_servos` records, saturating at 255.
#[no_mangle]
pub extern "C" fn get_size_servo_frame(nb_servos: u8) -> u8 {
    let size = servo::frame_size(nb_servos as usize);
    u8::try_from(size).unwrap_or(u8::MAX)
}
