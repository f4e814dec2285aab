use actuframe_codec::motor;

use crate::ffi_boundary;
use crate::types::RawMotors;

/// Decode a motor frame.
///
/// # Safety
///
/// `message` must be null or point to `size` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn motor_read_frame(message: *const u8, size: u8) -> RawMotors {
    ffi_boundary(RawMotors::failed(), || {
        if message.is_null() {
            return RawMotors::failed();
        }
        // SAFETY: caller guarantees `size` readable bytes behind `message`.
        let bytes = unsafe { std::slice::from_raw_parts(message, size as usize) };
        motor::decode_frame(bytes).into()
    })
}

/// Encode a motor frame into `buf`, returning the bytes written (0 on any
/// failure, nothing written).
///
/// # Safety
///
/// `buf` must be null or point to `buf_size` writable bytes; `obj` must be
/// null or point to a valid [`RawMotors`].
#[no_mangle]
pub unsafe extern "C" fn motor_write_frame(
    buf: *mut u8,
    buf_size: u8,
    obj: *const RawMotors,
) -> u8 {
    ffi_boundary(0, || {
        if buf.is_null() || obj.is_null() || buf_size == 0 {
            return 0;
        }
        // SAFETY: null checks above; caller guarantees the sizes.
        let frame = unsafe { *obj }.into();
        let dst = unsafe { std::slice::from_raw_parts_mut(buf, buf_size as usize) };
        motor::encode_frame(&frame, dst) as u8
    })
}

/// Exact motor frame length for the given record counts, saturating at 255.
#[no_mangle]
pub extern "C" fn get_size_motor_frame(
    nb_controlled: u8,
    nb_uncontrolled: u8,
    nb_brushless: u8,
) -> u8 {
    let size = motor::frame_size(
        nb_controlled as usize,
        nb_uncontrolled as usize,
        nb_brushless as usize,
    );
    u8::try_from(size).unwrap_or(u8::MAX)
}
