//! IO frame codec: the tirette (start-pull switch) state, one raw byte.

use bytes::BufMut;

/// An IO frame is always exactly one byte on the wire.
pub const FRAME_SIZE: usize = 1;

/// A decoded IO frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IoFrame {
    /// Raw tirette byte: non-zero means the pull-switch is in place.
    pub tirette: u8,
    /// True when decoding rejected the frame.
    pub parsing_failed: bool,
}

/// Exact frame length in bytes.
pub const fn frame_size() -> usize {
    FRAME_SIZE
}

/// Decode an IO frame. An empty slice is rejected; otherwise the first byte
/// is taken verbatim and trailing bytes are ignored, as the electronics have
/// always done.
pub fn decode_frame(message: &[u8]) -> IoFrame {
    match message.first() {
        Some(&tirette) => IoFrame {
            tirette,
            parsing_failed: false,
        },
        None => IoFrame {
            tirette: 0,
            parsing_failed: true,
        },
    }
}

/// Encode an IO frame: writes the single state byte. Returns 1, or 0 when
/// the buffer is empty.
pub fn encode_frame(frame: &IoFrame, dst: &mut [u8]) -> usize {
    if dst.len() < FRAME_SIZE {
        return 0;
    }

    let mut buf: &mut [u8] = dst;
    buf.put_u8(frame.tirette);
    FRAME_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_rejected() {
        let frame = decode_frame(&[]);
        assert!(frame.parsing_failed);
        assert_eq!(frame.tirette, 0);
    }

    #[test]
    fn byte_taken_verbatim() {
        let frame = decode_frame(&[0x2A]);
        assert!(!frame.parsing_failed);
        assert_eq!(frame.tirette, 0x2A);
    }

    #[test]
    fn trailing_bytes_ignored() {
        let frame = decode_frame(&[1, 0xFF, 0xFF]);
        assert!(!frame.parsing_failed);
        assert_eq!(frame.tirette, 1);
    }

    #[test]
    fn roundtrip() {
        let frame = IoFrame {
            tirette: 1,
            parsing_failed: false,
        };
        let mut buf = [0u8; 1];

        assert_eq!(encode_frame(&frame, &mut buf), 1);
        assert_eq!(decode_frame(&buf), frame);
    }

    #[test]
    fn empty_buffer_writes_nothing() {
        let frame = IoFrame::default();
        assert_eq!(encode_frame(&frame, &mut []), 0);
    }
}
