//! Avoidance frame codec — declared interface, wire format not yet designed.
//!
//! The decoder always reports failure and the encoder always writes nothing.
//! The struct carries the fields the electronics already expose so the
//! extension point is explicit; do not implement a format here before one is
//! agreed with the electronics side.

/// Adversary-detection state reported by the avoidance board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AvoidanceFrame {
    /// Bearing of the detected adversary, in the electronics' angle unit.
    pub adversary_angle: i32,
    /// True when an adversary robot is in detection range.
    pub adversary_detected: bool,
    /// Always true until a wire format exists.
    pub parsing_failed: bool,
}

/// Always reports failure: no wire format is defined yet.
pub fn decode_frame(_message: &[u8]) -> AvoidanceFrame {
    AvoidanceFrame {
        parsing_failed: true,
        ..AvoidanceFrame::default()
    }
}

/// Always writes nothing: no wire format is defined yet.
pub fn encode_frame(_frame: &AvoidanceFrame, _dst: &mut [u8]) -> usize {
    0
}
