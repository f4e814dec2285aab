//! Moving frame codec — declared interface, wire format not yet designed.
//!
//! Same stub contract as [`crate::avoidance`]: decode always fails, encode
//! always writes nothing.

/// Kind of displacement order carried by a moving frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    #[default]
    Stop = 0,
    Forward = 1,
    Backward = 2,
    TurnRelative = 3,
    TurnAbsolute = 4,
    ForwardInfinity = 5,
    BackwardInfinity = 6,
}

/// Displacement state and orders shared with the navigation board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovingFrame {
    pub pos_x: u16,
    pub pos_y: u16,
    pub angle: u16,
    pub linear_speed: u16,
    pub angular_speed: u16,
    /// Set to adopt the coordinates above as the new reference pose.
    pub reset: bool,
    pub move_kind: MoveKind,
    pub blocked: bool,
    pub moving_done: bool,
    pub accuracy_reached: bool,
    /// Whether position servoing is engaged.
    pub servitude_on: bool,
    pub led: bool,
    /// Always true until a wire format exists.
    pub parsing_failed: bool,
}

/// Always reports failure: no wire format is defined yet.
pub fn decode_frame(_message: &[u8]) -> MovingFrame {
    MovingFrame {
        parsing_failed: true,
        ..MovingFrame::default()
    }
}

/// Always writes nothing: no wire format is defined yet.
pub fn encode_frame(_frame: &MovingFrame, _dst: &mut [u8]) -> usize {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_always_fails() {
        assert!(decode_frame(&[]).parsing_failed);
        assert!(decode_frame(&[0u8; 32]).parsing_failed);
    }

    #[test]
    fn encode_never_writes() {
        let frame = MovingFrame {
            pos_x: 100,
            pos_y: 200,
            move_kind: MoveKind::Forward,
            ..MovingFrame::default()
        };
        let mut buf = [0x55u8; 32];

        assert_eq!(encode_frame(&frame, &mut buf), 0);
        assert!(buf.iter().all(|b| *b == 0x55));
    }
}
