//! High-level motor representation.
//!
//! The record types are already in their friendliest form in the codec; this
//! layer replaces the sentinel-slot arrays with bounded vectors and the
//! parse flag with `Result`.

use arrayvec::ArrayVec;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::motor::{
    self, MotorFrame, MAX_BRUSHLESS, MAX_CONTROLLED_MOTORS, MAX_UNCONTROLLED_MOTORS,
};
use crate::codec::{Brushless, ControlledMotor, UncontrolledMotor};
use crate::error::{FrameError, Result};

const MAX_WIRE_SIZE: usize =
    motor::frame_size(MAX_CONTROLLED_MOTORS, MAX_UNCONTROLLED_MOTORS, MAX_BRUSHLESS);

/// A bounded group of the three motor families carried by one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorGroup {
    /// Position-controlled motors, in frame order.
    pub controlled: ArrayVec<ControlledMotor, MAX_CONTROLLED_MOTORS>,
    /// Free-running motors.
    pub uncontrolled: ArrayVec<UncontrolledMotor, MAX_UNCONTROLLED_MOTORS>,
    /// Brushless units.
    pub brushless: ArrayVec<Brushless, MAX_BRUSHLESS>,
}

impl MotorGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a group from an already-delimited frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frame = motor::decode_frame(bytes);
        if frame.parsing_failed {
            return Err(FrameError::Malformed);
        }

        Ok(MotorGroup {
            controlled: frame
                .controlled
                .iter()
                .filter(|m| m.id > 0)
                .copied()
                .collect(),
            uncontrolled: frame
                .uncontrolled
                .iter()
                .filter(|m| m.id > 0)
                .copied()
                .collect(),
            brushless: frame.brushless.iter().filter(|b| b.id > 0).copied().collect(),
        })
    }

    /// Encode the group into a fresh frame.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let frame = self.to_frame();
        let mut buf = [0u8; MAX_WIRE_SIZE];
        let written = motor::encode_frame(&frame, &mut buf);
        if written == 0 {
            return Err(FrameError::BufferTooSmall);
        }
        Ok(Bytes::copy_from_slice(&buf[..written]))
    }

    /// Lower the group onto the fixed-array frame representation.
    pub fn to_frame(&self) -> MotorFrame {
        let mut frame = MotorFrame::default();
        for (slot, motor) in self.controlled.iter().enumerate() {
            frame.controlled[slot] = *motor;
        }
        for (slot, motor) in self.uncontrolled.iter().enumerate() {
            frame.uncontrolled[slot] = *motor;
        }
        for (slot, unit) in self.brushless.iter().enumerate() {
            frame.brushless[slot] = *unit;
        }
        frame
    }

    /// Exact frame length in bytes for the given record counts.
    pub fn frame_size(controlled: usize, uncontrolled: usize, brushless: usize) -> usize {
        motor::frame_size(controlled, uncontrolled, brushless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Rotation;

    fn sample_group() -> MotorGroup {
        let mut group = MotorGroup::new();
        group.controlled.push(ControlledMotor {
            id: 1,
            wanted_angle: 213,
            wanted_turns: 2,
            finished: false,
            new_command: true,
        });
        group.uncontrolled.push(UncontrolledMotor {
            id: 4,
            running: true,
            rotation: Rotation::Counterclockwise,
        });
        group.brushless.push(Brushless { id: 5, on_off: 1 });
        group.brushless.push(Brushless { id: 6, on_off: 0 });
        group
    }

    #[test]
    fn roundtrip_through_bytes() {
        let group = sample_group();
        let bytes = group.to_bytes().unwrap();

        assert_eq!(bytes.len(), MotorGroup::frame_size(1, 1, 2));
        assert_eq!(MotorGroup::from_bytes(&bytes).unwrap(), group);
    }

    #[test]
    fn empty_group_is_header_only() {
        let bytes = MotorGroup::new().to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0, 0, 0]);
    }

    #[test]
    fn malformed_bytes_reported() {
        assert_eq!(
            MotorGroup::from_bytes(&[1, 0]).unwrap_err(),
            FrameError::Malformed
        );
    }

    #[test]
    fn roundtrip_through_json() {
        let group = sample_group();
        let json = serde_json::to_string(&group).unwrap();
        let back: MotorGroup = serde_json::from_str(&json).unwrap();

        assert_eq!(back, group);
    }
}
