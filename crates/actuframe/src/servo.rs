//! High-level servo representation.

use arrayvec::ArrayVec;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::servo::{self, ServoFrame, MAX_SERVOS};
use crate::codec::{BlockingMode, Color, CommandKind};
use crate::error::{FrameError, Result};

const MAX_WIRE_SIZE: usize = servo::frame_size(MAX_SERVOS);

/// Servo order, in position or in speed.
///
/// The wire splits this into a command value and a kind bit; the typed layer
/// keeps them together so an impossible combination cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Position setpoint.
    Position(u16),
    /// Speed setpoint.
    Speed(u16),
}

impl Default for Control {
    fn default() -> Self {
        Control::Position(0)
    }
}

impl Control {
    fn split(self) -> (CommandKind, u16) {
        match self {
            Control::Position(value) => (CommandKind::Position, value),
            Control::Speed(value) => (CommandKind::Speed, value),
        }
    }

    fn join(kind: CommandKind, value: u16) -> Self {
        match kind {
            CommandKind::Position => Control::Position(value),
            CommandKind::Speed => Control::Speed(value),
        }
    }
}

/// One servo as the strategy code sees it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servo {
    /// Identifier; 0 is reserved for "slot unused" on the wire.
    pub id: u8,
    /// Last position reported by the electronics.
    pub known_position: u16,
    /// Current order.
    pub control: Control,
    /// Whether the servo is forcing against an obstacle.
    pub blocked: bool,
    /// Reaction to a blockage.
    pub mode: BlockingMode,
    /// Indicator LED color.
    pub color: Color,
}

impl From<Servo> for servo::Servo {
    fn from(value: Servo) -> Self {
        let (command_kind, command) = value.control.split();
        servo::Servo {
            id: value.id,
            position: value.known_position,
            command,
            command_kind,
            blocked: value.blocked,
            blocking_mode: value.mode,
            color: value.color,
        }
    }
}

impl From<servo::Servo> for Servo {
    fn from(value: servo::Servo) -> Self {
        Servo {
            id: value.id,
            known_position: value.position,
            control: Control::join(value.command_kind, value.command),
            blocked: value.blocked,
            mode: value.blocking_mode,
            color: value.color,
        }
    }
}

/// A bounded group of at most [`MAX_SERVOS`] servos.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServoGroup {
    /// The servos, in frame order.
    pub servos: ArrayVec<Servo, MAX_SERVOS>,
}

impl ServoGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from a slice, rejecting more than [`MAX_SERVOS`] records.
    pub fn try_from_slice(servos: &[Servo]) -> Result<Self> {
        if servos.len() > MAX_SERVOS {
            return Err(FrameError::TooManyRecords {
                count: servos.len(),
                max: MAX_SERVOS,
            });
        }
        Ok(ServoGroup {
            servos: servos.iter().copied().collect(),
        })
    }

    /// Decode a group from an already-delimited frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frame = servo::decode_frame(bytes);
        if frame.parsing_failed {
            return Err(FrameError::Malformed);
        }

        let servos = frame.servos[..frame.count as usize]
            .iter()
            .copied()
            .map(Servo::from)
            .collect();
        Ok(ServoGroup { servos })
    }

    /// Encode the group into a fresh frame.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let frame = self.to_frame();
        let mut buf = [0u8; MAX_WIRE_SIZE];
        let written = servo::encode_frame(&frame, &mut buf);
        if written == 0 {
            return Err(FrameError::BufferTooSmall);
        }
        Ok(Bytes::copy_from_slice(&buf[..written]))
    }

    /// Lower the group onto the fixed-array frame representation.
    pub fn to_frame(&self) -> ServoFrame {
        let mut frame = ServoFrame::default();
        for (slot, servo) in self.servos.iter().enumerate() {
            frame.servos[slot] = (*servo).into();
        }
        frame.count = self.servos.len() as u8;
        frame
    }

    /// Exact frame length in bytes for `count` servo records.
    pub fn frame_size(count: usize) -> usize {
        servo::frame_size(count)
    }
}
