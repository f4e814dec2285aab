//! Motor frame codec.
//!
//! One frame carries three sub-collections:
//! ```text
//! ┌─────────────────────┬──────────────┬──────────────┬──────────────┐
//! │ Counts c,u,b (3B)   │ c × 4 bytes  │ u × 2 bytes  │ b × 2 bytes  │
//! │                     │ controlled   │ uncontrolled │ brushless    │
//! └─────────────────────┴──────────────┴──────────────┴──────────────┘
//! ```
//! Controlled record: id, wanted angle, wanted turns, status byte
//! (bit 1 = finished, bit 0 = new command). Uncontrolled record: id, status
//! byte (bit 1 = on/off, bit 0 = rotation direction). Brushless record: id,
//! raw on/off byte.
//!
//! Unlike the servo codec, duplicate identifiers within a sub-collection are
//! not rejected here; the check was never present in the historical decoder
//! and receivers tolerate it.

use bytes::{Buf, BufMut};

/// Maximum number of controlled-motor records per frame.
pub const MAX_CONTROLLED_MOTORS: usize = 8;

/// Maximum number of uncontrolled-motor records per frame.
pub const MAX_UNCONTROLLED_MOTORS: usize = 8;

/// Maximum number of brushless records per frame.
pub const MAX_BRUSHLESS: usize = 8;

/// Frame header: three record counts (1 byte each).
pub const HEADER_SIZE: usize = 3;

const CONTROLLED_RECORD_SIZE: usize = 4;
const UNCONTROLLED_RECORD_SIZE: usize = 2;
const BRUSHLESS_RECORD_SIZE: usize = 2;

const FINISHED_SHIFT: u8 = 1;
const ON_OFF_SHIFT: u8 = 1;

/// Rotation direction of an uncontrolled motor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Clockwise ("schedule" direction in the electronics' terms).
    #[default]
    Clockwise = 0,
    /// Counterclockwise (trigonometric direction).
    Counterclockwise = 1,
}

impl Rotation {
    /// Any non-zero bit means counterclockwise.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Rotation::Clockwise
        } else {
            Rotation::Counterclockwise
        }
    }

    /// The single wire bit for this direction.
    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// A position-controlled motor record. `id == 0` marks an unused slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlledMotor {
    /// Identifier; 0 is reserved for "slot unused".
    pub id: u8,
    /// Angular position setpoint.
    pub wanted_angle: u8,
    /// Full-turn count setpoint.
    pub wanted_turns: u8,
    /// Electronics report: the last command completed.
    pub finished: bool,
    /// Controller order: discard previous setpoints, this is a fresh command.
    pub new_command: bool,
}

/// A free-running motor record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncontrolledMotor {
    /// Identifier; 0 is reserved for "slot unused".
    pub id: u8,
    /// Whether the motor is powered.
    pub running: bool,
    /// Spin direction.
    pub rotation: Rotation,
}

/// A brushless unit record. The on/off byte travels verbatim.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brushless {
    /// Identifier; 0 is reserved for "slot unused".
    pub id: u8,
    /// Raw on/off byte as carried on the wire (non-zero = on).
    pub on_off: u8,
}

/// A decoded motor frame: three fixed-capacity sub-collections plus the
/// parse flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotorFrame {
    /// Controlled-motor slots; decoded records are packed from index 0.
    pub controlled: [ControlledMotor; MAX_CONTROLLED_MOTORS],
    /// Uncontrolled-motor slots.
    pub uncontrolled: [UncontrolledMotor; MAX_UNCONTROLLED_MOTORS],
    /// Brushless slots.
    pub brushless: [Brushless; MAX_BRUSHLESS],
    /// True when decoding rejected the frame; no other field is trustworthy.
    pub parsing_failed: bool,
}

impl MotorFrame {
    fn rejected() -> Self {
        MotorFrame {
            parsing_failed: true,
            ..MotorFrame::default()
        }
    }
}

/// Exact frame length in bytes for the given record counts.
pub const fn frame_size(controlled: usize, uncontrolled: usize, brushless: usize) -> usize {
    HEADER_SIZE
        + CONTROLLED_RECORD_SIZE * controlled
        + UNCONTROLLED_RECORD_SIZE * uncontrolled
        + BRUSHLESS_RECORD_SIZE * brushless
}

/// Decode a motor frame from an already-delimited byte slice.
///
/// Failure is reported through [`MotorFrame::parsing_failed`]. The frame is
/// rejected when shorter than its header, when its length does not match the
/// three declared counts exactly, when a count exceeds its sub-collection
/// capacity, or when any record carries a zero identifier.
pub fn decode_frame(message: &[u8]) -> MotorFrame {
    if message.len() < HEADER_SIZE {
        return MotorFrame::rejected();
    }

    let mut buf = message;
    let nb_controlled = buf.get_u8() as usize;
    let nb_uncontrolled = buf.get_u8() as usize;
    let nb_brushless = buf.get_u8() as usize;

    if nb_controlled > MAX_CONTROLLED_MOTORS
        || nb_uncontrolled > MAX_UNCONTROLLED_MOTORS
        || nb_brushless > MAX_BRUSHLESS
        || message.len() != frame_size(nb_controlled, nb_uncontrolled, nb_brushless)
    {
        return MotorFrame::rejected();
    }

    let mut frame = MotorFrame::default();

    for slot in 0..nb_controlled {
        let id = buf.get_u8();
        if id == 0 {
            return MotorFrame::rejected();
        }
        let wanted_angle = buf.get_u8();
        let wanted_turns = buf.get_u8();
        let status = buf.get_u8();
        frame.controlled[slot] = ControlledMotor {
            id,
            wanted_angle,
            wanted_turns,
            finished: (status >> FINISHED_SHIFT) & 1 != 0,
            new_command: status & 1 != 0,
        };
    }

    for slot in 0..nb_uncontrolled {
        let id = buf.get_u8();
        if id == 0 {
            return MotorFrame::rejected();
        }
        let status = buf.get_u8();
        frame.uncontrolled[slot] = UncontrolledMotor {
            id,
            running: (status >> ON_OFF_SHIFT) & 1 != 0,
            rotation: Rotation::from_bit(status & 1),
        };
    }

    for slot in 0..nb_brushless {
        let id = buf.get_u8();
        if id == 0 {
            return MotorFrame::rejected();
        }
        frame.brushless[slot] = Brushless {
            id,
            on_off: buf.get_u8(),
        };
    }

    frame
}

/// Encode a motor frame into a caller-supplied buffer.
///
/// Populated slots (id > 0) are counted across each full sub-array; the
/// three counts are emitted, then every populated record in array order.
/// Returns the number of bytes written, or 0 when the buffer cannot hold
/// the frame (nothing is written in that case).
pub fn encode_frame(frame: &MotorFrame, dst: &mut [u8]) -> usize {
    let nb_controlled = frame.controlled.iter().filter(|m| m.id > 0).count();
    let nb_uncontrolled = frame.uncontrolled.iter().filter(|m| m.id > 0).count();
    let nb_brushless = frame.brushless.iter().filter(|m| m.id > 0).count();

    if dst.len() < frame_size(nb_controlled, nb_uncontrolled, nb_brushless) {
        return 0;
    }

    let mut buf: &mut [u8] = dst;
    buf.put_u8(nb_controlled as u8);
    buf.put_u8(nb_uncontrolled as u8);
    buf.put_u8(nb_brushless as u8);
    let mut written = HEADER_SIZE;

    for motor in frame.controlled.iter().filter(|m| m.id > 0) {
        buf.put_u8(motor.id);
        buf.put_u8(motor.wanted_angle);
        buf.put_u8(motor.wanted_turns);
        buf.put_u8(((motor.finished as u8) << FINISHED_SHIFT) | motor.new_command as u8);
        written += CONTROLLED_RECORD_SIZE;
    }

    for motor in frame.uncontrolled.iter().filter(|m| m.id > 0) {
        buf.put_u8(motor.id);
        buf.put_u8(((motor.running as u8) << ON_OFF_SHIFT) | motor.rotation.bit());
        written += UNCONTROLLED_RECORD_SIZE;
    }

    for unit in frame.brushless.iter().filter(|b| b.id > 0) {
        buf.put_u8(unit.id);
        buf.put_u8(unit.on_off);
        written += BRUSHLESS_RECORD_SIZE;
    }

    written
}
