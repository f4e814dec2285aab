//! Servo frame codec.
//!
//! Wire format:
//! ```text
//! ┌────────────┬────────────────────────────────────────────────────┐
//! │ Count (1B) │ N × [ id(1) position(2 BE) command(2 BE) status(1) ]│
//! └────────────┴────────────────────────────────────────────────────┘
//! ```
//! Status byte layout (most- to least-significant used bits): bit 5 =
//! command kind, bit 4 = blocked, bit 3 = blocking mode, bits 2-0 = color.

use bytes::{Buf, BufMut};

/// Maximum number of servo records per frame.
pub const MAX_SERVOS: usize = 8;

/// Frame header: record count (1 byte).
pub const HEADER_SIZE: usize = 1;

/// Each servo record occupies 6 bytes on the wire.
pub const RECORD_SIZE: usize = 6;

const CMD_KIND_SHIFT: u8 = 5;
const BLOCKED_SHIFT: u8 = 4;
const BLOCKING_MODE_SHIFT: u8 = 3;
const COLOR_MASK: u8 = 0b0000_0111;

/// Whether the commanded value is a position or a speed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// The command field holds a position setpoint.
    #[default]
    Position = 0,
    /// The command field holds a speed setpoint.
    Speed = 1,
}

impl CommandKind {
    /// Any non-zero bit means a speed command.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            CommandKind::Position
        } else {
            CommandKind::Speed
        }
    }

    /// The single wire bit for this kind.
    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// Behavior of a servo when it is blocked by an external force.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockingMode {
    /// Release pressure when blocked.
    #[default]
    Unblocking = 0,
    /// Hold torque against the blockage.
    HoldOnBlock = 1,
}

impl BlockingMode {
    /// Any non-zero bit means hold-on-block.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            BlockingMode::Unblocking
        } else {
            BlockingMode::HoldOnBlock
        }
    }

    /// The single wire bit for this mode.
    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// Color displayed on a servo's indicator LED (3-bit value).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black = 0,
    Red = 1,
    #[default]
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Every 3-bit pattern maps to a color, so this conversion is total;
    /// higher bits are masked off.
    pub fn from_bits(bits: u8) -> Self {
        match bits & COLOR_MASK {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::White,
        }
    }

    /// The 3-bit wire value for this color.
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// One servo record. `id == 0` marks an unused slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Servo {
    /// Identifier; 0 is reserved for "slot unused".
    pub id: u8,
    /// Current position reported by the electronics.
    pub position: u16,
    /// Commanded value; a position or a speed depending on `command_kind`.
    pub command: u16,
    /// Interpretation of `command`.
    pub command_kind: CommandKind,
    /// Set when the servo is forcing against an obstacle.
    pub blocked: bool,
    /// Reaction to a blockage.
    pub blocking_mode: BlockingMode,
    /// Indicator LED color.
    pub color: Color,
}

/// A decoded servo frame: up to [`MAX_SERVOS`] records plus the parse flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServoFrame {
    /// Record slots; decoded records are packed from index 0.
    pub servos: [Servo; MAX_SERVOS],
    /// Number of records the frame header declared.
    pub count: u8,
    /// True when decoding rejected the frame; no other field is trustworthy.
    pub parsing_failed: bool,
}

impl ServoFrame {
    fn rejected() -> Self {
        ServoFrame {
            parsing_failed: true,
            ..ServoFrame::default()
        }
    }
}

/// Exact frame length in bytes for `count` servo records.
pub const fn frame_size(count: usize) -> usize {
    HEADER_SIZE + RECORD_SIZE * count
}

/// Decode a servo frame from an already-delimited byte slice.
///
/// Failure is reported through [`ServoFrame::parsing_failed`]; this function
/// never panics. The frame is rejected when the slice is empty, when its
/// length does not match the declared record count exactly, when the count
/// exceeds [`MAX_SERVOS`], or when a record carries a zero or duplicate
/// identifier.
pub fn decode_frame(message: &[u8]) -> ServoFrame {
    if message.is_empty() {
        return ServoFrame::rejected();
    }

    let mut buf = message;
    let count = buf.get_u8();

    if count as usize > MAX_SERVOS || message.len() != frame_size(count as usize) {
        return ServoFrame::rejected();
    }

    let mut frame = ServoFrame::default();
    for slot in 0..count as usize {
        let id = buf.get_u8();
        if id == 0 || frame.servos.iter().any(|s| s.id == id) {
            return ServoFrame::rejected();
        }

        let position = buf.get_u16();
        let command = buf.get_u16();
        let status = buf.get_u8();
        frame.servos[slot] = Servo {
            id,
            position,
            command,
            command_kind: CommandKind::from_bit((status >> CMD_KIND_SHIFT) & 1),
            blocked: (status >> BLOCKED_SHIFT) & 1 != 0,
            blocking_mode: BlockingMode::from_bit((status >> BLOCKING_MODE_SHIFT) & 1),
            color: Color::from_bits(status),
        };
    }

    frame.count = count;
    frame
}

/// Encode a servo frame into a caller-supplied buffer.
///
/// The leading byte is the number of populated slots (id > 0) across the
/// whole array; records are emitted from the first `count` slots. Returns
/// the number of bytes written, or 0 when the buffer cannot hold the frame
/// (nothing is written in that case).
pub fn encode_frame(frame: &ServoFrame, dst: &mut [u8]) -> usize {
    let populated = frame.servos.iter().filter(|s| s.id > 0).count();
    if dst.len() < frame_size(populated) {
        return 0;
    }

    let mut buf: &mut [u8] = dst;
    buf.put_u8(populated as u8);
    let mut written = HEADER_SIZE;

    for servo in frame.servos.iter().take(frame.count as usize) {
        if servo.id == 0 {
            continue;
        }
        buf.put_u8(servo.id);
        buf.put_u16(servo.position);
        buf.put_u16(servo.command);
        buf.put_u8(pack_status(servo));
        written += RECORD_SIZE;
    }

    written
}

fn pack_status(servo: &Servo) -> u8 {
    (servo.command_kind.bit() << CMD_KIND_SHIFT)
        | ((servo.blocked as u8) << BLOCKED_SHIFT)
        | (servo.blocking_mode.bit() << BLOCKING_MODE_SHIFT)
        | servo.color.bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u8) -> Servo {
        Servo {
            id,
            position: 512 + id as u16,
            command: 162,
            command_kind: CommandKind::Speed,
            blocked: false,
            blocking_mode: BlockingMode::Unblocking,
            color: Color::Magenta,
        }
    }

    #[test]
    fn frame_size_formula() {
        for count in 0..=MAX_SERVOS {
            assert_eq!(frame_size(count), 1 + 6 * count);
        }
    }

    #[test]
    fn encode_worked_example() {
        let mut frame = ServoFrame::default();
        frame.servos[0] = Servo {
            id: 3,
            position: 1000,
            command: 1000,
            command_kind: CommandKind::Speed,
            blocked: false,
            blocking_mode: BlockingMode::HoldOnBlock,
            color: Color::Magenta,
        };
        frame.count = 1;

        let mut buf = [0u8; 7];
        let written = encode_frame(&frame, &mut buf);

        assert_eq!(written, 7);
        assert_eq!(buf, [1, 3, 0x03, 0xE8, 0x03, 0xE8, 0x2D]);
    }

    #[test]
    fn decode_worked_example() {
        let frame = decode_frame(&[1, 3, 0x03, 0xE8, 0x03, 0xE8, 0x2D]);

        assert!(!frame.parsing_failed);
        assert_eq!(frame.count, 1);
        let servo = frame.servos[0];
        assert_eq!(servo.id, 3);
        assert_eq!(servo.position, 1000);
        assert_eq!(servo.command, 1000);
        assert_eq!(servo.command_kind, CommandKind::Speed);
        assert!(!servo.blocked);
        assert_eq!(servo.blocking_mode, BlockingMode::HoldOnBlock);
        assert_eq!(servo.color, Color::Magenta);
    }

    #[test]
    fn roundtrip_full_frame() {
        let mut frame = ServoFrame::default();
        for (slot, id) in [1u8, 89, 12, 255, 254, 127, 45, 128].iter().enumerate() {
            frame.servos[slot] = sample(*id);
        }
        frame.count = 8;

        let mut buf = [0u8; 64];
        let written = encode_frame(&frame, &mut buf);
        assert_eq!(written, frame_size(8));

        let decoded = decode_frame(&buf[..written]);
        assert!(!decoded.parsing_failed);
        assert_eq!(decoded, frame);
    }

    #[test]
    fn roundtrip_preserves_records_up_to_ordering() {
        let mut frame = ServoFrame::default();
        frame.servos[0] = sample(7);
        frame.servos[1] = sample(2);
        frame.servos[2] = sample(9);
        frame.count = 3;

        let mut buf = [0u8; 32];
        let written = encode_frame(&frame, &mut buf);
        let decoded = decode_frame(&buf[..written]);

        assert!(!decoded.parsing_failed);
        for servo in frame.servos.iter().filter(|s| s.id > 0) {
            assert!(decoded.servos.contains(servo));
        }
    }

    #[test]
    fn empty_input_rejected() {
        assert!(decode_frame(&[]).parsing_failed);
    }

    #[test]
    fn truncated_frame_rejected() {
        // Claims 2 servos but carries none: 1 + 12 = 13 != 1.
        assert!(decode_frame(&[0x02]).parsing_failed);
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut buf = [0u8; 16];
        let mut frame = ServoFrame::default();
        frame.servos[0] = sample(1);
        frame.count = 1;
        let written = encode_frame(&frame, &mut buf);

        assert!(decode_frame(&buf[..written + 1]).parsing_failed);
    }

    #[test]
    fn zero_id_rejected() {
        let frame = decode_frame(&[1, 0, 0x00, 0x10, 0x00, 0x20, 0x05]);
        assert!(frame.parsing_failed);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut wire = vec![2u8];
        wire.extend_from_slice(&[5, 0x00, 0x10, 0x00, 0x20, 0x05]);
        wire.extend_from_slice(&[5, 0x00, 0x30, 0x00, 0x40, 0x00]);

        assert!(decode_frame(&wire).parsing_failed);
    }

    #[test]
    fn count_beyond_capacity_rejected() {
        // Length-consistent frame declaring 9 records must not be trusted.
        let mut wire = vec![9u8];
        for id in 1..=9u8 {
            wire.extend_from_slice(&[id, 0, 0, 0, 0, 0]);
        }
        assert_eq!(wire.len(), frame_size(9));

        assert!(decode_frame(&wire).parsing_failed);
    }

    #[test]
    fn undersized_buffer_writes_nothing() {
        let mut frame = ServoFrame::default();
        frame.servos[0] = sample(1);
        frame.servos[1] = sample(2);
        frame.count = 2;

        // Exactly one byte short of the required 13.
        let mut buf = [0xAAu8; 12];
        assert_eq!(encode_frame(&frame, &mut buf), 0);
        assert!(buf.iter().all(|b| *b == 0xAA));
    }

    #[test]
    fn empty_frame_encodes_count_only() {
        let frame = ServoFrame::default();
        let mut buf = [0xFFu8; 4];

        assert_eq!(encode_frame(&frame, &mut buf), 1);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn status_bits_cover_all_fields() {
        for status in 0..=0b0011_1111u8 {
            let wire = [1, 4, 0, 0, 0, 0, status];
            let decoded = decode_frame(&wire);
            assert!(!decoded.parsing_failed);

            let mut buf = [0u8; 7];
            assert_eq!(encode_frame(&decoded, &mut buf), 7);
            assert_eq!(buf[6], status);
        }
    }
}
