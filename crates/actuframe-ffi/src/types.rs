//! `#[repr(C)]` mirrors of the codec structures.
//!
//! Field names and layout follow the shared header the electronics build
//! against; changing either breaks the C++ side silently.

use std::os::raw::{c_char, c_int};

use actuframe_codec::motor::{MAX_BRUSHLESS, MAX_CONTROLLED_MOTORS, MAX_UNCONTROLLED_MOTORS};
use actuframe_codec::servo::MAX_SERVOS;
use actuframe_codec::{
    AvoidanceFrame, BlockingMode, Brushless, Color, CommandKind, ControlledMotor, IoFrame,
    MotorFrame, MovingFrame, Rotation, Servo, ServoFrame, UncontrolledMotor,
};

/// One servo record as the C side sees it.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawServo {
    pub id: u8,
    pub position: u16,
    pub command: u16,
    pub command_type: u8,
    pub blocked: c_char,
    pub blocking_mode: u8,
    pub color: u8,
}

/// The servo frame shared struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawServos {
    pub servos: [RawServo; MAX_SERVOS],
    pub nb_servos: u8,
    /// 0 = parse OK, 1 = parse failed.
    pub parsing_failed: u8,
}

impl RawServos {
    pub(crate) fn failed() -> Self {
        RawServos {
            parsing_failed: 1,
            ..RawServos::default()
        }
    }
}

impl From<Servo> for RawServo {
    fn from(servo: Servo) -> Self {
        RawServo {
            id: servo.id,
            position: servo.position,
            command: servo.command,
            command_type: servo.command_kind.bit(),
            blocked: servo.blocked as c_char,
            blocking_mode: servo.blocking_mode.bit(),
            color: servo.color.bits(),
        }
    }
}

impl From<RawServo> for Servo {
    fn from(raw: RawServo) -> Self {
        Servo {
            id: raw.id,
            position: raw.position,
            command: raw.command,
            command_kind: CommandKind::from_bit(raw.command_type),
            blocked: raw.blocked != 0,
            blocking_mode: BlockingMode::from_bit(raw.blocking_mode),
            color: Color::from_bits(raw.color),
        }
    }
}

impl From<ServoFrame> for RawServos {
    fn from(frame: ServoFrame) -> Self {
        RawServos {
            servos: frame.servos.map(RawServo::from),
            nb_servos: frame.count,
            parsing_failed: frame.parsing_failed as u8,
        }
    }
}

impl From<RawServos> for ServoFrame {
    fn from(raw: RawServos) -> Self {
        ServoFrame {
            servos: raw.servos.map(Servo::from),
            count: raw.nb_servos,
            parsing_failed: raw.parsing_failed != 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawControlledMotor {
    pub id: u8,
    pub wanted_angle_position: u8,
    pub wanted_nb_turns: u8,
    pub finished: u8,
    pub new_command: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawUncontrolledMotor {
    pub id: u8,
    pub on_off: u8,
    pub rotation: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawBrushless {
    pub id: u8,
    pub on_off: u8,
}

/// The motor frame shared struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawMotors {
    pub controlled_motors: [RawControlledMotor; MAX_CONTROLLED_MOTORS],
    pub uncontrolled_motors: [RawUncontrolledMotor; MAX_UNCONTROLLED_MOTORS],
    pub brushless: [RawBrushless; MAX_BRUSHLESS],
    /// 0 = parse OK, 1 = parse failed.
    pub parsing_failed: u8,
}

impl RawMotors {
    pub(crate) fn failed() -> Self {
        RawMotors {
            parsing_failed: 1,
            ..RawMotors::default()
        }
    }
}

impl From<MotorFrame> for RawMotors {
    fn from(frame: MotorFrame) -> Self {
        RawMotors {
            controlled_motors: frame.controlled.map(|m| RawControlledMotor {
                id: m.id,
                wanted_angle_position: m.wanted_angle,
                wanted_nb_turns: m.wanted_turns,
                finished: m.finished as u8,
                new_command: m.new_command as u8,
            }),
            uncontrolled_motors: frame.uncontrolled.map(|m| RawUncontrolledMotor {
                id: m.id,
                on_off: m.running as u8,
                rotation: m.rotation.bit(),
            }),
            brushless: frame.brushless.map(|b| RawBrushless {
                id: b.id,
                on_off: b.on_off,
            }),
            parsing_failed: frame.parsing_failed as u8,
        }
    }
}

impl From<RawMotors> for MotorFrame {
    fn from(raw: RawMotors) -> Self {
        MotorFrame {
            controlled: raw.controlled_motors.map(|m| ControlledMotor {
                id: m.id,
                wanted_angle: m.wanted_angle_position,
                wanted_turns: m.wanted_nb_turns,
                finished: m.finished != 0,
                new_command: m.new_command != 0,
            }),
            uncontrolled: raw.uncontrolled_motors.map(|m| UncontrolledMotor {
                id: m.id,
                running: m.on_off != 0,
                rotation: Rotation::from_bit(m.rotation),
            }),
            brushless: raw.brushless.map(|b| Brushless {
                id: b.id,
                on_off: b.on_off,
            }),
            parsing_failed: raw.parsing_failed != 0,
        }
    }
}

/// The IO frame shared struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawIo {
    /// 1 = tirette in place, 0 = tirette pulled.
    pub tirette: u8,
    /// 0 = parse OK, 1 = parse failed.
    pub parsing_failed: u8,
}

impl From<IoFrame> for RawIo {
    fn from(frame: IoFrame) -> Self {
        RawIo {
            tirette: frame.tirette,
            parsing_failed: frame.parsing_failed as u8,
        }
    }
}

impl From<RawIo> for IoFrame {
    fn from(raw: RawIo) -> Self {
        IoFrame {
            tirette: raw.tirette,
            parsing_failed: raw.parsing_failed != 0,
        }
    }
}

/// The avoidance shared struct; wire format not yet designed.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawAvoidance {
    pub angle_detection_adversary: c_int,
    pub adversary_detected: u8,
    pub parsing_failed: u8,
}

impl From<AvoidanceFrame> for RawAvoidance {
    fn from(frame: AvoidanceFrame) -> Self {
        RawAvoidance {
            angle_detection_adversary: frame.adversary_angle,
            adversary_detected: frame.adversary_detected as u8,
            parsing_failed: frame.parsing_failed as u8,
        }
    }
}

/// The moving shared struct; wire format not yet designed.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawMoving {
    pub pos_x: u16,
    pub pos_y: u16,
    pub angle: u16,
    pub linear_speed: u16,
    pub angular_speed: u16,
    pub reset: u8,
    pub move_type: c_int,
    pub blocked: u8,
    pub moving_done: u8,
    pub accuracy_reached: u8,
    pub servitude_on_off: u8,
    pub led: u8,
    pub parsing_failed: u8,
}

impl From<MovingFrame> for RawMoving {
    fn from(frame: MovingFrame) -> Self {
        RawMoving {
            pos_x: frame.pos_x,
            pos_y: frame.pos_y,
            angle: frame.angle,
            linear_speed: frame.linear_speed,
            angular_speed: frame.angular_speed,
            reset: frame.reset as u8,
            move_type: frame.move_kind as c_int,
            blocked: frame.blocked as u8,
            moving_done: frame.moving_done as u8,
            accuracy_reached: frame.accuracy_reached as u8,
            servitude_on_off: frame.servitude_on as u8,
            led: frame.led as u8,
            parsing_failed: frame.parsing_failed as u8,
        }
    }
}
