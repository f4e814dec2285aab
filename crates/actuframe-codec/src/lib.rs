//! Fixed-format binary frame codecs for a small robot's actuators and IO.
//!
//! This is the hard core of actuframe. Each module is one stateless codec
//! pair operating on an already-delimited byte slice — transport concerns
//! (start bytes, checksums, retransmission) belong to the link layer, not
//! here. All multi-byte integers are big-endian.
//!
//! - [`servo`] — up to [`MAX_SERVOS`](servo::MAX_SERVOS) servo records per frame
//! - [`motor`] — controlled / uncontrolled / brushless motors in one frame
//! - [`io`] — the tirette (start-pull switch) state
//! - [`avoidance`], [`moving`] — declared interfaces, wire format not yet designed
//!
//! Decoding never panics and never returns an error type: each decoded value
//! embeds a `parsing_failed` flag that callers must check before trusting
//! any other field. Encoding returns the number of bytes written, or 0 when
//! the destination buffer is too small (all-or-nothing, no partial write).
//! No codec allocates.

pub mod avoidance;
pub mod io;
pub mod motor;
pub mod moving;
pub mod servo;

pub use avoidance::AvoidanceFrame;
pub use io::IoFrame;
pub use motor::{Brushless, ControlledMotor, MotorFrame, Rotation, UncontrolledMotor};
pub use moving::{MoveKind, MovingFrame};
pub use servo::{BlockingMode, Color, CommandKind, Servo, ServoFrame};
