//! Typed actuator and IO state groups over the actuframe wire codecs.
//!
//! The [`codec`] layer works on fixed arrays with sentinel identifiers and
//! reports failure through an embedded flag, because that is what the
//! electronics speak. This crate re-exposes the same frames as bounded,
//! validated groups with `Result`-based conversions and serde support, which
//! is what the strategy code wants to handle.
//!
//! # Crate Structure
//!
//! - [`codec`] — Re-export of the raw frame codecs (`actuframe-codec`)
//! - [`servo`] — [`ServoGroup`]: servos with a merged position/speed [`Control`]
//! - [`motor`] — [`MotorGroup`]: controlled / uncontrolled / brushless motors
//! - [`io`] — [`IoState`]: the tirette as a [`TriggerState`]
//!
//! ```
//! use actuframe::{Control, Servo, ServoGroup};
//!
//! let mut group = ServoGroup::new();
//! group.servos.push(Servo {
//!     id: 3,
//!     known_position: 1000,
//!     control: Control::Speed(1000),
//!     ..Servo::default()
//! });
//!
//! let bytes = group.to_bytes().unwrap();
//! assert_eq!(ServoGroup::from_bytes(&bytes).unwrap(), group);
//! ```

mod error;

pub mod io;
pub mod motor;
pub mod servo;

/// Re-export of the raw frame codecs.
pub mod codec {
    pub use actuframe_codec::*;
}

pub use error::FrameError;
pub use io::{IoState, TriggerState};
pub use motor::MotorGroup;
pub use servo::{Control, Servo, ServoGroup};
