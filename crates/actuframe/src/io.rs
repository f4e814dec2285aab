//! High-level view of the IO board: the tirette.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::io::{self, IoFrame};
use crate::error::{FrameError, Result};

/// State of the start-pull switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    /// The tirette is in place; the match has not started.
    #[default]
    Waiting,
    /// The tirette has been pulled out.
    Triggered,
}

/// The robot's IO state as reported over the link.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoState {
    /// Start-pull switch reading.
    pub tirette: TriggerState,
}

impl IoState {
    /// Decode from an already-delimited frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frame = io::decode_frame(bytes);
        if frame.parsing_failed {
            return Err(FrameError::Malformed);
        }

        let tirette = if frame.tirette != 0 {
            TriggerState::Waiting
        } else {
            TriggerState::Triggered
        };
        Ok(IoState { tirette })
    }

    /// Encode into a fresh one-byte frame.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let frame = IoFrame {
            tirette: match self.tirette {
                TriggerState::Waiting => 1,
                TriggerState::Triggered => 0,
            },
            parsing_failed: false,
        };

        let mut buf = [0u8; io::FRAME_SIZE];
        let written = io::encode_frame(&frame, &mut buf);
        if written == 0 {
            return Err(FrameError::BufferTooSmall);
        }
        Ok(Bytes::copy_from_slice(&buf[..written]))
    }

    /// Exact frame length in bytes.
    pub fn frame_size() -> usize {
        io::frame_size()
    }
}
