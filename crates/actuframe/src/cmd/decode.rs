use actuframe::{IoState, MotorGroup, ServoGroup};
use tracing::debug;

use crate::cmd::{DecodeArgs, FrameKind};
use crate::exit::{frame_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_io_state, print_motor_group, print_servo_group, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = parse_hex(&args.hex)?;
    debug!(kind = ?args.kind, len = bytes.len(), "decoding frame");

    match args.kind {
        FrameKind::Servo => {
            let group =
                ServoGroup::from_bytes(&bytes).map_err(|err| frame_error("decode failed", err))?;
            print_servo_group(&group, format);
        }
        FrameKind::Motor => {
            let group =
                MotorGroup::from_bytes(&bytes).map_err(|err| frame_error("decode failed", err))?;
            print_motor_group(&group, format);
        }
        FrameKind::Io => {
            let state =
                IoState::from_bytes(&bytes).map_err(|err| frame_error("decode failed", err))?;
            print_io_state(&state, format);
        }
        FrameKind::Avoidance | FrameKind::Moving => {
            return Err(CliError::new(
                DATA_INVALID,
                format!("{:?} frames have no wire format yet", args.kind),
            ));
        }
    }

    Ok(SUCCESS)
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    hex::decode(&compact).map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_tolerates_whitespace() {
        assert_eq!(parse_hex("01 03  03e8\t03e8 2d").unwrap().len(), 7);
    }

    #[test]
    fn bad_hex_is_a_usage_error() {
        let err = parse_hex("zz").unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn malformed_frame_is_invalid_data() {
        let args = DecodeArgs {
            kind: FrameKind::Servo,
            hex: "02".to_string(),
        };
        let err = run(args, OutputFormat::Raw).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn stub_kinds_are_rejected() {
        let args = DecodeArgs {
            kind: FrameKind::Moving,
            hex: "00".to_string(),
        };
        let err = run(args, OutputFormat::Raw).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }
}
