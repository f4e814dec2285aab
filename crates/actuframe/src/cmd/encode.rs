use std::fs;

use actuframe::{IoState, MotorGroup, ServoGroup};
use bytes::Bytes;
use tracing::debug;

use crate::cmd::{EncodeArgs, FrameKind};
use crate::exit::{frame_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let json = resolve_json(&args)?;

    let bytes = match args.kind {
        FrameKind::Servo => {
            let group: ServoGroup = parse_json(&json)?;
            debug!(records = group.servos.len(), "encoding servo frame");
            group.to_bytes()
        }
        FrameKind::Motor => {
            let group: MotorGroup = parse_json(&json)?;
            group.to_bytes()
        }
        FrameKind::Io => {
            let state: IoState = parse_json(&json)?;
            state.to_bytes()
        }
        FrameKind::Avoidance | FrameKind::Moving => {
            return Err(CliError::new(
                DATA_INVALID,
                format!("{:?} frames have no wire format yet", args.kind),
            ));
        }
    }
    .map_err(|err| frame_error("encode failed", err))?;

    println!("{}", to_hex(&bytes));
    Ok(SUCCESS)
}

fn resolve_json(args: &EncodeArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "provide the value via --json or --file"))
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> CliResult<T> {
    serde_json::from_str(json)
        .map_err(|err| CliError::new(DATA_INVALID, format!("invalid JSON value: {err}")))
}

fn to_hex(bytes: &Bytes) -> String {
    hex::encode(bytes)
}
