use actuframe::codec::motor::{MAX_BRUSHLESS, MAX_CONTROLLED_MOTORS, MAX_UNCONTROLLED_MOTORS};
use actuframe::codec::servo::MAX_SERVOS;
use actuframe::{IoState, MotorGroup, ServoGroup};

use crate::cmd::{FrameKind, SizeArgs};
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};

pub fn run(args: SizeArgs) -> CliResult<i32> {
    let size = match args.kind {
        FrameKind::Servo => {
            let [count] = expect_counts::<1>(&args)?;
            check_capacity("servo", count, MAX_SERVOS)?;
            ServoGroup::frame_size(count)
        }
        FrameKind::Motor => {
            let [controlled, uncontrolled, brushless] = expect_counts::<3>(&args)?;
            check_capacity("controlled motor", controlled, MAX_CONTROLLED_MOTORS)?;
            check_capacity("uncontrolled motor", uncontrolled, MAX_UNCONTROLLED_MOTORS)?;
            check_capacity("brushless", brushless, MAX_BRUSHLESS)?;
            MotorGroup::frame_size(controlled, uncontrolled, brushless)
        }
        FrameKind::Io => {
            let [] = expect_counts::<0>(&args)?;
            IoState::frame_size()
        }
        FrameKind::Avoidance | FrameKind::Moving => {
            return Err(CliError::new(
                DATA_INVALID,
                format!("{:?} frames have no wire format yet", args.kind),
            ));
        }
    };

    println!("{size}");
    Ok(SUCCESS)
}

fn expect_counts<const N: usize>(args: &SizeArgs) -> CliResult<[usize; N]> {
    args.counts.clone().try_into().map_err(|_| {
        CliError::new(
            USAGE,
            format!(
                "{:?} frames take {N} count argument(s), got {}",
                args.kind,
                args.counts.len()
            ),
        )
    })
}

fn check_capacity(family: &str, count: usize, max: usize) -> CliResult<()> {
    if count > max {
        return Err(CliError::new(
            USAGE,
            format!("at most {max} {family} records fit in one frame, got {count}"),
        ));
    }
    Ok(())
}
