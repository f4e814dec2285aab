use std::io::IsTerminal;

use actuframe::{IoState, MotorGroup, ServoGroup};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_servo_group(group: &ServoGroup, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(group),
        OutputFormat::Table => {
            let mut table = new_table(vec!["ID", "POSITION", "CONTROL", "BLOCKED", "MODE", "COLOR"]);
            for servo in &group.servos {
                table.add_row(vec![
                    servo.id.to_string(),
                    servo.known_position.to_string(),
                    format!("{:?}", servo.control),
                    servo.blocked.to_string(),
                    format!("{:?}", servo.mode),
                    format!("{:?}", servo.color),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for servo in &group.servos {
                println!(
                    "servo id={} position={} control={:?} blocked={} mode={:?} color={:?}",
                    servo.id,
                    servo.known_position,
                    servo.control,
                    servo.blocked,
                    servo.mode,
                    servo.color
                );
            }
        }
        OutputFormat::Raw => println!("{group:?}"),
    }
}

pub fn print_motor_group(group: &MotorGroup, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(group),
        OutputFormat::Table => {
            let mut table = new_table(vec!["FAMILY", "ID", "DETAIL"]);
            for motor in &group.controlled {
                table.add_row(vec![
                    "controlled".to_string(),
                    motor.id.to_string(),
                    format!(
                        "angle={} turns={} finished={} new_command={}",
                        motor.wanted_angle, motor.wanted_turns, motor.finished, motor.new_command
                    ),
                ]);
            }
            for motor in &group.uncontrolled {
                table.add_row(vec![
                    "uncontrolled".to_string(),
                    motor.id.to_string(),
                    format!("running={} rotation={:?}", motor.running, motor.rotation),
                ]);
            }
            for unit in &group.brushless {
                table.add_row(vec![
                    "brushless".to_string(),
                    unit.id.to_string(),
                    format!("on_off={:#04x}", unit.on_off),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for motor in &group.controlled {
                println!(
                    "controlled id={} angle={} turns={} finished={} new_command={}",
                    motor.id, motor.wanted_angle, motor.wanted_turns, motor.finished,
                    motor.new_command
                );
            }
            for motor in &group.uncontrolled {
                println!(
                    "uncontrolled id={} running={} rotation={:?}",
                    motor.id, motor.running, motor.rotation
                );
            }
            for unit in &group.brushless {
                println!("brushless id={} on_off={:#04x}", unit.id, unit.on_off);
            }
        }
        OutputFormat::Raw => println!("{group:?}"),
    }
}

pub fn print_io_state(state: &IoState, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(state),
        OutputFormat::Table => {
            let mut table = new_table(vec!["INPUT", "STATE"]);
            table.add_row(vec!["tirette".to_string(), format!("{:?}", state.tirette)]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("tirette={:?}", state.tirette),
        OutputFormat::Raw => println!("{state:?}"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}
