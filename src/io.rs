//! Capabilities the robot core needs from whatever owns the devices.
//!
//! The firmware implements these over vexide devices; tests implement them
//! over plain fields.

use core::time::Duration;

use crate::{drive::TankOutput, teleop::InputState};

pub trait AutonSensors {
    /// Time since the autonomous period started.
    fn elapsed(&self) -> Duration;
    /// Drive encoder A, the one the routine steers by.
    fn encoder_a(&mut self) -> f64;
    /// Drive encoder B. Only traced.
    fn encoder_b(&mut self) -> f64;
    /// Raw field layout string, empty if none was delivered.
    fn alliance_data(&self) -> &str;
}

pub trait DriverInput {
    fn input_state(&mut self) -> InputState;
}

pub trait Actuators {
    fn set_drive(&mut self, output: TankOutput);
    fn set_shooter(&mut self, speed: f64);
}
