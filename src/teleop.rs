use crate::{Outputs, config::TeleopConfig, drive::DriveCommand};

/// Controller state sampled once per driver tick.
///
/// Axes are in [-1, 1]. A disconnected controller reads as `Default`, which
/// leaves the robot still and the shooter off.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub forward: f64,
    pub turn: f64,
    pub throttle: f64,
    /// Shooter reverse, highest priority.
    pub shooter_a: bool,
    /// Shooter reverse, second.
    pub shooter_b: bool,
    /// Shooter forward, last.
    pub shooter_c: bool,
    pub flip_direction: bool,
    pub precision: bool,
}

/// Shooter direction from the three shooter buttons.
///
/// Order matters: A and B both reverse and win over C. Reverse is -1 because
/// of how the shooter motors are mounted.
pub fn shooter_direction(input: &InputState) -> f64 {
    match (input.shooter_a, input.shooter_b, input.shooter_c) {
        (true, _, _) => -1.0,
        (false, true, _) => -1.0,
        (false, false, true) => 1.0,
        (false, false, false) => 0.0,
    }
}

/// Straight stick-to-motor mapping for the driver period.
#[derive(Clone, Debug)]
pub struct TeleopController {
    config: TeleopConfig,
}

impl TeleopController {
    pub fn new(config: TeleopConfig) -> Self {
        Self { config }
    }

    /// Forward axis sign. Pushing the stick forward reads negative, so the
    /// default is -1.
    pub fn direction(&self, input: &InputState) -> f64 {
        if input.flip_direction { 1.0 } else { -1.0 }
    }

    pub fn speed_scale(&self, input: &InputState) -> f64 {
        if input.precision {
            self.config.precision_scale
        } else {
            1.0
        }
    }

    pub fn tick(&self, input: &InputState) -> Outputs {
        let forward = input.forward * self.speed_scale(input) * self.direction(input);
        Outputs {
            drive: DriveCommand::new(forward, input.turn),
            shooter: shooter_direction(input) * (input.throttle + 1.0),
        }
    }
}
